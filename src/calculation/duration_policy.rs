//! Duration policies.
//!
//! Two interchangeable ways of turning a written shift into billable hours:
//!
//! - [`SimplePolicy`] subtracts the written break from the shift span.
//! - [`TabulatedPolicy`] clips the shift to a legal working window, ignores
//!   the written break and deducts a flat unpaid lunch hour from long shifts.
//!
//! Both are evaluated for every entry; [`PolicyKind`] selects which figure a
//! deployment treats as primary.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ClockTime, EntryHours, TimeRange};

use super::time::{hours_between, round_hours};
use super::weekday::is_weekend;

/// Identifies a duration policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Shift span minus the written break.
    Simple,
    /// Window-clipped span with a flat lunch deduction.
    #[default]
    Tabulated,
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyKind::Simple => write!(f, "simple"),
            PolicyKind::Tabulated => write!(f, "tabulated"),
        }
    }
}

/// Computes billable hours for one shift.
pub trait DurationPolicy {
    /// The policy this implementation represents.
    fn kind(&self) -> PolicyKind;

    /// Hours for a shift on the given weekday, rounded to two decimals.
    fn hours(&self, shift: &TimeRange, break_range: Option<&TimeRange>, weekday: Weekday)
    -> Decimal;
}

/// Shift span minus the written break; no clipping.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::{DurationPolicy, SimplePolicy};
/// use schedule_engine::models::TimeRange;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let shift = TimeRange::parse("8:00", "18:00").unwrap();
/// let lunch = TimeRange::parse("12:30", "13:00").unwrap();
/// let hours = SimplePolicy.hours(&shift, Some(&lunch), Weekday::Mon);
/// assert_eq!(hours, Decimal::new(95, 1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplePolicy;

impl DurationPolicy for SimplePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Simple
    }

    fn hours(
        &self,
        shift: &TimeRange,
        break_range: Option<&TimeRange>,
        _weekday: Weekday,
    ) -> Decimal {
        let worked = hours_between(shift.start.minutes(), shift.end.minutes());
        let rest = break_range
            .map(|b| hours_between(b.start.minutes(), b.end.minutes()))
            .unwrap_or(Decimal::ZERO);
        round_hours(worked - rest)
    }
}

/// Window-clipped hours with a flat lunch deduction.
///
/// The shift is clipped to `weekday_window` (or `weekend_window` on Saturday
/// and Sunday). A clipped span of `lunch_threshold` hours or more loses
/// `lunch_deduction` hours, never going below zero. The written break is
/// not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabulatedPolicy {
    /// Legal window Monday to Friday.
    pub weekday_window: TimeRange,
    /// Legal window on Saturday and Sunday.
    pub weekend_window: TimeRange,
    /// Span at or above which the lunch deduction applies.
    pub lunch_threshold: Decimal,
    /// Hours deducted for lunch.
    pub lunch_deduction: Decimal,
}

/// Default lunch threshold: six hours.
pub const DEFAULT_LUNCH_THRESHOLD: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Default lunch deduction: one hour.
pub const DEFAULT_LUNCH_DEDUCTION: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

const fn window(start_hour: u32, end_hour: u32) -> TimeRange {
    TimeRange {
        start: ClockTime::on_the_hour(start_hour),
        end: ClockTime::on_the_hour(end_hour),
    }
}

impl Default for TabulatedPolicy {
    fn default() -> Self {
        Self {
            weekday_window: window(8, 20),
            weekend_window: window(9, 19),
            lunch_threshold: DEFAULT_LUNCH_THRESHOLD,
            lunch_deduction: DEFAULT_LUNCH_DEDUCTION,
        }
    }
}

impl TabulatedPolicy {
    /// The legal window that applies on `weekday`.
    pub fn window_for(&self, weekday: Weekday) -> &TimeRange {
        if is_weekend(weekday) {
            &self.weekend_window
        } else {
            &self.weekday_window
        }
    }
}

impl DurationPolicy for TabulatedPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Tabulated
    }

    fn hours(
        &self,
        shift: &TimeRange,
        _break_range: Option<&TimeRange>,
        weekday: Weekday,
    ) -> Decimal {
        let window = self.window_for(weekday);
        let start = shift.start.max(window.start);
        let end = shift.end.min(window.end);
        if end <= start {
            return Decimal::ZERO;
        }

        let minutes = Decimal::from(end.minutes() - start.minutes());
        let mut hours = minutes / Decimal::from(60);
        if hours >= self.lunch_threshold {
            hours -= self.lunch_deduction;
        }
        round_hours(hours.max(Decimal::ZERO))
    }
}

/// The pair of policies evaluated for every entry, plus the primary choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolicySet {
    /// The simple policy.
    pub simple: SimplePolicy,
    /// The tabulated policy.
    pub tabulated: TabulatedPolicy,
    /// Which figure is primary for day totals.
    pub primary: PolicyKind,
}

impl PolicySet {
    /// Creates a policy set with default windows and the given primary.
    pub fn with_primary(primary: PolicyKind) -> Self {
        Self {
            primary,
            ..Self::default()
        }
    }

    /// Evaluates both policies for one shift.
    pub fn entry_hours(
        &self,
        shift: &TimeRange,
        break_range: Option<&TimeRange>,
        weekday: Weekday,
    ) -> EntryHours {
        EntryHours {
            raw: self.simple.hours(shift, break_range, weekday),
            tabulated: self.tabulated.hours(shift, break_range, weekday),
            primary: self.primary,
        }
    }
}
