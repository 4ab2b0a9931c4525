//! Shift entry model and related types.
//!
//! This module defines clock times, time ranges and the [`ShiftEntry`]
//! record produced for every recognized shift line of a schedule.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{PolicyKind, to_minutes};
use crate::error::{EngineError, EngineResult};

/// A minute-of-day clock time in `0:00..=23:59`.
///
/// Serializes as its `H:MM` text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    /// Parses an `H:MM` or `HH:MM` token.
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_engine::models::ClockTime;
    ///
    /// let time = ClockTime::parse("08:30").unwrap();
    /// assert_eq!(time.minutes(), 510);
    /// assert_eq!(time.to_string(), "8:30");
    /// ```
    pub fn parse(token: &str) -> EngineResult<Self> {
        to_minutes(token).map(Self)
    }

    /// Builds a clock time from minutes since midnight, if within one day.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < 24 * 60).then_some(Self(minutes))
    }

    /// Whole hour `hour:00`; `hour` must be below 24.
    pub(crate) const fn on_the_hour(hour: u32) -> Self {
        assert!(hour < 24, "hour out of range");
        Self(hour * 60)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// A `start-end` pair of clock times, as written in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start of the range.
    pub start: ClockTime,
    /// End of the range.
    pub end: ClockTime,
}

impl TimeRange {
    /// Parses both tokens of a range.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        Ok(Self {
            start: ClockTime::parse(start)?,
            end: ClockTime::parse(end)?,
        })
    }

    /// Length of the range in minutes; negative when `end` precedes `start`.
    pub fn span_minutes(&self) -> i64 {
        i64::from(self.end.minutes()) - i64::from(self.start.minutes())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Hour figures derived for a single shift entry.
///
/// Both policies are always evaluated; `primary` records which figure the
/// deployment treats as authoritative for day totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryHours {
    /// Hours under the simple policy (span minus the written break).
    pub raw: Decimal,
    /// Hours under the tabulated policy (clipped, flat lunch deduction).
    pub tabulated: Decimal,
    /// The policy whose figure is primary.
    pub primary: PolicyKind,
}

impl EntryHours {
    /// The figure selected by [`EntryHours::primary`].
    pub fn primary_hours(&self) -> Decimal {
        match self.primary {
            PolicyKind::Simple => self.raw,
            PolicyKind::Tabulated => self.tabulated,
        }
    }
}

/// One employee's work interval within a day block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// Employee name, trimmed with internal whitespace collapsed.
    pub employee: String,
    /// Worked interval.
    pub shift: TimeRange,
    /// Break taken during the shift; both bounds are always present together.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_range: Option<TimeRange>,
    /// Derived hour figures.
    pub hours: EntryHours,
}
