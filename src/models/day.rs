//! Day block model.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{round_hours, weekday_name};

use super::ShiftEntry;

/// One parsed day header and the shift entries listed beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// The weekday named in the header, aliases already normalized.
    pub day_of_week: Weekday,
    /// The header's `dd.mm` resolved against the requested year.
    pub date: NaiveDate,
    /// Shift entries in text order.
    pub entries: Vec<ShiftEntry>,
    /// Week index relative to the anchor Monday, once assigned.
    #[serde(default)]
    pub week: Option<i32>,
}

impl Day {
    /// Canonical name of the header weekday.
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }

    /// Sum of the entries' primary hours, rounded to two decimals.
    ///
    /// Always recomputed from `entries`.
    pub fn total_hours(&self) -> Decimal {
        round_hours(self.entries.iter().map(|e| e.hours.primary_hours()).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::PolicyKind;
    use crate::models::{EntryHours, TimeRange};

    fn entry(name: &str, raw: Decimal, tabulated: Decimal, primary: PolicyKind) -> ShiftEntry {
        ShiftEntry {
            employee: name.to_string(),
            shift: TimeRange::parse("8:00", "18:00").unwrap(),
            break_range: None,
            hours: EntryHours {
                raw,
                tabulated,
                primary,
            },
        }
    }

    fn make_day(entries: Vec<ShiftEntry>) -> Day {
        Day {
            day_of_week: Weekday::Mon,
            date: NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
            entries,
            week: None,
        }
    }

    #[test]
    fn test_total_hours_sums_primary_figure() {
        let day = make_day(vec![
            entry("A", Decimal::new(95, 1), Decimal::new(9, 0), PolicyKind::Tabulated),
            entry("B", Decimal::new(95, 1), Decimal::new(9, 0), PolicyKind::Tabulated),
        ]);
        assert_eq!(day.total_hours(), Decimal::new(18, 0));
    }

    #[test]
    fn test_total_hours_reflects_entry_changes() {
        let mut day = make_day(vec![entry(
            "A",
            Decimal::new(95, 1),
            Decimal::new(9, 0),
            PolicyKind::Simple,
        )]);
        assert_eq!(day.total_hours(), Decimal::new(95, 1));
        day.entries.pop();
        assert_eq!(day.total_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_weekday_name_is_canonical() {
        let day = make_day(vec![]);
        assert_eq!(day.weekday_name(), "Понеділок");
    }
}
