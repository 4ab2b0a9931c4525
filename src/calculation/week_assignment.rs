//! Week numbering relative to an anchor Monday.
//!
//! Week 1 starts on the anchor Monday. Days before the anchor get week 0 or
//! a negative index; they are kept, and week-bounded reports skip them.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::Day;

/// Returns the Monday of the week containing `date`.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::monday_of;
/// use chrono::NaiveDate;
///
/// // 2025-09-11 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2025, 9, 11).unwrap();
/// assert_eq!(monday_of(thursday), NaiveDate::from_ymd_opt(2025, 9, 8).unwrap());
/// ```
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Resolves the anchor Monday.
///
/// A supplied anchor is snapped back to its Monday; otherwise the Monday of
/// the week containing `earliest` is used.
pub fn anchor_monday(earliest: NaiveDate, anchor: Option<NaiveDate>) -> NaiveDate {
    monday_of(anchor.unwrap_or(earliest))
}

/// Week index of `date`: `1 + floor((date - anchor) / 7 days)`.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::week_index;
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
/// assert_eq!(week_index(NaiveDate::from_ymd_opt(2025, 9, 14).unwrap(), anchor), 1);
/// assert_eq!(week_index(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(), anchor), 2);
/// assert_eq!(week_index(NaiveDate::from_ymd_opt(2025, 9, 7).unwrap(), anchor), 0);
/// ```
pub fn week_index(date: NaiveDate, anchor: NaiveDate) -> i32 {
    let days = (date - anchor).num_days();
    // Week spans are bounded by the NaiveDate range, which fits in i32.
    1 + days.div_euclid(7) as i32
}

/// Assigns `week` on every day and returns the anchor Monday used.
///
/// Returns `None` (and assigns nothing) when `days` is empty.
pub fn assign_weeks(days: &mut [Day], anchor: Option<NaiveDate>) -> Option<NaiveDate> {
    let earliest = days.iter().map(|d| d.date).min()?;
    let anchor = anchor_monday(earliest, anchor);
    for day in days.iter_mut() {
        day.week = Some(week_index(day.date, anchor));
    }
    Some(anchor)
}
