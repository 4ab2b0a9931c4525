//! Working-days summary: which weekdays each employee worked in each week.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use crate::calculation::{WEEKDAY_NAMES, round_hours};
use crate::models::{Cell, Day, ReportTable};

/// Name of the working-days summary report.
pub const WORKING_DAYS_REPORT: &str = "working_days";

/// Working-days summary columns in display order.
pub const WORKING_DAYS_COLUMNS: [&str; 4] =
    ["Працівник", "Тиждень", "Робочі дні", "Табельні години, год"];

#[derive(Default)]
struct WeekTally {
    // Keyed by days from Monday so iteration follows the canonical order.
    weekdays: BTreeSet<usize>,
    hours: Decimal,
}

/// Builds one row per `(employee, week)` pair present in the schedule.
///
/// Weekdays are listed in Monday..Sunday order regardless of the order
/// they appear in the text. Rows are sorted by employee, then week. Days
/// without an assigned week are skipped.
pub fn build_working_days(days: &[Day]) -> ReportTable {
    let mut table = ReportTable::new(WORKING_DAYS_REPORT, WORKING_DAYS_COLUMNS);

    let mut tallies: BTreeMap<(&str, i32), WeekTally> = BTreeMap::new();
    for day in days {
        let Some(week) = day.week else {
            continue;
        };
        for entry in &day.entries {
            let tally = tallies.entry((entry.employee.as_str(), week)).or_default();
            tally
                .weekdays
                .insert(day.day_of_week.num_days_from_monday() as usize);
            tally.hours += entry.hours.tabulated;
        }
    }

    for ((employee, week), tally) in tallies {
        let names = tally
            .weekdays
            .iter()
            .map(|index| WEEKDAY_NAMES[*index].1)
            .collect::<Vec<_>>()
            .join(", ");
        table.push_row(vec![
            Cell::text(employee),
            Cell::Integer(i64::from(week)),
            Cell::Text(names),
            Cell::hours(round_hours(tally.hours)),
        ]);
    }
    table
}
