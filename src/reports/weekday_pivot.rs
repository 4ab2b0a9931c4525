//! Weekday pivot: every employee's shift ranges grouped by weekday.

use std::collections::BTreeMap;

use crate::calculation::WEEKDAY_NAMES;
use crate::models::{Cell, Day, ReportTable};

/// Name of the weekday pivot report.
pub const WEEKDAY_PIVOT_REPORT: &str = "weekday_pivot";

/// Separator between ranges that fall on the same weekday.
pub const RANGE_SEPARATOR: &str = ", ";

/// Builds one row per employee with one column per canonical weekday.
///
/// A cell lists every `start-end` range the employee has on that weekday
/// across all weeks, in date order then text order. Rows are sorted by
/// employee name.
pub fn build_weekday_pivot(days: &[Day]) -> ReportTable {
    let columns = std::iter::once("Працівник").chain(WEEKDAY_NAMES.iter().map(|(_, name)| *name));
    let mut table = ReportTable::new(WEEKDAY_PIVOT_REPORT, columns);

    let mut ordered: Vec<&Day> = days.iter().collect();
    ordered.sort_by_key(|d| d.date);

    let mut pivot: BTreeMap<&str, [Vec<String>; 7]> = BTreeMap::new();
    for day in ordered {
        let column = day.day_of_week.num_days_from_monday() as usize;
        for entry in &day.entries {
            pivot.entry(entry.employee.as_str()).or_default()[column].push(entry.shift.to_string());
        }
    }

    for (employee, ranges) in pivot {
        let row = std::iter::once(Cell::text(employee))
            .chain(ranges.iter().map(|r| Cell::Text(r.join(RANGE_SEPARATOR))))
            .collect();
        table.push_row(row);
    }
    table
}
