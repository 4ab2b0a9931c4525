//! Summary-by-week report: tabulated hours per employee per week.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::calculation::round_hours;
use crate::models::{Cell, Day, ReportTable};

/// Name of the summary-by-week report.
pub const SUMMARY_REPORT: &str = "summary";

/// Label of the trailing total column.
pub const SUMMARY_TOTAL_COLUMN: &str = "Всього за місяць (год)";

/// Label of the column for week `week`.
pub fn summary_week_column(week: u32) -> String {
    format!("Тиждень {}", week)
}

/// Builds the summary table for weeks `1..=week_count`.
///
/// Every employee present in the schedule gets a row, sorted by name, even
/// if all of their shifts fall outside the requested weeks. The total column
/// sums only the week columns shown.
pub fn build_summary(days: &[Day], week_count: u32) -> ReportTable {
    let columns = std::iter::once("Працівник".to_string())
        .chain((1..=week_count).map(summary_week_column))
        .chain(std::iter::once(SUMMARY_TOTAL_COLUMN.to_string()));
    let mut table = ReportTable::new(SUMMARY_REPORT, columns);

    let mut per_employee: BTreeMap<&str, Vec<Decimal>> = BTreeMap::new();
    for day in days {
        let slot = day
            .week
            .and_then(|w| usize::try_from(w).ok())
            .filter(|w| (1..=week_count as usize).contains(w));
        for entry in &day.entries {
            let weeks = per_employee
                .entry(entry.employee.as_str())
                .or_insert_with(|| vec![Decimal::ZERO; week_count as usize]);
            if let Some(week) = slot {
                weeks[week - 1] += entry.hours.tabulated;
            }
        }
    }

    for (employee, weeks) in per_employee {
        let weeks: Vec<Decimal> = weeks.into_iter().map(round_hours).collect();
        let total = round_hours(weeks.iter().copied().sum());
        let row = std::iter::once(Cell::text(employee))
            .chain(weeks.into_iter().map(Cell::hours))
            .chain(std::iter::once(Cell::hours(total)))
            .collect();
        table.push_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{PolicySet, assign_weeks};
    use crate::parser::{SAMPLE_SCHEDULE, parse_schedule};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn parsed_days(text: &str) -> Vec<Day> {
        let mut days = parse_schedule(text, 2025, &PolicySet::default())
            .unwrap()
            .days;
        assign_weeks(&mut days, None);
        days
    }

    fn hours(table: &ReportTable, row: usize, column: &str) -> Decimal {
        table.cell(row, column).and_then(Cell::as_hours).unwrap()
    }

    #[test]
    fn test_sample_summary() {
        let table = build_summary(&parsed_days(SAMPLE_SCHEDULE), 2);
        assert_eq!(
            table.columns,
            vec!["Працівник", "Тиждень 1", "Тиждень 2", SUMMARY_TOTAL_COLUMN]
        );
        assert_eq!(table.rows.len(), 4);
        // Rows sorted by name
        assert_eq!(table.cell(0, "Працівник"), Some(&Cell::text("Беньковська")));
        assert_eq!(hours(&table, 0, "Тиждень 1"), dec("9"));
        assert_eq!(hours(&table, 0, "Тиждень 2"), Decimal::ZERO);
        assert_eq!(hours(&table, 0, SUMMARY_TOTAL_COLUMN), dec("9"));
    }

    #[test]
    fn test_hours_accumulate_across_days_and_weeks() {
        let text = "Понеділок 08.09\nА 9:00-12:30\nВівторок 09.09\nА 9:00-11:00\nПонеділок 15.09\nА 9:00-10:20\n";
        let table = build_summary(&parsed_days(text), 2);
        assert_eq!(hours(&table, 0, "Тиждень 1"), dec("5.5"));
        assert_eq!(hours(&table, 0, "Тиждень 2"), dec("1.33"));
        assert_eq!(hours(&table, 0, SUMMARY_TOTAL_COLUMN), dec("6.83"));
    }

    #[test]
    fn test_weeks_outside_range_are_excluded_but_employee_kept() {
        let text = "Понеділок 08.09\nА 9:00-10:00\nПонеділок 29.09\nБ 9:00-10:00\n";
        let table = build_summary(&parsed_days(text), 2);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, "Працівник"), Some(&Cell::text("Б")));
        assert_eq!(hours(&table, 1, SUMMARY_TOTAL_COLUMN), Decimal::ZERO);
    }

    #[test]
    fn test_empty_input_has_columns_only() {
        let table = build_summary(&[], 3);
        assert_eq!(table.columns.len(), 5);
        assert!(table.is_empty());
    }
}
