//! Detail report: one row per shift entry.

use crate::models::{Cell, Day, ReportTable, ShiftEntry};

/// Name of the detail report.
pub const DETAIL_REPORT: &str = "detail";

/// Column holding the simple-policy hours.
pub const RAW_HOURS_COLUMN: &str = "Тривалість, год";

/// Column holding the tabulated-policy hours.
pub const TABULATED_HOURS_COLUMN: &str = "Табельні години, год";

/// Detail report columns in display order.
pub const DETAIL_COLUMNS: [&str; 10] = [
    "Дата",
    "Тиждень",
    "День тижня",
    "Працівник",
    "Початок",
    "Кінець",
    "Перерва початок",
    "Перерва кінець",
    RAW_HOURS_COLUMN,
    TABULATED_HOURS_COLUMN,
];

/// Builds the detail table.
///
/// Rows are sorted by date, then employee name; ties keep parse order.
pub fn build_detail(days: &[Day]) -> ReportTable {
    let mut table = ReportTable::new(DETAIL_REPORT, DETAIL_COLUMNS);

    let mut entries: Vec<(&Day, &ShiftEntry)> = days
        .iter()
        .flat_map(|day| day.entries.iter().map(move |entry| (day, entry)))
        .collect();
    entries.sort_by(|(a_day, a), (b_day, b)| {
        a_day
            .date
            .cmp(&b_day.date)
            .then_with(|| a.employee.cmp(&b.employee))
    });

    for (day, entry) in entries {
        let (break_start, break_end) = entry
            .break_range
            .map(|b| (Cell::Text(b.start.to_string()), Cell::Text(b.end.to_string())))
            .unwrap_or((Cell::Empty, Cell::Empty));
        table.push_row(vec![
            Cell::Date(day.date),
            day.week.map(|w| Cell::Integer(i64::from(w))).unwrap_or(Cell::Empty),
            Cell::text(day.weekday_name()),
            Cell::text(entry.employee.as_str()),
            Cell::Text(entry.shift.start.to_string()),
            Cell::Text(entry.shift.end.to_string()),
            break_start,
            break_end,
            Cell::hours(entry.hours.raw),
            Cell::hours(entry.hours.tabulated),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{PolicySet, assign_weeks};
    use crate::parser::{SAMPLE_SCHEDULE, parse_schedule};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn parsed_days(text: &str) -> Vec<Day> {
        let mut days = parse_schedule(text, 2025, &PolicySet::default())
            .unwrap()
            .days;
        assign_weeks(&mut days, None);
        days
    }

    #[test]
    fn test_sample_detail_rows() {
        let table = build_detail(&parsed_days(SAMPLE_SCHEDULE));
        assert_eq!(table.rows.len(), 4);
        assert_eq!(
            table.cell(0, "Дата"),
            Some(&Cell::Date(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()))
        );
        assert_eq!(table.cell(0, "Тиждень"), Some(&Cell::Integer(1)));
        assert_eq!(table.cell(0, "День тижня"), Some(&Cell::text("Понеділок")));
        assert_eq!(table.cell(0, "Працівник"), Some(&Cell::text("Казидуб")));
        assert_eq!(table.cell(0, "Перерва початок"), Some(&Cell::text("12:30")));
        assert_eq!(
            table.cell(0, RAW_HOURS_COLUMN).and_then(Cell::as_hours),
            Some(Decimal::from_str("9.5").unwrap())
        );
        assert_eq!(
            table.cell(0, TABULATED_HOURS_COLUMN).and_then(Cell::as_hours),
            Some(Decimal::from(9))
        );
    }

    #[test]
    fn test_sorted_by_date_then_employee() {
        let text = "Вівторок 09.09\nА 9:00-10:00\nПонеділок 08.09\nЯ 9:00-10:00\nБ 9:00-10:00\n";
        let table = build_detail(&parsed_days(text));
        let names: Vec<_> = (0..table.rows.len())
            .filter_map(|row| table.cell(row, "Працівник").and_then(Cell::as_text))
            .collect();
        assert_eq!(names, vec!["Б", "Я", "А"]);
    }

    #[test]
    fn test_ties_keep_parse_order() {
        let text = "Понеділок 08.09\nА 14:00-15:00\nА 9:00-10:00\n";
        let table = build_detail(&parsed_days(text));
        assert_eq!(table.cell(0, "Початок"), Some(&Cell::text("14:00")));
        assert_eq!(table.cell(1, "Початок"), Some(&Cell::text("9:00")));
    }

    #[test]
    fn test_missing_break_is_empty() {
        let table = build_detail(&parsed_days("Понеділок 08.09\nА 9:00-10:00\n"));
        assert_eq!(table.cell(0, "Перерва початок"), Some(&Cell::Empty));
        assert_eq!(table.cell(0, "Перерва кінець"), Some(&Cell::Empty));
    }

    #[test]
    fn test_empty_input_has_columns_only() {
        let table = build_detail(&[]);
        assert_eq!(table.columns.len(), DETAIL_COLUMNS.len());
        assert!(table.is_empty());
    }
}
