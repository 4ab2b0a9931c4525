//! CSV rendering of report tables.

use csv::WriterBuilder;

use crate::error::{EngineError, EngineResult};
use crate::models::ReportTable;

/// Renders a report table as CSV with a header row.
///
/// Dates are written as `YYYY-MM-DD`, hours as plain decimals and empty
/// cells as empty fields.
///
/// # Example
///
/// ```
/// use schedule_engine::export::write_csv;
/// use schedule_engine::models::{Cell, ReportTable};
///
/// let mut table = ReportTable::new("t", ["Працівник", "Години"]);
/// table.push_row(vec![Cell::text("Пую"), Cell::Integer(9)]);
/// assert_eq!(write_csv(&table).unwrap(), "Працівник,Години\nПую,9\n");
/// ```
pub fn write_csv(table: &ReportTable) -> EngineResult<String> {
    let export_error = |message: String| EngineError::ExportError {
        report: table.name.clone(),
        message,
    };

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer
        .write_record(&table.columns)
        .map_err(|e| export_error(e.to_string()))?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(|e| export_error(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| export_error(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| export_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_cells_rendered_by_kind() {
        let mut table = ReportTable::new("detail", ["date", "week", "hours", "break"]);
        table.push_row(vec![
            Cell::Date(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()),
            Cell::Integer(1),
            Cell::hours(Decimal::new(950, 2)),
            Cell::Empty,
        ]);
        assert_eq!(
            write_csv(&table).unwrap(),
            "date,week,hours,break\n2025-09-08,1,9.5,\n"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut table = ReportTable::new("working_days", ["days"]);
        table.push_row(vec![Cell::text("Понеділок, Середа")]);
        assert_eq!(write_csv(&table).unwrap(), "days\n\"Понеділок, Середа\"\n");
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = ReportTable::new("summary", ["Працівник", "Тиждень 1"]);
        assert_eq!(write_csv(&table).unwrap(), "Працівник,Тиждень 1\n");
    }
}
