//! Wide-weekly report: one 4-column block per week, side by side.

use crate::models::{Cell, Day, ReportTable};

/// Name of the wide-weekly report.
pub const WEEK_REPORT: &str = "week";

const BLOCK_WIDTH: usize = 4;

type BlockRow = [Cell; BLOCK_WIDTH];

fn blank_row() -> BlockRow {
    [Cell::Empty, Cell::Empty, Cell::Empty, Cell::Empty]
}

/// Formats the label shown on a day's first row.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::PolicySet;
/// use schedule_engine::parser::{parse_schedule, SAMPLE_SCHEDULE};
/// use schedule_engine::reports::day_label;
///
/// let parsed = parse_schedule(SAMPLE_SCHEDULE, 2025, &PolicySet::default()).unwrap();
/// assert_eq!(day_label(&parsed.days[0]), "Понеділок  08.09 (18год.)");
/// ```
pub fn day_label(day: &Day) -> String {
    format!(
        "{}  {} ({}год.)",
        day.weekday_name(),
        day.date.format("%d.%m"),
        day.total_hours().round().normalize()
    )
}

/// Rows of one week's block: entries per day plus a blank separator row.
///
/// A day without entries still shows its label on a row of its own.
fn week_block(days: &[Day], week: i32) -> Vec<BlockRow> {
    let mut week_days: Vec<&Day> = days.iter().filter(|d| d.week == Some(week)).collect();
    week_days.sort_by_key(|d| d.date);

    let mut rows = Vec::new();
    for day in week_days {
        let label = day_label(day);
        if day.entries.is_empty() {
            rows.push([Cell::Text(label), Cell::Empty, Cell::Empty, Cell::Empty]);
        } else {
            for (index, entry) in day.entries.iter().enumerate() {
                let label_cell = if index == 0 {
                    Cell::text(label.as_str())
                } else {
                    Cell::Empty
                };
                let break_cell = entry
                    .break_range
                    .map(|b| Cell::Text(b.to_string()))
                    .unwrap_or(Cell::Empty);
                rows.push([
                    label_cell,
                    Cell::text(entry.employee.as_str()),
                    Cell::Text(entry.shift.to_string()),
                    break_cell,
                ]);
            }
        }
        rows.push(blank_row());
    }
    rows
}

/// Builds the wide-weekly table for weeks `1..=week_count`.
///
/// Every block is padded with blank rows to the tallest block's height.
/// Weeks without days contribute an all-blank block.
pub fn build_wide_weekly(days: &[Day], week_count: u32) -> ReportTable {
    let weeks: Vec<i32> = (1..=week_count as i32).collect();
    let columns = weeks.iter().flat_map(|week| {
        [
            format!("{}й тиждень", week),
            "Працівник".to_string(),
            "Робочі години".to_string(),
            "Перерва".to_string(),
        ]
    });
    let mut table = ReportTable::new(WEEK_REPORT, columns);

    let blocks: Vec<Vec<BlockRow>> = weeks.iter().map(|&week| week_block(days, week)).collect();
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

    for row_index in 0..height {
        let row = blocks
            .iter()
            .flat_map(|block| block.get(row_index).cloned().unwrap_or_else(blank_row))
            .collect();
        table.push_row(row);
    }
    table
}
