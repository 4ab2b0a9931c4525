//! Report builders.
//!
//! Five independent, pure builders turn parsed and week-assigned days into
//! [`ReportTable`]s: the wide-weekly grid, the detail log, the summary by
//! week, the working-days summary and the weekday pivot. Each returns a
//! column-labelled empty table for empty input.

mod detail;
mod summary;
mod weekday_pivot;
mod wide_weekly;
mod working_days;

pub use detail::{
    DETAIL_COLUMNS, DETAIL_REPORT, RAW_HOURS_COLUMN, TABULATED_HOURS_COLUMN, build_detail,
};
pub use summary::{SUMMARY_REPORT, SUMMARY_TOTAL_COLUMN, build_summary, summary_week_column};
pub use weekday_pivot::{RANGE_SEPARATOR, WEEKDAY_PIVOT_REPORT, build_weekday_pivot};
pub use wide_weekly::{WEEK_REPORT, build_wide_weekly, day_label};
pub use working_days::{WORKING_DAYS_COLUMNS, WORKING_DAYS_REPORT, build_working_days};

use chrono::NaiveDate;

use crate::models::{Day, ReportSet, ReportTable};

/// Report names in the order they appear in a [`ReportSet`].
pub const REPORT_NAMES: [&str; 5] = [
    WEEK_REPORT,
    DETAIL_REPORT,
    SUMMARY_REPORT,
    WORKING_DAYS_REPORT,
    WEEKDAY_PIVOT_REPORT,
];

/// Builds all five reports from week-assigned days.
pub fn build_report_set(
    days: &[Day],
    week_count: u32,
    anchor: Option<NaiveDate>,
    discarded_lines: usize,
) -> ReportSet {
    let tables: Vec<ReportTable> = vec![
        build_wide_weekly(days, week_count),
        build_detail(days),
        build_summary(days, week_count),
        build_working_days(days),
        build_weekday_pivot(days),
    ];
    ReportSet {
        anchor,
        week_count,
        discarded_lines,
        tables,
    }
}
