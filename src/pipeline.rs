//! End-to-end schedule processing.
//!
//! Runs parse → week assignment → report building for one schedule text and
//! one resolved [`Settings`] value.

use std::time::Instant;

use tracing::info;

use crate::calculation::{PolicySet, assign_weeks};
use crate::error::EngineResult;
use crate::models::{ReportSet, Settings};
use crate::parser::parse_schedule;
use crate::reports::build_report_set;

/// Parses a schedule and builds every report.
///
/// Any parse error aborts the run; no partial report set is produced.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::PolicySet;
/// use schedule_engine::models::Settings;
/// use schedule_engine::parser::SAMPLE_SCHEDULE;
/// use schedule_engine::pipeline::process_schedule;
///
/// let settings = Settings { year: 2025, week_count: 4, anchor: None };
/// let reports = process_schedule(SAMPLE_SCHEDULE, &settings, &PolicySet::default()).unwrap();
/// assert_eq!(reports.tables.len(), 5);
/// ```
pub fn process_schedule(
    text: &str,
    settings: &Settings,
    policies: &PolicySet,
) -> EngineResult<ReportSet> {
    let started = Instant::now();

    let parsed = parse_schedule(text, settings.year, policies)?;
    let mut days = parsed.days;
    let anchor = assign_weeks(&mut days, settings.anchor);
    let reports = build_report_set(&days, settings.week_count, anchor, parsed.discarded_lines);

    info!(
        days = days.len(),
        anchor = ?anchor,
        week_count = settings.week_count,
        primary_policy = %policies.primary,
        duration_us = started.elapsed().as_micros(),
        "Built schedule reports"
    );
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::Cell;
    use crate::parser::SAMPLE_SCHEDULE;
    use crate::reports::{DETAIL_REPORT, SUMMARY_REPORT, WEEK_REPORT};
    use chrono::NaiveDate;

    fn settings() -> Settings {
        Settings {
            year: 2025,
            week_count: 4,
            anchor: None,
        }
    }

    #[test]
    fn test_sample_pipeline() {
        let reports = process_schedule(SAMPLE_SCHEDULE, &settings(), &PolicySet::default()).unwrap();
        assert_eq!(reports.anchor, NaiveDate::from_ymd_opt(2025, 9, 8));
        assert_eq!(reports.discarded_lines, 0);
        assert_eq!(reports.table(WEEK_REPORT).unwrap().columns.len(), 16);
        assert_eq!(reports.table(DETAIL_REPORT).unwrap().rows.len(), 4);
    }

    #[test]
    fn test_anchor_setting_shifts_weeks() {
        let mut settings = settings();
        settings.anchor = NaiveDate::from_ymd_opt(2025, 9, 1);
        let reports = process_schedule(SAMPLE_SCHEDULE, &settings, &PolicySet::default()).unwrap();
        let detail = reports.table(DETAIL_REPORT).unwrap();
        assert_eq!(detail.cell(0, "Тиждень"), Some(&Cell::Integer(2)));
        let summary = reports.table(SUMMARY_REPORT).unwrap();
        assert_eq!(
            summary.cell(0, "Тиждень 1").and_then(Cell::as_hours),
            Some(rust_decimal::Decimal::ZERO)
        );
    }

    #[test]
    fn test_anchor_after_schedule_hides_days_from_week_reports() {
        let mut settings = settings();
        settings.anchor = NaiveDate::from_ymd_opt(2025, 9, 15);
        let reports = process_schedule(SAMPLE_SCHEDULE, &settings, &PolicySet::default()).unwrap();
        assert!(reports.table(WEEK_REPORT).unwrap().is_empty());
        let detail = reports.table(DETAIL_REPORT).unwrap();
        assert_eq!(detail.cell(0, "Тиждень"), Some(&Cell::Integer(0)));
    }

    #[test]
    fn test_errors_abort_pipeline() {
        let result = process_schedule("немає заголовків", &settings(), &PolicySet::default());
        assert!(matches!(result, Err(EngineError::NoBlocksFound)));
    }
}
