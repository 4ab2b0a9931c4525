//! Schedule text parser.
//!
//! A line-driven state machine with a single piece of state, the current
//! day. Each non-blank line is whitespace-collapsed and tested first against
//! the day-header pattern, then against the shift-entry pattern. Lines that
//! match neither, and shift lines seen before any header, are dropped and
//! counted in [`ParsedSchedule::discarded_lines`].

mod patterns;

use chrono::{NaiveDate, Weekday};
use tracing::{debug, info};

use crate::calculation::{PolicySet, parse_weekday_name};
use crate::error::{EngineError, EngineResult};
use crate::models::{Day, ShiftEntry, TimeRange};

/// Example schedule in the accepted grammar.
pub const SAMPLE_SCHEDULE: &str = "Понеділок  08.09\n\
Казидуб 8:00-18:00 (12:30-13:00)\n\
Кіселиця 10:00-20:00 (13:00-13:30)\n\
\n\
Вівторок 09.09\n\
Беньковська 8:00-18:00 (12:30-13:00)\n\
Пую 10:00-21:00 (13:00-13:30)\n";

/// Result of parsing one schedule text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSchedule {
    /// Day blocks in text order.
    pub days: Vec<Day>,
    /// Non-blank lines that were dropped.
    pub discarded_lines: usize,
}

impl ParsedSchedule {
    /// Total number of shift entries across all days.
    pub fn entry_count(&self) -> usize {
        self.days.iter().map(|d| d.entries.len()).sum()
    }
}

/// A day header whose date and entries are still raw text.
struct PendingDay<'a> {
    weekday: Weekday,
    date: &'a str,
    entries: Vec<PendingEntry>,
}

struct PendingEntry {
    employee: String,
    start: String,
    end: String,
    break_range: Option<(String, String)>,
}

/// Parses a schedule text.
///
/// `year` resolves every `dd.mm` header into a calendar date. Hours of each
/// entry are computed with both policies of `policies`.
///
/// # Errors
///
/// - [`EngineError::NoBlocksFound`] when no day header is recognized.
/// - [`EngineError::InvalidDate`] when a header's `dd.mm` is not a real date
///   in `year`.
/// - [`EngineError::InvalidTime`] when a time token of a recognized shift
///   line is out of range (for example `25:00`).
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::PolicySet;
/// use schedule_engine::parser::{parse_schedule, SAMPLE_SCHEDULE};
///
/// let parsed = parse_schedule(SAMPLE_SCHEDULE, 2025, &PolicySet::default()).unwrap();
/// assert_eq!(parsed.days.len(), 2);
/// assert_eq!(parsed.days[0].entries[0].employee, "Казидуб");
/// ```
pub fn parse_schedule(text: &str, year: i32, policies: &PolicySet) -> EngineResult<ParsedSchedule> {
    let lines: Vec<String> = text
        .lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect();

    let mut pending: Vec<PendingDay<'_>> = Vec::new();
    let mut discarded_lines = 0;

    for line in &lines {
        if let Some(caps) = patterns::day_header().captures(line) {
            if let (Some(weekday), Some(date)) = (
                parse_weekday_name(&caps["dow"]),
                caps.name("date").map(|m| m.as_str()),
            ) {
                pending.push(PendingDay {
                    weekday,
                    date,
                    entries: Vec::new(),
                });
                continue;
            }
        }

        let entry = patterns::shift_entry().captures(line).map(|caps| PendingEntry {
            employee: collapse_whitespace(&caps["name"]),
            start: caps["start"].to_string(),
            end: caps["end"].to_string(),
            break_range: caps
                .name("bstart")
                .zip(caps.name("bend"))
                .map(|(s, e)| (s.as_str().to_string(), e.as_str().to_string())),
        });

        match (entry, pending.last_mut()) {
            (Some(entry), Some(day)) => day.entries.push(entry),
            _ => {
                debug!(line = %line, "Discarding unrecognized schedule line");
                discarded_lines += 1;
            }
        }
    }

    if pending.is_empty() {
        return Err(EngineError::NoBlocksFound);
    }

    let days = pending
        .into_iter()
        .map(|day| resolve_day(day, year, policies))
        .collect::<EngineResult<Vec<_>>>()?;

    let parsed = ParsedSchedule {
        days,
        discarded_lines,
    };
    info!(
        days = parsed.days.len(),
        entries = parsed.entry_count(),
        discarded_lines,
        "Parsed schedule"
    );
    Ok(parsed)
}

fn resolve_day(day: PendingDay<'_>, year: i32, policies: &PolicySet) -> EngineResult<Day> {
    let date = resolve_date(day.date, year)?;
    let entries = day
        .entries
        .into_iter()
        .map(|entry| {
            let shift = TimeRange::parse(&entry.start, &entry.end)?;
            let break_range = entry
                .break_range
                .map(|(start, end)| TimeRange::parse(&start, &end))
                .transpose()?;
            let hours = policies.entry_hours(&shift, break_range.as_ref(), day.weekday);
            Ok(ShiftEntry {
                employee: entry.employee,
                shift,
                break_range,
                hours,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(Day {
        day_of_week: day.weekday,
        date,
        entries,
        week: None,
    })
}

/// Resolves `dd.mm` against `year`.
fn resolve_date(ddmm: &str, year: i32) -> EngineResult<NaiveDate> {
    let invalid = || EngineError::InvalidDate {
        value: ddmm.to_string(),
        year,
    };
    let (day, month) = ddmm.split_once('.').ok_or_else(invalid)?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Trims a line and collapses whitespace runs into single spaces.
fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
