//! Calculation logic for the schedule engine.
//!
//! This module contains clock-time arithmetic, weekday naming and weekend
//! detection, the two duration policies that turn written shifts into hours,
//! and week numbering relative to an anchor Monday.

mod duration_policy;
mod time;
mod week_assignment;
mod weekday;

pub use duration_policy::{
    DEFAULT_LUNCH_DEDUCTION, DEFAULT_LUNCH_THRESHOLD, DurationPolicy, PolicyKind, PolicySet,
    SimplePolicy, TabulatedPolicy,
};
pub use time::{HOURS_DECIMAL_PLACES, hours_between, round_hours, to_minutes};
pub use week_assignment::{anchor_monday, assign_weeks, monday_of, week_index};
pub use weekday::{
    WEEKDAY_ALIASES, WEEKDAY_NAMES, accepted_weekday_spellings, canonical_weekdays, is_weekend,
    parse_weekday_name, weekday_name,
};
