//! Core data models for the schedule engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day;
mod report;
mod settings;
mod shift;

pub use day::Day;
pub use report::{Cell, ReportSet, ReportTable};
pub use settings::{SUPPORTED_YEARS, Settings, SettingsUpdate, WeekCountLimits};
pub(crate) use settings::deserialize_present;
pub use shift::{ClockTime, EntryHours, ShiftEntry, TimeRange};
