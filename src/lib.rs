//! Staff schedule report engine
//!
//! This crate turns a free-form weekly staff schedule (day headers followed
//! by `name start-end (break)` lines) into tabular reports: a wide weekly
//! table, a per-entry detail table, per-week summaries, working-day lists and
//! a weekday pivot. Worked hours are computed under two duration policies and
//! days are numbered into weeks from an anchor Monday.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod reports;
pub mod settings;
