//! Error types for the schedule engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing a schedule and
//! building reports from it.

use thiserror::Error;

/// The main error type for the schedule engine.
///
/// Every error aborts the whole parse/report pipeline for the input that
/// caused it; there is no partial-result mode.
///
/// # Example
///
/// ```
/// use schedule_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     value: "31.02".to_string(),
///     year: 2025,
/// };
/// assert_eq!(error.to_string(), "Invalid date '31.02' for year 2025");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time token is not of shape `H:MM`/`HH:MM` within a valid day.
    #[error("Invalid time '{value}': expected H:MM or HH:MM")]
    InvalidTime {
        /// The offending token.
        value: String,
    },

    /// No day header was recognized anywhere in the input.
    #[error("No day blocks found. Check the schedule format")]
    NoBlocksFound,

    /// A day header's `dd.mm` does not form a real date with the given year.
    #[error("Invalid date '{value}' for year {year}")]
    InvalidDate {
        /// The `dd.mm` text from the day header.
        value: String,
        /// The year used to resolve it.
        year: i32,
    },

    /// A settings update was rejected.
    #[error("Invalid setting '{field}': {message}")]
    InvalidSettings {
        /// The setting that was rejected.
        field: String,
        /// Why it was rejected.
        message: String,
    },

    /// A report name did not match any of the built reports.
    #[error("Unknown report: {name}")]
    UnknownReport {
        /// The requested report name.
        name: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A report could not be rendered to an export format.
    #[error("Export of report '{report}' failed: {message}")]
    ExportError {
        /// The report being exported.
        report: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
