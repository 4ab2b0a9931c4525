//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::SUPPORTED_YEARS;

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # File Layout
///
/// ```text
/// server:
///   listen: "127.0.0.1:8080"
/// defaults:
///   week_count: 4
///   min_week_count: 1
///   max_week_count: 6
/// durations:
///   primary: tabulated
///   weekday_window: { start: "8:00", end: "20:00" }
///   weekend_window: { start: "9:00", end: "19:00" }
/// ```
///
/// # Example
///
/// ```no_run
/// use schedule_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/schedule.yaml")?;
/// println!("Listening on {}", loader.config().server.listen);
/// # Ok::<(), schedule_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing ([`EngineError::ConfigNotFound`])
    /// - The file contains invalid YAML or invalid values
    ///   ([`EngineError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<EngineConfig>(path)?;
        Self::validate(&config, path)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks cross-field constraints serde cannot express.
    fn validate(config: &EngineConfig, path: &Path) -> EngineResult<()> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let defaults = &config.defaults;
        if defaults.min_week_count == 0 || defaults.min_week_count > defaults.max_week_count {
            return Err(invalid(format!(
                "week count bounds {}..={} are empty or start at zero",
                defaults.min_week_count, defaults.max_week_count
            )));
        }
        if !(defaults.min_week_count..=defaults.max_week_count).contains(&defaults.week_count) {
            return Err(invalid(format!(
                "default week_count {} is outside {}..={}",
                defaults.week_count, defaults.min_week_count, defaults.max_week_count
            )));
        }
        if let Some(year) = defaults.year.filter(|y| !SUPPORTED_YEARS.contains(y)) {
            return Err(invalid(format!(
                "default year {} is outside {}..={}",
                year,
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end()
            )));
        }

        let durations = &config.durations;
        for (name, window) in [
            ("weekday_window", &durations.weekday_window),
            ("weekend_window", &durations.weekend_window),
        ] {
            if window.span_minutes() <= 0 {
                return Err(invalid(format!("{} must end after it starts", name)));
            }
        }
        if durations.lunch_deduction_hours.is_sign_negative()
            || durations.lunch_threshold_hours.is_sign_negative()
        {
            return Err(invalid("lunch hours must not be negative".to_string()));
        }
        if durations.lunch_deduction_hours > durations.lunch_threshold_hours {
            return Err(invalid(format!(
                "lunch_deduction_hours {} exceeds lunch_threshold_hours {}",
                durations.lunch_deduction_hours, durations.lunch_threshold_hours
            )));
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
