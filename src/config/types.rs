//! Configuration types for the schedule engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{
    DEFAULT_LUNCH_DEDUCTION, DEFAULT_LUNCH_THRESHOLD, PolicyKind, PolicySet, SimplePolicy,
    TabulatedPolicy,
};
use crate::models::{Settings, TimeRange, WeekCountLimits};

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to, e.g. `127.0.0.1:8080`.
    #[serde(default = "default_listen")]
    pub listen: String,
}

fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

/// Defaults applied to conversations without stored settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// Year used to resolve dates. The current local year when absent.
    #[serde(default)]
    pub year: Option<i32>,
    /// Default number of week blocks.
    #[serde(default = "default_week_count")]
    pub week_count: u32,
    /// Smallest week count a conversation may choose.
    #[serde(default = "default_min_week_count")]
    pub min_week_count: u32,
    /// Largest week count a conversation may choose.
    #[serde(default = "default_max_week_count")]
    pub max_week_count: u32,
}

fn default_week_count() -> u32 {
    4
}

fn default_min_week_count() -> u32 {
    1
}

fn default_max_week_count() -> u32 {
    6
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            year: None,
            week_count: default_week_count(),
            min_week_count: default_min_week_count(),
            max_week_count: default_max_week_count(),
        }
    }
}

/// Duration policy settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DurationConfig {
    /// Which policy provides the primary hour figure.
    #[serde(default)]
    pub primary: PolicyKind,
    /// Legal window Monday to Friday.
    pub weekday_window: TimeRange,
    /// Legal window on Saturday and Sunday.
    pub weekend_window: TimeRange,
    /// Clipped span at or above which lunch is deducted.
    #[serde(default = "default_lunch_threshold")]
    pub lunch_threshold_hours: Decimal,
    /// Hours deducted for lunch.
    #[serde(default = "default_lunch_deduction")]
    pub lunch_deduction_hours: Decimal,
}

fn default_lunch_threshold() -> Decimal {
    DEFAULT_LUNCH_THRESHOLD
}

fn default_lunch_deduction() -> Decimal {
    DEFAULT_LUNCH_DEDUCTION
}

impl Default for DurationConfig {
    fn default() -> Self {
        let tabulated = TabulatedPolicy::default();
        Self {
            primary: PolicyKind::default(),
            weekday_window: tabulated.weekday_window,
            weekend_window: tabulated.weekend_window,
            lunch_threshold_hours: tabulated.lunch_threshold,
            lunch_deduction_hours: tabulated.lunch_deduction,
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Per-conversation defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Duration policy settings.
    #[serde(default)]
    pub durations: DurationConfig,
}

impl EngineConfig {
    /// The policy set described by the `durations` section.
    pub fn policies(&self) -> PolicySet {
        PolicySet {
            simple: SimplePolicy,
            tabulated: TabulatedPolicy {
                weekday_window: self.durations.weekday_window,
                weekend_window: self.durations.weekend_window,
                lunch_threshold: self.durations.lunch_threshold_hours,
                lunch_deduction: self.durations.lunch_deduction_hours,
            },
            primary: self.durations.primary,
        }
    }

    /// Bounds for a conversation's week count.
    pub fn week_count_limits(&self) -> WeekCountLimits {
        WeekCountLimits {
            min: self.defaults.min_week_count,
            max: self.defaults.max_week_count,
        }
    }

    /// Settings for a conversation that has not changed anything.
    pub fn default_settings(&self, today: NaiveDate) -> Settings {
        let mut settings = Settings::for_today(today, self.defaults.week_count);
        if let Some(year) = self.defaults.year {
            settings.year = year;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:8080");
        assert_eq!(config.defaults.week_count, 4);
        assert_eq!(config.week_count_limits(), WeekCountLimits { min: 1, max: 6 });
        assert_eq!(config.policies(), PolicySet::default());
    }

    #[test]
    fn test_duration_section_overrides_policy() {
        let yaml = r#"
durations:
  primary: simple
  weekday_window: { start: "7:00", end: "21:00" }
  weekend_window: { start: "10:00", end: "18:00" }
  lunch_threshold_hours: "5"
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        let policies = config.policies();
        assert_eq!(policies.primary, PolicyKind::Simple);
        assert_eq!(policies.tabulated.weekday_window.to_string(), "7:00-21:00");
        assert_eq!(policies.tabulated.lunch_threshold, Decimal::from(5));
        assert_eq!(policies.tabulated.lunch_deduction, Decimal::ONE);
    }

    #[test]
    fn test_default_settings_prefer_configured_year() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut config = EngineConfig::default();
        assert_eq!(config.default_settings(today).year, 2026);

        config.defaults.year = Some(2025);
        let settings = config.default_settings(today);
        assert_eq!(settings.year, 2025);
        assert_eq!(settings.week_count, 4);
    }
}
