//! Per-conversation report settings.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::monday_of;
use crate::error::{EngineError, EngineResult};

/// The resolved settings used for one schedule run.
///
/// Values are immutable; updates produce a new `Settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Year used to resolve `dd.mm` headers.
    pub year: i32,
    /// Number of week blocks in the wide-weekly and summary reports.
    pub week_count: u32,
    /// Optional anchor Monday for week numbering.
    pub anchor: Option<NaiveDate>,
}

/// Years accepted for [`Settings::year`] and for the year of an anchor.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Inclusive bounds for [`Settings::week_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCountLimits {
    /// Smallest accepted week count.
    pub min: u32,
    /// Largest accepted week count.
    pub max: u32,
}

impl Default for WeekCountLimits {
    fn default() -> Self {
        Self { min: 1, max: 6 }
    }
}

/// A partial settings change.
///
/// Absent fields keep their current value. For `anchor`, an explicit
/// `null` clears the anchor while an absent field leaves it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    /// New year, if any.
    #[serde(default)]
    pub year: Option<i32>,
    /// New week count, if any.
    #[serde(default)]
    pub week_count: Option<u32>,
    /// New anchor (`Some(None)` clears it).
    #[serde(default, deserialize_with = "deserialize_present")]
    pub anchor: Option<Option<NaiveDate>>,
}

/// Deserializes a present field, including `null`, as `Some`.
pub(crate) fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}

impl Settings {
    /// Applies an update, validating every changed field.
    ///
    /// A supplied anchor is snapped back to the Monday of its week.
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_engine::models::{Settings, SettingsUpdate, WeekCountLimits};
    /// use chrono::NaiveDate;
    ///
    /// let settings = Settings { year: 2025, week_count: 4, anchor: None };
    /// let update = SettingsUpdate {
    ///     anchor: Some(NaiveDate::from_ymd_opt(2025, 9, 10)),
    ///     ..Default::default()
    /// };
    /// let updated = settings.apply(&update, WeekCountLimits::default()).unwrap();
    /// assert_eq!(updated.anchor, NaiveDate::from_ymd_opt(2025, 9, 8));
    /// ```
    pub fn apply(&self, update: &SettingsUpdate, limits: WeekCountLimits) -> EngineResult<Self> {
        let mut next = *self;

        if let Some(year) = update.year {
            if !SUPPORTED_YEARS.contains(&year) {
                return Err(EngineError::InvalidSettings {
                    field: "year".to_string(),
                    message: format!(
                        "{} is outside {}..={}",
                        year,
                        SUPPORTED_YEARS.start(),
                        SUPPORTED_YEARS.end()
                    ),
                });
            }
            next.year = year;
        }

        if let Some(week_count) = update.week_count {
            if week_count < limits.min || week_count > limits.max {
                return Err(EngineError::InvalidSettings {
                    field: "week_count".to_string(),
                    message: format!("must be between {} and {}", limits.min, limits.max),
                });
            }
            next.week_count = week_count;
        }

        if let Some(anchor) = update.anchor {
            if let Some(date) = anchor.filter(|d| !SUPPORTED_YEARS.contains(&d.year())) {
                return Err(EngineError::InvalidSettings {
                    field: "anchor".to_string(),
                    message: format!("{} is outside the supported years", date),
                });
            }
            next.anchor = anchor.map(monday_of);
        }

        Ok(next)
    }

    /// Settings for the current calendar year of `today`.
    pub fn for_today(today: NaiveDate, week_count: u32) -> Self {
        Self {
            year: today.year(),
            week_count,
            anchor: None,
        }
    }
}
