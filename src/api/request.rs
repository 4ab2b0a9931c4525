//! Request types for the schedule engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::SettingsUpdate;

/// Request body for the report and export endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The raw schedule text.
    pub text: String,
}

/// Request body for `PUT /conversations/{id}/settings`.
///
/// Every field is optional. `anchor: null` clears the anchor; leaving the
/// field out keeps it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsRequest {
    /// Year used to resolve `dd.mm` headers.
    #[serde(default)]
    pub year: Option<i32>,
    /// Number of week blocks (bounded by configuration).
    #[serde(default, alias = "weeks")]
    pub week_count: Option<u32>,
    /// Anchor date; snapped to its Monday.
    #[serde(
        default,
        deserialize_with = "crate::models::deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub anchor: Option<Option<NaiveDate>>,
}

impl From<SettingsRequest> for SettingsUpdate {
    fn from(req: SettingsRequest) -> Self {
        SettingsUpdate {
            year: req.year,
            week_count: req.week_count,
            anchor: req.anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_request_deserialization() {
        let req: ScheduleRequest = serde_json::from_str(r#"{"text": "Понеділок 08.09"}"#).unwrap();
        assert_eq!(req.text, "Понеділок 08.09");
    }

    #[test]
    fn test_settings_request_weeks_alias() {
        let req: SettingsRequest = serde_json::from_str(r#"{"weeks": 3}"#).unwrap();
        assert_eq!(req.week_count, Some(3));
        assert_eq!(req.anchor, None);
    }

    #[test]
    fn test_settings_request_into_update() {
        let req: SettingsRequest =
            serde_json::from_str(r#"{"year": 2025, "anchor": "2025-09-10"}"#).unwrap();
        let update: SettingsUpdate = req.into();
        assert_eq!(update.year, Some(2025));
        assert_eq!(update.anchor, Some(NaiveDate::from_ymd_opt(2025, 9, 10)));
    }

    #[test]
    fn test_settings_request_rejects_bad_anchor() {
        let result = serde_json::from_str::<SettingsRequest>(r#"{"anchor": "10.09.2025"}"#);
        assert!(result.is_err());
    }
}
