//! HTTP request handlers for the schedule engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::accepted_weekday_spellings;
use crate::error::EngineError;
use crate::export::write_csv;
use crate::models::SettingsUpdate;
use crate::parser::SAMPLE_SCHEDULE;
use crate::pipeline::process_schedule;

use super::request::{ScheduleRequest, SettingsRequest};
use super::response::{ApiError, ApiErrorResponse, FormatResponse, SettingsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/format", get(format_handler))
        .route("/conversations/:conversation/reports", post(reports_handler))
        .route(
            "/conversations/:conversation/export/:report",
            post(export_handler),
        )
        .route(
            "/conversations/:conversation/settings",
            get(get_settings_handler)
                .put(put_settings_handler)
                .delete(reset_settings_handler),
        )
        .with_state(state)
}

fn json_error(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_error(api_error.status, api_error.error)
}

/// Maps a body rejection into a 400 response.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_error(StatusCode::BAD_REQUEST, error)
}

/// Handler for `POST /conversations/:conversation/reports`.
///
/// Parses the schedule with the conversation's settings and returns every
/// report table.
async fn reports_handler(
    State(state): State<AppState>,
    Path(conversation): Path<String>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        conversation = %conversation,
        "Processing report request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_error(correlation_id, rejection),
    };

    let settings = state.settings().get(&conversation);
    let start_time = Instant::now();
    match process_schedule(&request.text, &settings, &state.policies()) {
        Ok(reports) => {
            info!(
                correlation_id = %correlation_id,
                conversation = %conversation,
                year = settings.year,
                discarded_lines = reports.discarded_lines,
                duration_us = start_time.elapsed().as_micros(),
                "Reports built successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(reports),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                conversation = %conversation,
                error = %err,
                "Report generation failed"
            );
            engine_error(err)
        }
    }
}

/// Handler for `POST /conversations/:conversation/export/:report`.
///
/// Builds the reports and returns the named table as CSV.
async fn export_handler(
    State(state): State<AppState>,
    Path((conversation, report)): Path<(String, String)>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        conversation = %conversation,
        report = %report,
        "Processing export request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_error(correlation_id, rejection),
    };

    let settings = state.settings().get(&conversation);
    let csv = process_schedule(&request.text, &settings, &state.policies())
        .and_then(|reports| reports.table(&report).and_then(write_csv));

    match csv {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                conversation = %conversation,
                report = %report,
                error = %err,
                "Export failed"
            );
            engine_error(err)
        }
    }
}

/// Handler for `GET /conversations/:conversation/settings`.
async fn get_settings_handler(
    State(state): State<AppState>,
    Path(conversation): Path<String>,
) -> Response {
    let settings = state.settings().get(&conversation);
    Json(SettingsResponse {
        conversation,
        settings,
    })
    .into_response()
}

/// Handler for `PUT /conversations/:conversation/settings`.
///
/// Applies a partial update; invalid values leave the stored settings as
/// they were.
async fn put_settings_handler(
    State(state): State<AppState>,
    Path(conversation): Path<String>,
    payload: Result<Json<SettingsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let update: SettingsUpdate = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_error(correlation_id, rejection),
    };

    match state.settings().update(&conversation, &update) {
        Ok(settings) => {
            info!(
                correlation_id = %correlation_id,
                conversation = %conversation,
                year = settings.year,
                week_count = settings.week_count,
                anchor = ?settings.anchor,
                "Settings updated"
            );
            Json(SettingsResponse {
                conversation,
                settings,
            })
            .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                conversation = %conversation,
                error = %err,
                "Settings update rejected"
            );
            engine_error(err)
        }
    }
}

/// Handler for `DELETE /conversations/:conversation/settings`.
async fn reset_settings_handler(
    State(state): State<AppState>,
    Path(conversation): Path<String>,
) -> Response {
    let settings = state.settings().reset(&conversation);
    info!(conversation = %conversation, "Settings reset to defaults");
    Json(SettingsResponse {
        conversation,
        settings,
    })
    .into_response()
}

/// Handler for `GET /format`.
async fn format_handler() -> Json<FormatResponse> {
    Json(FormatResponse {
        help: format_help(),
        sample: SAMPLE_SCHEDULE.to_string(),
    })
}

fn format_help() -> String {
    format!(
        "Each day starts with a header line \"<weekday> <dd.mm>\". \
         Accepted weekdays: {}. \
         Every following line is \"<name> H:MM-H:MM\" with an optional \
         break in parentheses, e.g. \"(12:30-13:00)\". \
         Other lines are ignored.",
        accepted_weekday_spellings().collect::<Vec<_>>().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let mut config = EngineConfig::default();
        config.defaults.year = Some(2025);
        AppState::new(config)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_reports_for_sample_return_200() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({ "text": SAMPLE_SCHEDULE }).to_string();

        let response = router
            .oneshot(post_json("/conversations/chat-1/reports", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(
                "/conversations/chat-1/reports",
                "{invalid json".to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_text_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/conversations/chat-1/reports", "{}".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_export_returns_csv() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({ "text": SAMPLE_SCHEDULE }).to_string();

        let response = router
            .oneshot(post_json("/conversations/chat-1/export/summary", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "text/csv; charset=utf-8");
    }

    #[test]
    fn test_format_help_lists_weekdays() {
        let help = format_help();
        assert!(help.contains("Понеділок"));
        assert!(help.contains("Неділя"));
    }
}
