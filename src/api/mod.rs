//! HTTP API module for the schedule engine.
//!
//! This module provides the REST API endpoints for turning schedule text
//! into reports and for managing per-conversation settings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ScheduleRequest, SettingsRequest};
pub use response::{ApiError, ApiErrorResponse, FormatResponse, SettingsResponse};
pub use state::AppState;
