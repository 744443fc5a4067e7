//! HTTP handlers for schedule endpoints.
//!
//! These handlers connect Axum routes to the schedule command handler.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{CreateScheduleCommand, CreateScheduleHandler};
use crate::domain::scheduling::{ScheduleError, SchedulingParameters};

use super::dto::{ErrorResponse, HealthResponse, ScheduleRequest, ScheduleResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Schedule API error that implements IntoResponse.
#[derive(Debug)]
pub struct ScheduleApiError(pub ScheduleError);

impl From<ScheduleError> for ScheduleApiError {
    fn from(error: ScheduleError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ScheduleApiError {
    fn into_response(self) -> axum::response::Response {
        let code = self.0.code();
        let status = if code.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let error = ErrorResponse::new(code.to_string(), self.0.to_string())
            .with_field(self.0.field_path());
        (status, Json(error)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing schedule dependencies.
#[derive(Clone)]
pub struct ScheduleAppState {
    pub handler: Arc<CreateScheduleHandler>,
}

impl ScheduleAppState {
    pub fn new(params: SchedulingParameters) -> Self {
        Self {
            handler: Arc::new(CreateScheduleHandler::new(params)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /schedule
///
/// Allocates the submitted chores and returns the schedule with its quality report.
pub async fn create_schedule(
    State(state): State<ScheduleAppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, ScheduleApiError> {
    let result = state
        .handler
        .handle(CreateScheduleCommand { input: request })?;
    Ok(Json(result))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
