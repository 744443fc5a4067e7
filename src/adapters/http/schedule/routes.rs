//! HTTP routes for schedule endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_schedule, health, ScheduleAppState};

/// Creates the schedule router.
///
/// Routes:
/// - `POST /schedule` - Allocate chores and score the result
/// - `GET /health` - Liveness probe
pub fn schedule_router() -> Router<ScheduleAppState> {
    Router::new()
        .route("/schedule", post(create_schedule))
        .route("/health", get(health))
}

/// Creates the schedule router with its state attached.
pub fn schedule_routes(state: ScheduleAppState) -> Router {
    schedule_router().with_state(state)
}
