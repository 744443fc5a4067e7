//! Schedule HTTP adapter module.
//!
//! Provides the REST endpoint that turns a submitted household into a
//! schedule and quality report.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{ScheduleApiError, ScheduleAppState};
pub use routes::{schedule_router, schedule_routes};
