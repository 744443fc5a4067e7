//! HTTP DTOs for schedule endpoints.
//!
//! The domain input and result types are already designed for
//! serialization, so we re-export them directly.

pub use crate::application::handlers::CreateScheduleResult as ScheduleResponse;
pub use crate::domain::scheduling::{
    ChoreInput, NumericInput, QualityReport, Schedule, ScheduleInput as ScheduleRequest, UserInput,
};

use serde::Serialize;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Adds the offending field path to the details.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.details = Some(serde_json::json!({ "field": field.into() }));
        self
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
