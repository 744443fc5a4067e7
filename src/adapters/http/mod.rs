//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod schedule;

// Re-export key types for convenience
pub use schedule::ScheduleAppState;
pub use schedule::{schedule_router, schedule_routes};
