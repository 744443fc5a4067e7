//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod schedule;

pub use schedule::{CreateScheduleCommand, CreateScheduleHandler, CreateScheduleResult};
