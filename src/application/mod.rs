//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations. The scheduling domain has no
//! I/O, so handlers hold configuration only.

pub mod handlers;

pub use handlers::{CreateScheduleCommand, CreateScheduleHandler, CreateScheduleResult};
