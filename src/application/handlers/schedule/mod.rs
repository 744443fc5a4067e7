//! Schedule command handlers.

mod create_schedule;

pub use create_schedule::{CreateScheduleCommand, CreateScheduleHandler, CreateScheduleResult};
