//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared between the scheduling domain
//! and the adapters that expose it.

mod errors;

pub use errors::ErrorCode;
