//! Adapters - connect the domain to external systems.
//!
//! - `http` - REST API over axum

pub mod http;
