//! Middleware for the API layer.

pub mod rate_limit;
pub mod tracing;
