//! HTTP middleware for request processing.
//!
//! Provides request ids and observability middleware.

pub mod request_id;
pub mod tracing;
