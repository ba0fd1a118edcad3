//! Infrastructure layer for external integrations.
//!
//! Implements the store traits defined by the domain layer.
//!
//! - [`persistence`] - SQLite repository implementations

pub mod persistence;
