//! Domain layer containing entities, store contracts and typed errors.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Capability-scoped store traits
//! - [`error`] - [`UrlError`], the typed outcome of every store operation
//!
//! The domain layer has no dependency on the HTTP layer. Store traits are
//! implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::UrlError;
