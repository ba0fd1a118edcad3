//! # URL Alias
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate keeps a clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, store traits and typed errors
//! - **Application Layer** ([`application`]) - Alias allocation and the service boundary
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Caller-chosen or randomly generated aliases
//! - Alias uniqueness enforced by the database, safe under concurrent requests
//! - Bounded retries when random aliases collide
//! - Structured logging with per-request ids
//!
//! ## Quick Start
//!
//! ```bash
//! export APP_ENV=local
//! export STORAGE_PATH=./storage/storage.db
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasSettings, UrlService};
    pub use crate::domain::UrlError;
    pub use crate::domain::entities::{Allocation, UrlRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
