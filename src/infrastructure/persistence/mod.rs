//! SQLite repository implementations.
//!
//! Concrete implementations of the domain store traits using SQLx with bound
//! parameters.
//!
//! - [`SqliteUrlRepository`] - URL record storage and retrieval
//! - [`pool`] - Pool construction and embedded migrations

pub mod pool;
pub mod sqlite_url_repository;

pub use pool::{MIGRATOR, connect_pool, run_migrations};
pub use sqlite_url_repository::SqliteUrlRepository;
