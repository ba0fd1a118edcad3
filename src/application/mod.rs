//! Application layer services.
//!
//! Services consume the repository traits and give HTTP handlers and the
//! admin CLI a single entry point.
//!
//! - [`services::url_service::UrlService`] - Create, resolve and remove mappings
//! - [`services::alias_allocator::AliasAllocator`] - Alias selection with bounded retries

pub mod services;
