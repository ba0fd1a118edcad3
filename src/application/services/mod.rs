//! Business logic services for the application layer.

pub mod alias_allocator;
pub mod url_service;

pub use alias_allocator::{AliasAllocator, AliasSettings};
pub use url_service::UrlService;
