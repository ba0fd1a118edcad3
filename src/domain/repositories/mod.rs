//! Repository trait definitions for the domain layer.
//!
//! The store is split into narrow capabilities:
//!
//! - [`UrlSaver`] - create a mapping
//! - [`UrlGetter`] - look up a mapping by alias
//! - [`UrlDeleter`] - delete a mapping by alias
//! - [`UrlLister`] - list recent mappings (admin tooling)
//!
//! [`UrlRepository`] bundles all of them. Implementations live in
//! `crate::infrastructure::persistence`; mocks are generated via `mockall`
//! for unit tests.

pub mod url_repository;

pub use url_repository::{UrlDeleter, UrlGetter, UrlLister, UrlRepository, UrlSaver};

#[cfg(test)]
pub use url_repository::{MockUrlDeleter, MockUrlGetter, MockUrlLister, MockUrlSaver};
