//! Store traits for URL records.
//!
//! Each trait covers one capability so that a component depends only on the
//! operations it actually calls. The allocator only needs [`UrlSaver`]; the
//! service needs the full [`UrlRepository`].

use crate::domain::entities::UrlRecord;
use crate::domain::error::UrlError;
use async_trait::async_trait;

/// Persists new alias mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Stores `url` under `alias` and returns the new record id.
    ///
    /// Uniqueness of `alias` is enforced by the store itself, so two
    /// concurrent calls with the same alias produce exactly one success.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::AliasConflict`] if the alias is already bound.
    /// Returns [`UrlError::StorageFailure`] on database errors.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, UrlError>;
}

/// Resolves aliases to their stored URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the URL stored under `alias`, exactly as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if no record has this alias.
    /// Returns [`UrlError::StorageFailure`] on database errors.
    async fn get_url(&self, alias: &str) -> Result<String, UrlError>;
}

/// Removes alias mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Deletes the record bound to `alias`, freeing the alias for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if no record has this alias, including
    /// when it was already deleted.
    /// Returns [`UrlError::StorageFailure`] on database errors.
    async fn delete_url(&self, alias: &str) -> Result<(), UrlError>;
}

/// Lists stored records, newest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlLister: Send + Sync {
    /// Returns up to `limit` records ordered by id descending.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::StorageFailure`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, UrlError>;
}

/// Full store contract, implemented for anything that provides every capability.
pub trait UrlRepository: UrlSaver + UrlGetter + UrlDeleter + UrlLister {}

impl<T> UrlRepository for T where T: UrlSaver + UrlGetter + UrlDeleter + UrlLister {}
