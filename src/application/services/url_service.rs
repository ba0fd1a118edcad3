//! Create, resolve and remove alias mappings.

use std::sync::Arc;

use crate::application::services::alias_allocator::{AliasAllocator, AliasSettings};
use crate::domain::UrlError;
use crate::domain::entities::{Allocation, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::utils::alias_generator::validate_alias;
use crate::utils::url_validator::validate_url;

/// Boundary between the HTTP layer and the store.
///
/// Validates input, delegates alias selection to [`AliasAllocator`] and
/// passes lookups and deletes straight through to the repository. Every
/// error is returned as a typed [`UrlError`]; nothing here logs.
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
    allocator: AliasAllocator<R>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>, settings: AliasSettings) -> Self {
        let allocator = AliasAllocator::new(repository.clone(), settings);
        Self {
            repository,
            allocator,
        }
    }

    /// Stores `url` under `alias`, or under a generated alias when `alias` is
    /// `None` or empty.
    ///
    /// # Errors
    ///
    /// - [`UrlError::Invalid`] if the URL or the alias is malformed
    /// - [`UrlError::AliasConflict`] if a caller-chosen alias is taken
    /// - [`UrlError::AllocationExhausted`] if no free random alias was found
    /// - [`UrlError::StorageFailure`] on database errors
    pub async fn create_mapping(
        &self,
        url: &str,
        alias: Option<&str>,
    ) -> Result<Allocation, UrlError> {
        validate_url(url)?;

        let alias = alias.filter(|a| !a.is_empty());
        if let Some(alias) = alias {
            validate_alias(alias)?;
        }

        self.allocator.allocate(url, alias).await
    }

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if the alias is unknown.
    /// Returns [`UrlError::StorageFailure`] on database errors.
    pub async fn resolve_alias(&self, alias: &str) -> Result<String, UrlError> {
        self.repository.get_url(alias).await
    }

    /// Deletes the mapping for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::NotFound`] if the alias is unknown or already deleted.
    /// Returns [`UrlError::StorageFailure`] on database errors.
    pub async fn remove_alias(&self, alias: &str) -> Result<(), UrlError> {
        self.repository.delete_url(alias).await
    }

    /// Returns up to `limit` of the most recently created mappings.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, UrlError> {
        self.repository.list_recent(limit.max(0)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlLister, UrlSaver};
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl UrlSaver for Store {
            async fn save_url(&self, url: &str, alias: &str) -> Result<i64, UrlError>;
        }

        #[async_trait]
        impl UrlGetter for Store {
            async fn get_url(&self, alias: &str) -> Result<String, UrlError>;
        }

        #[async_trait]
        impl UrlDeleter for Store {
            async fn delete_url(&self, alias: &str) -> Result<(), UrlError>;
        }

        #[async_trait]
        impl UrlLister for Store {
            async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, UrlError>;
        }
    }

    fn service(store: MockStore) -> UrlService<MockStore> {
        UrlService::new(Arc::new(store), AliasSettings::default())
    }

    #[tokio::test]
    async fn test_create_mapping_with_alias() {
        let mut store = MockStore::new();
        store
            .expect_save_url()
            .withf(|url, alias| url == "https://example.com/page" && alias == "ex1")
            .times(1)
            .returning(|_, _| Ok(1));

        let result = service(store)
            .create_mapping("https://example.com/page", Some("ex1"))
            .await
            .unwrap();

        assert_eq!(result.id, 1);
        assert_eq!(result.alias, "ex1");
    }

    #[tokio::test]
    async fn test_create_mapping_empty_alias_generates_one() {
        let mut store = MockStore::new();
        store
            .expect_save_url()
            .withf(|_, alias| alias.len() == 6)
            .times(1)
            .returning(|_, _| Ok(3));

        let result = service(store)
            .create_mapping("https://example.com", Some(""))
            .await
            .unwrap();

        assert_eq!(result.id, 3);
        assert_eq!(result.alias.len(), 6);
    }

    #[tokio::test]
    async fn test_create_mapping_invalid_url_never_reaches_store() {
        let mut store = MockStore::new();
        store.expect_save_url().times(0);

        let err = service(store)
            .create_mapping("not-a-url", Some("ex1"))
            .await
            .unwrap_err();

        assert!(matches!(err, UrlError::Invalid { field: "url", .. }));
    }

    #[tokio::test]
    async fn test_create_mapping_invalid_alias_never_reaches_store() {
        let mut store = MockStore::new();
        store.expect_save_url().times(0);

        let err = service(store)
            .create_mapping("https://example.com", Some("no/slashes"))
            .await
            .unwrap_err();

        assert!(matches!(err, UrlError::Invalid { field: "alias", .. }));
    }

    #[tokio::test]
    async fn test_create_mapping_reserved_alias() {
        let mut store = MockStore::new();
        store.expect_save_url().times(0);

        let err = service(store)
            .create_mapping("https://example.com", Some("health"))
            .await
            .unwrap_err();

        assert!(matches!(err, UrlError::Invalid { .. }));
    }

    #[tokio::test]
    async fn test_create_mapping_conflict_surfaces() {
        let mut store = MockStore::new();
        store
            .expect_save_url()
            .times(1)
            .returning(|_, alias| Err(UrlError::AliasConflict(alias.to_string())));

        let err = service(store)
            .create_mapping("https://example.com", Some("ex1"))
            .await
            .unwrap_err();

        assert!(matches!(err, UrlError::AliasConflict(_)));
    }

    #[tokio::test]
    async fn test_resolve_alias() {
        let mut store = MockStore::new();
        store
            .expect_get_url()
            .withf(|alias| alias == "ex1")
            .times(1)
            .returning(|_| Ok("https://example.com/page".to_string()));

        let url = service(store).resolve_alias("ex1").await.unwrap();
        assert_eq!(url, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_resolve_alias_not_found() {
        let mut store = MockStore::new();
        store
            .expect_get_url()
            .times(1)
            .returning(|alias| Err(UrlError::NotFound(alias.to_string())));

        let err = service(store).resolve_alias("missing").await.unwrap_err();
        assert!(matches!(err, UrlError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_alias_not_found() {
        let mut store = MockStore::new();
        store
            .expect_delete_url()
            .times(1)
            .returning(|alias| Err(UrlError::NotFound(alias.to_string())));

        let err = service(store).remove_alias("missing").await.unwrap_err();
        assert!(matches!(err, UrlError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_recent_clamps_negative_limit() {
        let mut store = MockStore::new();
        store
            .expect_list_recent()
            .withf(|limit| *limit == 0)
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let records = service(store).list_recent(-5).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_list_recent_passes_records_through() {
        let mut store = MockStore::new();
        store.expect_list_recent().times(1).returning(|_| {
            Ok(vec![UrlRecord::new(
                2,
                "b".to_string(),
                "https://b.example".to_string(),
                Utc::now(),
            )])
        });

        let records = service(store).list_recent(10).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].alias, "b");
    }
}
