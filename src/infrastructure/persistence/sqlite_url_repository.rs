//! SQLite implementation of the URL store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::UrlError;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlLister, UrlSaver};
use crate::utils::db_error::is_unique_violation;

/// SQLite repository for URL records.
///
/// Alias uniqueness rests on the `UNIQUE` constraint of the `url.alias`
/// column, so concurrent inserts of the same alias cannot both succeed.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    alias: String,
    url: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.alias, row.url, row.created_at)
    }
}

#[async_trait]
impl UrlSaver for SqliteUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, UrlError> {
        let result = sqlx::query("INSERT INTO url (alias, url, created_at) VALUES (?, ?, ?)")
            .bind(alias)
            .bind(url)
            .bind(Utc::now())
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    UrlError::AliasConflict(alias.to_owned())
                } else {
                    UrlError::StorageFailure(e)
                }
            })?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl UrlGetter for SqliteUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, UrlError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| UrlError::NotFound(alias.to_owned()))
    }
}

#[async_trait]
impl UrlDeleter for SqliteUrlRepository {
    async fn delete_url(&self, alias: &str) -> Result<(), UrlError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(UrlError::NotFound(alias.to_owned()));
        }

        Ok(())
    }
}

#[async_trait]
impl UrlLister for SqliteUrlRepository {
    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, UrlError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, alias, url, created_at
            FROM url
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }
}
