#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use url_alias::application::services::{AliasSettings, UrlService};
use url_alias::infrastructure::persistence::{
    MIGRATOR, SqliteUrlRepository, connect_pool, run_migrations,
};
use url_alias::state::AppState;

/// Fresh in-memory database with the schema applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

/// File-backed database with a multi-connection pool, for tests that need
/// writers to really contend. Keep the returned `TempDir` alive.
pub async fn create_file_pool(max_connections: u32) -> (SqlitePool, TempDir) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("aliases.db").display());

    let pool = connect_pool(&url, max_connections, Duration::from_secs(30))
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();

    (pool, dir)
}

pub fn create_test_repository(pool: SqlitePool) -> Arc<SqliteUrlRepository> {
    Arc::new(SqliteUrlRepository::new(Arc::new(pool)))
}

pub fn create_test_service(pool: SqlitePool) -> UrlService<SqliteUrlRepository> {
    UrlService::new(create_test_repository(pool), AliasSettings::default())
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let url_service = Arc::new(create_test_service(pool.clone()));
    AppState::new(url_service, Arc::new(pool))
}

pub async fn create_test_link(pool: &SqlitePool, alias: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO url (alias, url, created_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(alias)
    .bind(url)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}
