//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::persistence::SqliteUrlRepository;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<SqliteUrlRepository>>,
    /// Used by the health check only; handlers go through `url_service`.
    pub pool: Arc<SqlitePool>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService<SqliteUrlRepository>>, pool: Arc<SqlitePool>) -> Self {
        Self { url_service, pool }
    }
}
