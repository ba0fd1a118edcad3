//! Alias route configuration.

use crate::api::handlers::{delete_url_handler, redirect_handler, save_url_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Alias management and redirect routes.
///
/// # Endpoints
///
/// - `POST   /url`       - Store a URL under a chosen or generated alias
/// - `GET    /{alias}`   - Redirect to the stored URL
/// - `DELETE /{alias}`   - Delete the mapping
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_url_handler))
        .route("/{alias}", get(redirect_handler).delete(delete_url_handler))
}
