//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::api::handlers::log_failure;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Every request reads the store; there is no cache in front of it.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state
        .url_service
        .resolve_alias(&alias)
        .await
        .inspect_err(|e| log_failure("redirect", e))?;

    debug!(alias = %alias, url = %url, "redirecting");

    Ok(Redirect::temporary(&url))
}
