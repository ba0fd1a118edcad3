//! Handler for alias deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::api::handlers::log_failure;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /{alias}`
///
/// The record is removed, so the alias can be claimed again right away.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist or was already deleted.
pub async fn delete_url_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .url_service
        .remove_alias(&alias)
        .await
        .inspect_err(|e| log_failure("delete", e))?;

    info!(alias = %alias, "url deleted");

    Ok(StatusCode::NO_CONTENT)
}
