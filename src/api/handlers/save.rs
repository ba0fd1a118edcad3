//! Handler for alias creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::api::dto::url::{SaveUrlRequest, SaveUrlResponse};
use crate::api::handlers::log_failure;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "alias": "ex1"    // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": 1, "alias": "ex1", "url": "https://example.com/page" }
/// ```
///
/// # Errors
///
/// - 400 if the body is malformed or fails validation
/// - 409 if the chosen alias is already in use
/// - 503 if no free random alias could be found
/// - 500 on database errors
pub async fn save_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveUrlResponse>), AppError> {
    let Json(payload) = payload.inspect_err(|e| {
        info!(error = %e, "failed to decode request body");
    })?;

    payload.validate().inspect_err(|e| {
        info!(error = %e, "invalid request");
    })?;

    let allocation = state
        .url_service
        .create_mapping(&payload.url, payload.alias.as_deref())
        .await
        .inspect_err(|e| log_failure("save", e))?;

    info!(id = allocation.id, alias = %allocation.alias, "url saved");

    Ok((
        StatusCode::CREATED,
        Json(SaveUrlResponse {
            id: allocation.id,
            alias: allocation.alias,
            url: payload.url,
        }),
    ))
}
