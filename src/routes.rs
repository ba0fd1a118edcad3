//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /health`    - Health check
//! - `POST   /url`       - Create a mapping
//! - `GET    /{alias}`   - Redirect
//! - `DELETE /{alias}`   - Delete a mapping
//!
//! # Middleware (outermost first)
//!
//! - **Path normalization** - Trailing slash handling
//! - **Request id** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - A panicking handler yields 500 instead of a dropped connection
//! - **Timeout** - Requests running longer than `HTTP_TIMEOUT` get 408

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::request_id;
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, config.request_timeout()))
}

/// Router with every route and layer except path normalization.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::url_routes())
        .with_state(state)
        .layer(timeout_layer(request_timeout))
        .layer(CatchPanicLayer::new())
        .layer(api::middleware::tracing::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}

/// Answers `408 Request Timeout` when the inner service runs past `timeout`.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_slow_handler_gets_request_timeout() {
        let app = Router::new()
            .route(
                "/slow",
                get(|| async {
                    std::future::pending::<()>().await;
                    "unreachable"
                }),
            )
            .layer(timeout_layer(Duration::from_millis(20)));

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
