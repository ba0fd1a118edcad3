//! `x-request-id` generation and propagation.
//!
//! Incoming requests that already carry an `x-request-id` keep it; others get
//! a fresh UUID. The id is copied onto the response.

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Assigns a request id. Must be the outermost of the request-id layers.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies the request id header onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}
