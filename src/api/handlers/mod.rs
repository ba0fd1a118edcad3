//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod delete;
pub mod health;
pub mod redirect;
pub mod save;

pub use delete::delete_url_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use save::save_url_handler;

use crate::domain::UrlError;

/// Logs a failed store operation at a level matching who is at fault.
pub(crate) fn log_failure(op: &'static str, err: &UrlError) {
    if err.is_server_side() {
        tracing::error!(op, error = %err, "request failed");
    } else {
        tracing::info!(op, error = %err, "request rejected");
    }
}
