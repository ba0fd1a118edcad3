//! Typed outcomes of the URL store and alias allocation.
//!
//! These errors never carry presentation concerns. The HTTP layer converts them
//! into [`crate::error::AppError`] responses.

use thiserror::Error;

/// Errors produced by the store, the allocator and [`crate::application::services::UrlService`].
#[derive(Debug, Error)]
pub enum UrlError {
    /// Malformed URL or alias, rejected before reaching the store.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// The alias is already bound to a live record.
    #[error("alias already in use: {0}")]
    AliasConflict(String),

    /// No live record has this alias.
    #[error("alias not found: {0}")]
    NotFound(String),

    /// Underlying persistence failure.
    #[error("storage failure: {0}")]
    StorageFailure(#[from] sqlx::Error),

    /// Random alias generation kept colliding until the retry budget ran out.
    #[error("no free alias found after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },
}

impl UrlError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true for failures caused by the service itself rather than the caller.
    pub fn is_server_side(&self) -> bool {
        matches!(
            self,
            Self::StorageFailure(_) | Self::AllocationExhausted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message() {
        let err = UrlError::invalid("alias", "must not be empty");
        assert_eq!(err.to_string(), "invalid alias: must not be empty");
    }

    #[test]
    fn test_server_side_classification() {
        assert!(UrlError::StorageFailure(sqlx::Error::PoolTimedOut).is_server_side());
        assert!(UrlError::AllocationExhausted { attempts: 16 }.is_server_side());
        assert!(!UrlError::AliasConflict("ex1".to_string()).is_server_side());
        assert!(!UrlError::NotFound("ex1".to_string()).is_server_side());
        assert!(!UrlError::invalid("url", "bad").is_server_side());
    }
}
