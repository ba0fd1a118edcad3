//! Target URL validation.
//!
//! URLs are checked but never rewritten: the store keeps exactly what the
//! caller submitted.

use crate::domain::UrlError;
use url::Url;

/// Validates that `input` is an absolute HTTP or HTTPS URL with a host.
///
/// # Security
///
/// Rejects schemes like `javascript:`, `data:` and `file:` so a redirect can
/// never point at them.
///
/// # Errors
///
/// Returns [`UrlError::Invalid`] for empty, malformed or non-HTTP(S) URLs.
pub fn validate_url(input: &str) -> Result<(), UrlError> {
    if input.trim().is_empty() {
        return Err(UrlError::invalid("url", "must not be empty"));
    }

    // The parser silently strips these, but the stored string must be usable
    // verbatim as a `Location` header.
    if input != input.trim() {
        return Err(UrlError::invalid(
            "url",
            "must not have leading or trailing whitespace",
        ));
    }
    if input.chars().any(char::is_control) {
        return Err(UrlError::invalid("url", "must not contain control characters"));
    }

    let url = Url::parse(input).map_err(|e| UrlError::invalid("url", e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(UrlError::invalid(
                "url",
                format!("unsupported scheme '{other}', only http and https are allowed"),
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlError::invalid("url", "must include a host"));
    }

    Ok(())
}
