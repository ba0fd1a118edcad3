//! DTOs for alias creation.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for caller-chosen aliases.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to store a URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveUrlRequest {
    /// The target URL (must be an absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional alias. Missing, `null` and `""` all mean "generate one".
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(
        path = *ALIAS_REGEX,
        message = "Alias may only contain letters, digits, '-' and '_'"
    ))]
    pub alias: Option<String>,
}

/// Created mapping.
#[derive(Debug, Serialize)]
pub struct SaveUrlResponse {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> SaveUrlRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_alias_absent_null_or_empty_is_none() {
        assert!(parse(json!({ "url": "https://example.com" })).alias.is_none());
        assert!(
            parse(json!({ "url": "https://example.com", "alias": null }))
                .alias
                .is_none()
        );
        assert!(
            parse(json!({ "url": "https://example.com", "alias": "" }))
                .alias
                .is_none()
        );
    }

    #[test]
    fn test_valid_request() {
        let req = parse(json!({ "url": "https://example.com/page", "alias": "ex1" }));
        assert!(req.validate().is_ok());
        assert_eq!(req.alias.as_deref(), Some("ex1"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let req = parse(json!({ "url": "not a url" }));
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_invalid_alias_rejected() {
        let req = parse(json!({ "url": "https://example.com", "alias": "has space" }));
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("alias"));

        let req = parse(json!({ "url": "https://example.com", "alias": "a".repeat(65) }));
        assert!(req.validate().is_err());
    }
}
