//! URL record entity representing a stored alias mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping from a short alias to its target URL.
///
/// The `id` is assigned by the store and never reused. The `url` is kept
/// exactly as it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            alias,
            url,
            created_at,
        }
    }
}

/// Result of a successful alias allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub id: i64,
    pub alias: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            1,
            "ex1".to_string(),
            "https://example.com/page".to_string(),
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.alias, "ex1");
        assert_eq!(record.url, "https://example.com/page");
        assert_eq!(record.created_at, now);
    }
}
