//! Alias generation and validation utilities.
//!
//! Generated aliases are drawn uniformly from the 62-symbol alphabet
//! `[A-Za-z0-9]`. Caller-chosen aliases are checked for shape only; whether
//! they are free is decided by the store.

use crate::domain::UrlError;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Default length of generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Upper bound on the length of caller-chosen aliases.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would shadow fixed routes.
pub const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Generates a random alias of `length` alphanumeric characters.
///
/// Uses the thread-local RNG. The result does not need to be unpredictable,
/// only uniformly distributed per position.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    generate_alias_with(&mut rand::rng(), length)
}

/// Generates an alias from the provided random source.
pub fn generate_alias_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `alias` collides with a fixed route.
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// Aliases are case-sensitive; `Health` is accepted while `health` is not.
///
/// # Errors
///
/// Returns [`UrlError::Invalid`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), UrlError> {
    if alias.is_empty() {
        return Err(UrlError::invalid("alias", "must not be empty"));
    }

    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(UrlError::invalid(
            "alias",
            format!("must be at most {MAX_ALIAS_LENGTH} characters"),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(UrlError::invalid(
            "alias",
            "may only contain letters, digits, '-' and '_'",
        ));
    }

    if is_reserved(alias) {
        return Err(UrlError::invalid("alias", "this alias is reserved"));
    }

    Ok(())
}
