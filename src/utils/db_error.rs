//! Helpers for classifying database errors.

/// Returns true if `e` is a UNIQUE constraint violation.
///
/// The only unique key on the `url` table besides the primary key is `alias`,
/// so a violation here always means the alias is taken.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
