//! Database error classification
//!
//! Constraint violations reported by PostgreSQL are turned into domain
//! outcomes by the caller; everything else stays a plain `sqlx::Error`.

use sqlx::Error as SqlxError;

pub fn is_unique_violation(error: &SqlxError) -> bool {
    matches!(error, SqlxError::Database(db_err) if db_err.is_unique_violation())
}

pub fn is_foreign_key_violation(error: &SqlxError) -> bool {
    matches!(error, SqlxError::Database(db_err) if db_err.is_foreign_key_violation())
}

/// Maps a unique violation to `unique_error`, wrapping anything else.
pub fn map_unique_violation<E, F>(error: SqlxError, unique_error: E, wrap: F) -> E
where
    F: FnOnce(SqlxError) -> E,
{
    if is_unique_violation(&error) {
        unique_error
    } else {
        wrap(error)
    }
}

/// Maps a foreign key violation to `fk_error`, wrapping anything else.
///
/// A child row inserted after its parent was concurrently deleted lands here.
pub fn map_foreign_key_violation<E, F>(error: SqlxError, fk_error: E, wrap: F) -> E
where
    F: FnOnce(SqlxError) -> E,
{
    if is_foreign_key_violation(&error) {
        fk_error
    } else {
        wrap(error)
    }
}

/// Escapes `%`, `_` and `\` so user input matches literally inside `LIKE`.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `%input%` with metacharacters escaped.
pub fn contains_pattern(input: &str) -> String {
    format!("%{}%", escape_like(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_violations() {
        assert!(!is_unique_violation(&SqlxError::RowNotFound));
        assert!(!is_foreign_key_violation(&SqlxError::RowNotFound));
    }

    #[test]
    fn test_map_unique_violation_wraps_other_errors() {
        let mapped = map_unique_violation(SqlxError::RowNotFound, "dup", |_| "wrapped");
        assert_eq!(mapped, "wrapped");
        let mapped = map_foreign_key_violation(SqlxError::PoolTimedOut, "gone", |_| "wrapped");
        assert_eq!(mapped, "wrapped");
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(contains_pattern("es"), "%es%");
    }
}
