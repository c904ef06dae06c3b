//! Errors raised by contact operations

use thiserror::Error;

use crate::error::AppError;
use crate::features::shared::ValidationErrors;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Contact is not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Validation(errors) => AppError::Validation(errors),
            ContactError::NotFound => AppError::NotFound(err.to_string()),
            ContactError::Database(e) => AppError::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_mapping() {
        let app_error = AppError::from(ContactError::NotFound);
        assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
        assert_eq!(app_error.to_string(), "Contact is not found");
    }
}
