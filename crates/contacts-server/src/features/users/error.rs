//! Errors raised by user operations

use thiserror::Error;

use crate::auth::PasswordError;
use crate::error::AppError;
use crate::features::shared::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Username already exists")]
    UsernameTaken,

    /// Unknown username and wrong password are deliberately the same error.
    #[error("Username or password is wrong")]
    InvalidCredentials,

    /// The authenticated user vanished between the token check and the update.
    #[error("Unauthorized")]
    Gone,

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(errors) => AppError::Validation(errors),
            UserError::UsernameTaken => AppError::BadRequest(err.to_string()),
            UserError::InvalidCredentials | UserError::Gone => AppError::Unauthorized(err.to_string()),
            UserError::Password(e) => e.into(),
            UserError::Database(e) => AppError::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::from(UserError::UsernameTaken).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(UserError::InvalidCredentials).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(UserError::Database(sqlx::Error::RowNotFound)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(UserError::UsernameTaken.to_string(), "Username already exists");
        assert_eq!(
            UserError::InvalidCredentials.to_string(),
            "Username or password is wrong"
        );
    }
}
