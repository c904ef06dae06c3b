//! Errors raised by address operations

use thiserror::Error;

use crate::error::AppError;
use crate::features::shared::ValidationErrors;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Contact is not found")]
    ContactNotFound,

    #[error("Address is not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AddressError> for AppError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::Validation(errors) => AppError::Validation(errors),
            AddressError::ContactNotFound | AddressError::NotFound => {
                AppError::NotFound(err.to_string())
            },
            AddressError::Database(e) => AppError::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::from(AddressError::ContactNotFound).to_string(),
            "Contact is not found"
        );
        assert_eq!(AppError::from(AddressError::NotFound).to_string(), "Address is not found");
    }
}
