//! Application error type and its HTTP mapping
//!
//! Two envelope shapes are produced, and clients depend on both:
//!
//! - domain failures (not found, unauthorized, duplicate username) use
//!   `{"errors": "<message>"}`
//! - validation and internal failures use `{"error": "<kind>: <detail>"}`

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::response::{DomainErrorResponse, ErrorResponse};
use crate::features::shared::ValidationErrors;

/// Message returned for every internal failure. Details only go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation(errors) => {
                tracing::debug!(issues = errors.issues.len(), "Request failed validation");
                let body = ErrorResponse::new(format!("Validation Error: {}", errors.to_json()));
                (status, Json(body)).into_response()
            },
            AppError::NotFound(message)
            | AppError::BadRequest(message)
            | AppError::Unauthorized(message) => {
                (status, Json(DomainErrorResponse::new(message))).into_response()
            },
            AppError::Database(ref e) => {
                tracing::error!(error = ?e, "Database error");
                internal_response()
            },
            AppError::Internal(ref message) => {
                tracing::error!(error = %message, "Internal error");
                internal_response()
            },
        }
    }
}

fn internal_response() -> Response {
    let body = ErrorResponse::new(format!("Internal Server Error: {INTERNAL_ERROR_MESSAGE}"));
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(ValidationErrors::single("body", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(ValidationErrors::single("path", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(ValidationErrors::single("query", rejection.body_text()))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Background task failed: {err}"))
    }
}
