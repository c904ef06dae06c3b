//! Response envelopes
//!
//! Successful responses wrap their payload in `data`; paged results add a
//! `paging` object. Failures are rendered by [`crate::error::AppError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::features::shared::Paging;

/// Payload returned by operations that only acknowledge success.
pub const OK: &str = "OK";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Same envelope with a status other than 200.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl DataResponse<&'static str> {
    pub fn ok() -> Self {
        Self { data: OK }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}

impl<T: Serialize> IntoResponse for PagedResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// `{"errors": ...}` for not found, unauthorized and domain rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainErrorResponse {
    pub errors: String,
}

impl DomainErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            errors: message.into(),
        }
    }
}

/// `{"error": ...}` for validation and internal failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
