//! # HTTP API Errors
//!
//! Error types for the school directory endpoints.
//!
//! Response bodies are fixed and non-leaking: client errors name the
//! rejected input class, persistence failures answer with a generic
//! message while the driver detail goes to the logger only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{Logger, Severity};
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// School API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Rejected school record on the create endpoint
    #[error("Invalid input data")]
    InvalidInput,

    /// Rejected query coordinates on the list endpoint
    #[error("Invalid or missing coordinates")]
    InvalidCoordinates,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Persistence failure from the store collaborator
    #[error("Database error")]
    Database(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::InvalidCoordinates => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref err) = self {
            // Driver detail stays on the server side of the boundary.
            Logger::log_stderr(
                Severity::Error,
                "persistence_failure",
                &[("detail", &err.to_string())],
            );
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCoordinates.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Database(StoreError::backend("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_bodies_are_fixed() {
        assert_eq!(
            ErrorResponse::from(&ApiError::InvalidInput).error,
            "Invalid input data"
        );
        assert_eq!(
            ErrorResponse::from(&ApiError::InvalidCoordinates).error,
            "Invalid or missing coordinates"
        );
        // The generic message must not leak the underlying detail.
        let err = ApiError::Database(StoreError::backend("connection refused at 10.0.0.7"));
        assert_eq!(ErrorResponse::from(&err).error, "Database error");
    }
}
