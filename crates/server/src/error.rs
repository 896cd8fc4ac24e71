//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::CatalogError;
use crate::transport::FieldError;

/// Machine-distinguishable domain error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ProductNotFound,
    CategoryNotFound,
}

impl ErrorCode {
    /// The wire code for this error.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
        }
    }

    /// The fixed human-readable message for this error.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ProductNotFound => "product not found",
            Self::CategoryNotFound => "category not found",
        }
    }
}

/// Application-level error type for the catalog API.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required entity lookup missed.
    #[error("{}", .0.message())]
    NotFound(ErrorCode),

    /// A store constraint rejected the operation.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Request validation failed.
    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(RepositoryError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(code) => Self::NotFound(code),
            CatalogError::Store(RepositoryError::Conflict(message)) => Self::Conflict(message),
            CatalogError::Store(e) => Self::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let body = match &self {
            Self::NotFound(code) => json!({
                "code": code.code(),
                "message": code.message(),
            }),
            Self::Conflict(message) => json!({
                "code": "CONFLICT",
                "message": message,
            }),
            Self::Validation(errors) => json!({
                "code": "VALIDATION_FAILED",
                "message": "request validation failed",
                "errors": errors,
            }),
            Self::BadRequest(message) => json!({
                "code": "BAD_REQUEST",
                "message": message,
            }),
            Self::Database(_) | Self::Internal(_) => json!({
                "code": "INTERNAL",
                "message": "internal server error",
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::ProductNotFound.code(), "PRODUCT_NOT_FOUND");
        assert_eq!(ErrorCode::CategoryNotFound.code(), "CATEGORY_NOT_FOUND");
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound(ErrorCode::ProductNotFound);
        assert_eq!(err.to_string(), "product not found");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound(ErrorCode::CategoryNotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Conflict("duplicate".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Validation(Vec::new())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_catalog_error_conversion() {
        let err = AppError::from(CatalogError::NotFound(ErrorCode::ProductNotFound));
        assert!(matches!(err, AppError::NotFound(ErrorCode::ProductNotFound)));

        let err = AppError::from(CatalogError::Store(RepositoryError::Conflict(
            "category name already exists".to_string(),
        )));
        assert!(matches!(err, AppError::Conflict(_)));

        let err = AppError::from(CatalogError::Store(RepositoryError::NotFound));
        assert!(matches!(err, AppError::Database(_)));
    }
}
