//! Unified error handling.
//!
//! Provides a unified `AppError` type that logs errors before responding to
//! the client. Route handlers that can fail return `Result<T>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::StorefrontError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storefront operation failed.
    #[error("Storefront error: {0}")]
    Storefront(#[from] StorefrontError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Request rejected");

        let status = match &self {
            Self::Storefront(StorefrontError::ProductNotFound(_)) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
        };

        let message = match &self {
            Self::Storefront(err) => err.to_string(),
            Self::NotFound(_) => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
