//! Error types for the document query pipeline

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for docqa operations
pub type Result<T> = std::result::Result<T, Error>;

/// Document query errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Object is absent from the store
    #[error("Object not found: {0}")]
    NotFound(String),

    /// Object store transport, auth or quota failure
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Inference engine failure
    #[error("Inference error: {0}")]
    Inference(String),

    /// One or more items of a batch failed; the batch itself completed
    #[error("{failed} of {total} batch operations failed")]
    PartialBatchFailure { failed: usize, total: usize },

    /// A file of a multi-file query could not be read, so the query was aborted
    #[error("Error reading file {path}: {reason}")]
    IncompleteContext { path: String, reason: String },

    /// Invalid request input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a storage backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Create an inference error
    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Error::Backend(_) => (StatusCode::BAD_GATEWAY, "storage_error"),
            Error::Inference(_) => (StatusCode::SERVICE_UNAVAILABLE, "inference_error"),
            Error::PartialBatchFailure { .. } => (StatusCode::MULTI_STATUS, "partial_failure"),
            Error::IncompleteContext { .. } => (StatusCode::BAD_GATEWAY, "incomplete_context"),
            Error::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_context_names_path() {
        let err = Error::IncompleteContext {
            path: "docs/b.pdf".to_string(),
            reason: "Object not found: docs/b.pdf".to_string(),
        };
        assert!(err.to_string().contains("docs/b.pdf"));
    }

    #[test]
    fn test_status_mapping() {
        let response = Error::NotFound("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = Error::inference("quota").into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = Error::internal("join failed").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
