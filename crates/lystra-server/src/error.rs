//! Error types for lystra-server.
//!
//! The HTTP mapping is the whole error-handling story here: unknown
//! list → 404, missing form field → 400, anything else → 500. Nothing
//! is retried or recovered locally.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Result type alias for lystra-server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lystra-server.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error from lystra-core (domain and storage errors).
    #[error(transparent)]
    Core(#[from] lystra_core::Error),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::Core(lystra_core::Error::ListNotFound { .. }) => StatusCode::NOT_FOUND,
            Error::Core(lystra_core::Error::MissingField { .. }) => StatusCode::BAD_REQUEST,
            Error::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn category(&self) -> &'static str {
        match self.status() {
            StatusCode::NOT_FOUND => "not-found",
            StatusCode::BAD_REQUEST => "bad-request",
            _ => "internal",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = serde_json::json!({
            "error": {
                "category": self.category(),
                "message": self.to_string(),
            }
        });
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            serde_json::to_string(&body).unwrap_or_default(),
        )
            .into_response()
    }
}
