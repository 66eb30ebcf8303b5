//! Error types for the Lystra workspace.

use crate::model::ListId;

/// Errors that can occur while serving list operations.
///
/// All variants are marked `#[non_exhaustive]` to allow adding new
/// error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No list exists with the given identifier.
    #[error("List not found: {id}")]
    ListNotFound {
        /// Identifier that was looked up.
        id: ListId,
    },

    /// A required submission field was absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing form field.
        field: &'static str,
    },

    /// Storage backend error. Not recovered locally; surfaces as a
    /// server error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic.
        message: String,
    },
}

/// Convenience `Result` type alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a list-not-found error.
    pub fn list_not_found(id: ListId) -> Self {
        Error::ListNotFound { id }
    }

    /// Creates a missing-field error for the named form field.
    pub fn missing_field(field: &'static str) -> Self {
        Error::MissingField { field }
    }

    /// Creates a configuration error with a message.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error maps to a client-side (4xx) failure.
    ///
    /// Everything else is treated as a server error.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::ListNotFound { .. } | Error::MissingField { .. }
        )
    }
}
