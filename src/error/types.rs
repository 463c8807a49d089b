/**
 * API Error Types
 *
 * This module defines the error taxonomy for the backend. Every error
 * a handler can return is an `ApiError`; the route boundary converts
 * it to an HTTP response (see `conversion.rs`).
 *
 * # Error Categories
 *
 * - `AuthenticationFailed` - missing or invalid credential
 * - `InvalidInput` - request body failed validation, rejected before
 *   any write is attempted
 * - `NotFound` - resource does not exist or belongs to another user
 * - `StorageWriteFailed` - any database read/write error
 * - `CredentialIssuanceFailed` - upload credential signing error
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error taxonomy
///
/// Each variant maps to one HTTP status code and a generic client
/// message. Internal detail (the wrapped `sqlx::Error`, signing error
/// text) is logged but never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential, or the credential failed verification
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Request body failed validation
    #[error("invalid input for {field}: {message}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// What was wrong with it
        message: &'static str,
    },

    /// Resource does not exist (or is not visible to the caller)
    #[error("not found")]
    NotFound,

    /// A database read or write failed during a workflow
    #[error("storage operation failed: {0}")]
    StorageWriteFailed(#[from] sqlx::Error),

    /// Computing signed upload parameters failed
    #[error("credential issuance failed: {0}")]
    CredentialIssuanceFailed(String),
}

impl ApiError {
    /// Create a validation error for a request field
    pub fn invalid_input(field: &'static str, message: &'static str) -> Self {
        Self::InvalidInput { field, message }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::StorageWriteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::CredentialIssuanceFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-visible response body
    ///
    /// Authentication and server errors use fixed generic text; only
    /// validation errors echo which field was rejected, since that is
    /// caller-supplied information.
    pub fn client_message(&self) -> String {
        match self {
            Self::AuthenticationFailed => "Unauthenticated!".to_string(),
            Self::InvalidInput { field, message } => format!("Invalid {}: {}", field, message),
            Self::NotFound => "Not found".to_string(),
            Self::StorageWriteFailed(_) | Self::CredentialIssuanceFailed(_) => {
                "Internal server error".to_string()
            }
        }
    }
}
