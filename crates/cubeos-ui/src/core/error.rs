//! Error types for backend calls.

use thiserror::Error;

/// Failure talking to the console backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The session expired and could not be refreshed.
    #[error("session expired")]
    Unauthorized,
    /// Backend answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body or status line.
        message: String,
    },
    /// Request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),
    /// Response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Message suitable for a store's `error` field.
    ///
    /// Backend-provided messages win; transport-level failures fall back to
    /// the action-specific `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Unauthorized => "Session expired, please sign in again".to_string(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status when the backend responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }
}
