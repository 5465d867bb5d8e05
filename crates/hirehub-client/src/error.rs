//! Client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Authorization failed and could not be recovered by a token refresh.
    /// Carries the message from the original 401 body, never the refresh
    /// exchange's error.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Application-level failure passed through from the backend.
    #[error("request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("request cancelled")]
    Cancelled,

    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }
}
