//! ALEX API error classification.

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::RunError;

/// Errors from the ALEX REST API or the underlying transport.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request's credentials (401/403).
    #[error("credentials rejected: {0}")]
    AuthRejected(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::AuthRejected(body),
            _ => ApiError::Status { status, body },
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<ApiError> for RunError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthRejected(message) => RunError::Authentication(message),
            other => RunError::Network(other.to_string()),
        }
    }
}
