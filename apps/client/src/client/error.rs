//! Remote API client errors

use thiserror::Error;

/// Error returned by the remote news API client
///
/// Remote failures are passed through as-is; the client never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The requested resource does not exist (404)
    #[error("{0} not found")]
    NotFound(String),

    /// Any other non-success status, 4xx and 5xx alike
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never got a response
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
