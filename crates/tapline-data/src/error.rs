//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to the remote collaborators.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP error response.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Connection-level failure.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Json(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        let url = e
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        if e.is_timeout() {
            FetchError::Timeout(url)
        } else if e.is_builder() {
            FetchError::InvalidUrl(url)
        } else {
            FetchError::Connection(e.to_string())
        }
    }
}
