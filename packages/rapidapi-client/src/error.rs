//! Error types for the RapidAPI client.

use thiserror::Error;

/// Result type for RapidAPI client operations.
pub type Result<T> = std::result::Result<T, RapidApiError>;

/// RapidAPI client errors.
#[derive(Debug, Error)]
pub enum RapidApiError {
    /// Non-2xx response; `body` is the raw upstream error text
    #[error("RapidAPI error {status}: {body}")]
    Api { status: u16, body: String },

    /// Connection failure or undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
