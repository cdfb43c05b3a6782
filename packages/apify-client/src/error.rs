//! Error types for the Apify client.

use thiserror::Error;

/// Result type for Apify client operations.
pub type Result<T> = std::result::Result<T, ApifyError>;

/// Apify client errors.
#[derive(Debug, Error)]
pub enum ApifyError {
    /// Non-2xx response from the Apify API
    #[error("Apify API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Connection failure or undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApifyError {
    /// Upstream HTTP status, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApifyError::Api { status, .. } => Some(*status),
            ApifyError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
