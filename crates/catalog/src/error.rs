//! Error types for the catalog engine.

use thiserror::Error;

/// Errors that can occur when talking to the ornaments API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (network, timeout, connection).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("API returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body for diagnostics.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The configured API base URL is not a valid URL.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl CatalogError {
    /// Whether a retry with backoff is worth attempting.
    ///
    /// Network-level failures and 5xx responses are transient; 4xx and
    /// malformed payloads are terminal.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Parse(_) | Self::NotFound(_) | Self::InvalidUrl(_) => false,
        }
    }
}
