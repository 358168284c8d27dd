//! Error types for the probe CLI
//!
//! Authentication errors abort the whole run; everything else is scoped to
//! the probe that produced it.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the probe CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Authentication Errors ===
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    // === HTTP Errors ===
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned status {status}")]
    HttpStatus { status: u16, body: String },
}

impl Error {
    /// Create a transport error for a failed request
    pub fn transport(endpoint: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.to_string(),
            source,
        }
    }

    /// Create an HTTP status error from a non-200 response
    pub fn http_status(status: u16, body: String) -> Self {
        Self::HttpStatus { status, body }
    }
}
