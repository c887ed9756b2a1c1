//! Error types for the upstream music API client.

use thiserror::Error;

/// Errors that can occur when talking to the upstream music API.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("Provider error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Invalid endpoint URL
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),

    /// Provider response was not the expected JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
