//! Error types for Channels DVR lookups
//!
//! Keeps the failure classes the CLI needs to tell apart:
//! connection problems, bad HTTP statuses, and unexpected JSON.

use thiserror::Error;

/// Error type for all Channels DVR lookup operations
#[derive(Error, Debug)]
pub enum DvrError {
    /// Network-level failure: server unreachable, refused, or timed out
    #[error("could not reach the Channels DVR server: {0}")]
    Connection(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("server returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Response body was not JSON of the expected shape
    #[error("unexpected response from {url}: {detail}")]
    Shape { url: String, detail: String },

    /// Query parameters were rejected before any network activity
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Result type alias for Channels DVR lookup operations
pub type Result<T> = std::result::Result<T, DvrError>;
