//! Error types for index server fetches.

use thiserror::Error;

/// Errors that can occur while fetching from the index server.
///
/// All of these are non-fatal: the resolution path logs them and returns
/// absent. There is no retry; the user re-running the action re-issues the
/// request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server is not running (or not reachable) at the configured address.
    #[error("connection refused for {url}: is the index server running?")]
    ConnectionRefused { url: String },

    /// The entity legitimately has no indexed data.
    #[error("not found: {url}")]
    NotFound { url: String },

    /// Non-success status other than 404.
    #[error("server returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Any other transport or protocol failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body arrived but did not parse as the expected JSON shape.
    #[error("malformed response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    /// True when the entity simply isn't in the index.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}
