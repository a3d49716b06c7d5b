//! Error types for seo-agent.
//!
//! The extraction, scoring and comparison functions are infallible; these
//! errors only arise at the I/O boundary (fetching, suggestion calls).

/// Error type for analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL was empty or could not be normalized.
    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),

    /// Network or transport failure while fetching a page (includes timeouts).
    #[error("failed to fetch {url}: {message}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Human-readable failure reason.
        message: String,
    },

    /// The server answered with a non-success HTTP status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus {
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The hosted suggestion call failed or its reply could not be parsed.
    #[error("suggestion request failed: {0}")]
    Suggestion(String),

    /// JSON serialization or deserialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
