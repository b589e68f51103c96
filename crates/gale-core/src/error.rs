//! Error types for gale-core

use thiserror::Error;

/// Result type alias for gale operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the gale HTTP server
#[derive(Debug, Error)]
pub enum Error {
    /// No recognizable GET request line arrived before the blank line
    #[error("no GET request line found")]
    NoRequest,

    /// A query pair without a key/value delimiter
    #[error("malformed query pair: {pair:?}")]
    MalformedQuery { pair: String },

    /// A required query parameter was absent
    #[error("missing required parameter: {0}")]
    MissingParam(&'static str),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Outbound HTTP request failed
    #[error("fetch error: {0}")]
    Fetch(String),
}
