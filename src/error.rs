/// Error types for directory reads and file staging
use thiserror::Error;

/// Errors that can occur while reading the region directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Transport failure (DNS, connect, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// Directory answered with a non-success status
    #[error("Directory returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Body was not the expected JSON array
    #[error("Failed to decode directory response: {0}")]
    Decode(String),
}

/// Errors raised while loading files for staging
#[derive(Debug, Error)]
pub enum StagingError {
    /// Reading the file from disk failed
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The path does not point at a regular file
    #[error("Not a file: {0}")]
    NotAFile(String),
}
