//! Error types for the Studeo agent

use thiserror::Error;

/// Result type alias for Studeo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Studeo agent
#[derive(Debug, Error)]
pub enum Error {
    /// Compression credential is not configured; no request is attempted
    #[error("compression credential is not configured")]
    MissingCredential,

    /// Document could not be opened or parsed
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Compression endpoint answered with a non-success status
    #[error("compression service error {status}: {body}")]
    CompressionHttp {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Raw response body, kept as diagnostic text
        body: String,
    },

    /// Network or response-decoding failure talking to the compression service
    #[error("error connecting to compression service: {0}")]
    CompressionTransport(String),

    /// Cache slot could not be written
    #[error("cache error: {0}")]
    Cache(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
