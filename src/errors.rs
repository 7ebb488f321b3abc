//! Error types for meeting_digest
//!
//! Degenerate input (empty text, odd option values) is never an error; it
//! produces empty output or clamped options. Errors are reserved for inputs
//! the pipeline cannot interpret at all.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DigestError>;

/// Errors raised by the digest pipeline and its configuration layer
#[derive(Debug, Error)]
pub enum DigestError {
    /// No transcript was supplied
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Options or lexicon failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A subtitle format or MIME type string was not recognised
    #[error("unknown transcript format: {0}")]
    UnknownFormat(String),

    /// Binary media must be transcribed before it reaches this crate
    #[error("unsupported media type `{0}`: transcribe audio/video before summarizing")]
    UnsupportedMedia(String),

    /// A custom cue pattern did not compile
    #[error("invalid cue pattern for `{category}`: {source}")]
    InvalidPattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl DigestError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        DigestError::InvalidInput(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        DigestError::InvalidConfig(msg.into())
    }

    pub fn unknown_format(value: impl Into<String>) -> Self {
        DigestError::UnknownFormat(value.into())
    }
}
