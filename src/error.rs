//! Error types for marquee
//!
//! Covers every failure the client can hit: bad server URLs, transport
//! failures, non-success HTTP statuses and undecodable suggestion payloads.

use thiserror::Error;

/// Main error type for marquee operations
#[derive(Error, Debug)]
pub enum MarqueeError {
    #[error("Invalid server URL: {0}")]
    InvalidServerUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned HTTP {0}")]
    Status(u16),

    #[error("Malformed suggestion payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for marquee operations
pub type Result<T> = std::result::Result<T, MarqueeError>;

impl MarqueeError {
    /// Check if this error is transient (retrying the same query may succeed)
    pub fn is_transient(&self) -> bool {
        match self {
            MarqueeError::Transport(_) => true,
            MarqueeError::Status(code) => *code >= 500,
            _ => false,
        }
    }
}
