//! Error types for pixel scrambling operations

use thiserror::Error;

/// Result type alias for pixel scrambling operations
pub type Result<T> = std::result::Result<T, ScrambleError>;

/// Error types for pixel scrambling operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrambleError {
    /// Key outside [0, 255] or not an integer
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    /// Buffer with a zero dimension, wrong channel count or wrong length
    #[error("Malformed buffer: {0}")]
    MalformedBuffer(String),
    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    ImageError(String),
}

impl From<image::ImageError> for ScrambleError {
    fn from(err: image::ImageError) -> Self {
        ScrambleError::ImageError(err.to_string())
    }
}
