//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported bit depth or color layout.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Buffer construction failed.
    #[error(transparent)]
    Core(#[from] pix_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
