//! Error types for pix-core operations.
//!
//! The [`Error`] enum covers the failure modes of buffer construction and
//! region handling. Pixel reads and writes outside the buffer never error:
//! reads return `None`, writes are ignored.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or slicing pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid buffer dimensions.
    ///
    /// Returned when width or height is zero, or dimensions would overflow
    /// the byte-length calculation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Raw byte slice does not match `width * height * 4`.
    #[error("buffer length {got} does not match {width}x{height} RGBA ({expected} bytes)")]
    LengthMismatch {
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
        /// Expected byte length
        expected: usize,
        /// Actual byte length
        got: usize,
    },

    /// Region is degenerate (empty rect, no vertices, non-positive radius).
    #[error("invalid region: {0}")]
    InvalidRegion(String),
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(msg: impl Into<String>) -> Self {
        Self::InvalidRegion(msg.into())
    }
}
