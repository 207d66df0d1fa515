//! Error types for canvas chains.

use thiserror::Error;

/// Error type for canvas construction, chaining, and saving.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Error bubbled up from the core buffer types.
    #[error(transparent)]
    Core(#[from] pix_core::Error),

    /// Error from an image operation step.
    #[error(transparent)]
    Ops(#[from] pix_ops::OpsError),

    /// Error from the file boundary.
    #[error(transparent)]
    Io(#[from] pix_io::IoError),

    /// One or more chain steps failed earlier.
    ///
    /// Produced when finishing a chain that accumulated errors; the
    /// message joins every recorded failure in order.
    #[error("canvas chain recorded {count} error(s): {joined}")]
    Accumulated {
        /// Number of failed steps.
        count: usize,
        /// All step errors joined with "; ".
        joined: String,
    },
}

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;
