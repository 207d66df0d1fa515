//! # pix-ops
//!
//! Image processing operations over [`pix_core::PixelBuffer`].
//!
//! # Operations
//!
//! - [`arithmetic`] - per-pixel add/subtract/multiply/divide and bitwise
//!   combination of two buffers
//! - [`adjust`] - grayscale, threshold, brightness, contrast, hue,
//!   saturation, levels, gamma, exposure, color temperature
//! - [`filter`] - Gaussian blur, denoise, Laplacian sharpen
//! - [`transform`] - rotation, rigid motion, affine and perspective warps
//! - [`resize`] - separable resampling with selectable kernels
//! - [`region`] - crop and mosaic over shaped regions
//! - [`morphology`] - erode/dilate/open/close and Zhang-Suen thinning
//!
//! All operations are pure: they never mutate their inputs and return a
//! fresh buffer (or a typed [`OpsError`]).
//!
//! # Feature Flags
//!
//! - `parallel` - row-parallel execution via rayon (enabled by default).
//!   Results are identical with or without it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adjust;
pub mod arithmetic;
pub mod error;
pub mod filter;
pub mod morphology;
mod parallel;
pub mod region;
pub mod resize;
pub mod transform;

pub use arithmetic::{ArithmeticOp, SubtractMode, bit_not};
pub use error::{OpsError, OpsResult};
pub use resize::Filter;
pub use transform::{Background, Sampling, WarpOptions};
