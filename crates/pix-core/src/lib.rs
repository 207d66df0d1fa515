//! # pix-core
//!
//! Core types for 2D raster composition.
//!
//! This crate provides the foundational types used throughout the pix-rs
//! workspace:
//!
//! - [`Rgba`] - 8-bit RGBA color with straight alpha
//! - [`PixelBuffer`] - interleaved RGBA8 image buffer
//! - [`Rect`], [`Region`] - pixel-selection primitives
//! - [`composite`] - OVER / SRC placement of one buffer onto another
//!
//! ## Write Policy
//!
//! All rasterization in the workspace writes through
//! [`PixelBuffer::blend`]: RGB is linearly blended by source alpha and the
//! output alpha is the max of source and destination. Layer stacking uses
//! Porter-Duff OVER from [`composite`] instead.
//!
//! ## Crate Structure
//!
//! pix-core sits at the bottom of the workspace; every other crate
//! depends on it:
//!
//! ```text
//! pix-core (this crate)
//!    ^
//!    |
//!    +-- pix-shapes (anti-aliased rasterizers)
//!    +-- pix-ops (arithmetic, color, transforms, morphology)
//!    +-- pix-io (PNG boundary)
//!    +-- pix-canvas (layer chain API)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod composite;
pub mod error;
pub mod pixel;
pub mod rect;
pub mod region;

// Re-exports for convenience
pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::{LUMA_B, LUMA_G, LUMA_R, Rgba};
pub use rect::Rect;
pub use region::Region;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pix_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::composite::{draw_over, draw_src};
    pub use crate::error::{Error, Result};
    pub use crate::pixel::Rgba;
    pub use crate::rect::Rect;
    pub use crate::region::Region;
}
