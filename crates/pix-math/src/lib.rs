//! # pix-math
//!
//! Math utilities for 2D raster composition.
//!
//! This crate provides the scalar math the rasterizers and warps are
//! built on:
//!
//! - [`Affine2`] - six-parameter planar affine maps with analytic inverse
//! - [`Mat3`] - 3x3 homographies with cofactor inverse
//! - [`geom`] - point/segment distance, point-in-triangle,
//!   point-in-polygon predicates
//! - [`interp`] - lerp and bilinear weights for resampling
//!
//! # Design
//!
//! Everything is plain `f64`; no SIMD types leak into the API. All matrix
//! operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod affine;
pub mod geom;
pub mod interp;
pub mod mat3;

pub use affine::Affine2;
pub use interp::{bilinear, lerp};
pub use mat3::Mat3;
