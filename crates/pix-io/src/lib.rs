//! # pix-io
//!
//! File-format boundary for the pix-rs workspace.
//!
//! Only PNG is supported: [`png::read`] normalizes any PNG to an 8-bit
//! RGBA [`pix_core::PixelBuffer`], [`png::write`] and [`png::encode`]
//! emit 8-bit RGBA.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod png;

pub use error::{IoError, IoResult};
