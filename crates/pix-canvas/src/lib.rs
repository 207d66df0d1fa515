//! # pix-canvas
//!
//! Layered composition over [`pix_core::PixelBuffer`] with a chainable,
//! error-accumulating builder.
//!
//! # Design
//!
//! Chains never short-circuit. Each step of a [`Canvas`] runs against
//! the most recent good buffer; a failed step records its error and is
//! otherwise a no-op. Finishing the chain surfaces every recorded error
//! at once as [`CanvasError::Accumulated`], so a long pipeline reports
//! all of its problems in one pass instead of one per run.
//!
//! # Layers
//!
//! Two layer kinds composite onto a canvas: [`ImageLayer`] places a
//! pixel buffer at an offset (optionally stretched to a pinned extent),
//! and [`GeometryLayer`] rasterizes a batch of [`pix_shapes::Shape`]s
//! onto transparency sized to fit them.
//!
//! # Example
//!
//! ```rust
//! use pix_canvas::{Canvas, GeometryLayer};
//! use pix_core::Rgba;
//! use pix_shapes::Shape;
//!
//! let img = Canvas::with_color(64, 64, Rgba::WHITE)
//!     .add_layer(GeometryLayer::new(0, 0).with_shape(Shape::Circle {
//!         center: (32, 32),
//!         radius: 20,
//!         color: Rgba::opaque(180, 40, 40),
//!     }))
//!     .apply(|img| pix_ops::adjust::gray(img))
//!     .into_image()
//!     .unwrap();
//! assert_eq!(img.dimensions(), (64, 64));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod canvas;
mod error;
mod layer;

pub use canvas::Canvas;
pub use error::{CanvasError, CanvasResult};
pub use layer::{GeometryLayer, ImageLayer, Layer};

pub use pix_shapes::Shape;
