//! The canvas chain.
//!
//! [`Canvas`] is a builder over a [`PixelBuffer`] that accumulates
//! errors instead of short-circuiting: every step runs against the
//! latest good buffer, failed steps record their error and change
//! nothing, and finishing the chain (save/encode/into_image) fails with
//! the joined error list if any step failed.
//!
//! # Example
//!
//! ```rust,ignore
//! use pix_canvas::{Canvas, GeometryLayer, Layer};
//! use pix_core::Rgba;
//! use pix_shapes::Shape;
//!
//! Canvas::with_color(256, 256, Rgba::WHITE)
//!     .add_layer(GeometryLayer::new(10, 10).with_shape(Shape::Circle {
//!         center: (50, 50),
//!         radius: 40,
//!         color: Rgba::opaque(200, 30, 30),
//!     }))
//!     .apply(|img| pix_ops::adjust::gray(img))
//!     .save("out.png")?;
//! ```

use std::path::Path;

use pix_core::{PixelBuffer, Rect, Rgba};
use pix_ops::{ArithmeticOp, OpsResult};
use tracing::debug;

use crate::error::{CanvasError, CanvasResult};
use crate::layer::{ImageLayer, Layer};

/// A chainable image under construction.
#[derive(Debug)]
pub struct Canvas {
    buf: PixelBuffer,
    errors: Vec<CanvasError>,
}

impl Canvas {
    fn from_result(result: Result<PixelBuffer, CanvasError>) -> Self {
        match result {
            Ok(buf) => Self {
                buf,
                errors: Vec::new(),
            },
            Err(e) => Self {
                buf: PixelBuffer::single(Rgba::TRANSPARENT),
                errors: vec![e],
            },
        }
    }

    /// A transparent canvas. Invalid dimensions are recorded as a chain
    /// error rather than panicking.
    pub fn blank(width: u32, height: u32) -> Self {
        Self::from_result(PixelBuffer::new(width, height).map_err(CanvasError::Core))
    }

    /// A solid-color canvas.
    pub fn with_color(width: u32, height: u32, color: Rgba) -> Self {
        Self::from_result(PixelBuffer::filled(width, height, color).map_err(CanvasError::Core))
    }

    /// A canvas over an existing image.
    pub fn from_image(buf: PixelBuffer) -> Self {
        Self {
            buf,
            errors: Vec::new(),
        }
    }

    /// A canvas cropped out of an existing image on construction.
    pub fn from_region_of(buf: &PixelBuffer, rect: Rect) -> Self {
        Self::from_result(buf.sub_image(rect).map_err(CanvasError::Core))
    }

    /// A canvas holding `buf` resized to `width x height`.
    pub fn scaled_from(buf: &PixelBuffer, width: u32, height: u32) -> Self {
        Self::from_result(
            pix_ops::resize::resize(buf, width, height, pix_ops::Filter::Bilinear)
                .map_err(CanvasError::Ops),
        )
    }

    /// Runs an operation against the current buffer.
    ///
    /// On failure the error is recorded and the buffer stays as it was;
    /// the chain continues either way.
    pub fn apply(mut self, op: impl FnOnce(&PixelBuffer) -> OpsResult<PixelBuffer>) -> Self {
        match op(&self.buf) {
            Ok(next) => self.buf = next,
            Err(e) => {
                debug!(error = %e, "chain step failed");
                self.errors.push(e.into());
            }
        }
        self
    }

    /// Composites a layer onto the canvas.
    pub fn add_layer(mut self, layer: impl Into<Layer>) -> Self {
        let layer = layer.into();
        if let Err(e) = layer.composite(&mut self.buf) {
            debug!(error = %e, "layer composite failed");
            self.errors.push(e.into());
        }
        self
    }

    /// Combines an image layer into the canvas arithmetically over the
    /// overlap at the layer's offset.
    pub fn add_layer_op(self, op: ArithmeticOp, layer: &ImageLayer) -> Self {
        let (x, y) = (layer.x0, layer.y0);
        let buffer = layer.buffer.clone();
        self.apply(move |img| op.apply(img, &buffer, x, y))
    }

    /// Errors recorded so far, in chain order.
    pub fn errors(&self) -> &[CanvasError] {
        &self.errors
    }

    /// `true` when any step has failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The current buffer, regardless of recorded errors.
    pub fn image(&self) -> &PixelBuffer {
        &self.buf
    }

    fn check(&self) -> CanvasResult<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let joined = self
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Err(CanvasError::Accumulated {
            count: self.errors.len(),
            joined,
        })
    }

    /// Finishes the chain, returning the buffer.
    ///
    /// # Errors
    ///
    /// Fails with [`CanvasError::Accumulated`] when any step failed.
    pub fn into_image(self) -> CanvasResult<PixelBuffer> {
        self.check()?;
        Ok(self.buf)
    }

    /// Finishes the chain into in-memory PNG bytes.
    pub fn encode(&self) -> CanvasResult<Vec<u8>> {
        self.check()?;
        Ok(pix_io::png::encode(&self.buf)?)
    }

    /// Finishes the chain into a PNG file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CanvasResult<()> {
        self.check()?;
        Ok(pix_io::png::write(path, &self.buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::GeometryLayer;
    use pix_ops::OpsError;
    use pix_shapes::Shape;

    #[test]
    fn test_blank_and_color_constructors() {
        let c = Canvas::blank(16, 8);
        assert!(!c.has_errors());
        assert_eq!(c.image().dimensions(), (16, 8));

        let c = Canvas::with_color(4, 4, Rgba::opaque(9, 9, 9));
        assert_eq!(c.image().get(2, 2), Some(Rgba::opaque(9, 9, 9)));
    }

    #[test]
    fn test_invalid_constructor_accumulates() {
        let c = Canvas::blank(0, 10);
        assert!(c.has_errors());
        // Chain keeps going without panicking.
        let c = c.apply(|img| pix_ops::adjust::gray(img));
        assert_eq!(c.errors().len(), 1);
        assert!(c.save("/tmp/should-not-exist.png").is_err());
    }

    #[test]
    fn test_failed_step_leaves_buffer() {
        let c = Canvas::with_color(4, 4, Rgba::WHITE)
            .apply(|img| pix_ops::adjust::contrast(img, 9999.0))
            .apply(|img| pix_ops::adjust::brightness(img, -55));
        // First step failed, second still applied to the white buffer.
        assert_eq!(c.errors().len(), 1);
        assert_eq!(c.image().get(0, 0), Some(Rgba::opaque(200, 200, 200)));
        assert!(matches!(c.into_image(), Err(CanvasError::Accumulated { count: 1, .. })));
    }

    #[test]
    fn test_errors_join_in_order() {
        let c = Canvas::blank(4, 4)
            .apply(|_| Err(OpsError::InvalidParameter("first".into())))
            .apply(|_| Err(OpsError::InvalidParameter("second".into())));
        let err = c.into_image().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("2 error(s)"));
        let first = msg.find("first").unwrap();
        let second = msg.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_layers_and_ops_chain() {
        let img = Canvas::with_color(32, 32, Rgba::BLACK)
            .add_layer(GeometryLayer::new(0, 0).with_shape(Shape::Circle {
                center: (16, 16),
                radius: 10,
                color: Rgba::WHITE,
            }))
            .apply(|img| pix_ops::adjust::binary(img))
            .into_image()
            .unwrap();
        assert_eq!(img.get(16, 16), Some(Rgba::WHITE));
        assert_eq!(img.get(0, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_add_layer_op_overlap() {
        let layer = ImageLayer::new(PixelBuffer::filled(2, 2, Rgba::WHITE).unwrap(), 1, 1);
        let img = Canvas::with_color(4, 4, Rgba::opaque(100, 100, 100))
            .add_layer_op(ArithmeticOp::Add, &layer)
            .into_image()
            .unwrap();
        assert_eq!(img.get(1, 1), Some(Rgba::opaque(177, 177, 177)));
        assert_eq!(img.get(0, 0), Some(Rgba::opaque(100, 100, 100)));
    }

    #[test]
    fn test_from_region_of() {
        let mut src = PixelBuffer::new(8, 8).unwrap();
        src.set(5, 5, Rgba::WHITE);
        let c = Canvas::from_region_of(&src, Rect::new(4, 4, 7, 7));
        assert_eq!(c.image().dimensions(), (4, 4));
        assert_eq!(c.image().get(1, 1), Some(Rgba::WHITE));
    }

    #[test]
    fn test_save_and_encode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canvas.png");
        let c = Canvas::with_color(6, 6, Rgba::opaque(1, 2, 3));
        c.save(&path).unwrap();
        let bytes = c.encode().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let back = pix_io::png::read(&path).unwrap();
        assert_eq!(back, *c.image());
    }
}
