//! Canvas layers.
//!
//! A [`Layer`] is something that can be composited onto a canvas at an
//! offset: either a pixel buffer ([`ImageLayer`]) or a batch of shapes
//! rendered onto transparency ([`GeometryLayer`]).

use pix_core::{PixelBuffer, composite::draw_over};
use pix_ops::{Filter, OpsResult, resize::resize};
use pix_shapes::Shape;
use tracing::debug;

/// An image placed at an offset, optionally stretched to a target rect.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayer {
    /// The pixels to composite.
    pub buffer: PixelBuffer,
    /// Left edge on the canvas.
    pub x0: i64,
    /// Top edge on the canvas.
    pub y0: i64,
    /// Right edge (inclusive). Defaults to `x0 + width - 1`.
    pub x1: Option<i64>,
    /// Bottom edge (inclusive). Defaults to `y0 + height - 1`.
    pub y1: Option<i64>,
}

impl ImageLayer {
    /// Creates a layer at `(x, y)` with its natural size.
    pub fn new(buffer: PixelBuffer, x: i64, y: i64) -> Self {
        Self {
            buffer,
            x0: x,
            y0: y,
            x1: None,
            y1: None,
        }
    }

    /// Pins the far corner, stretching the layer on composite.
    pub fn with_extent(mut self, x1: i64, y1: i64) -> Self {
        self.x1 = Some(x1);
        self.y1 = Some(y1);
        self
    }

    /// Applies an operation to the layer buffer before compositing.
    pub fn map(self, op: impl FnOnce(&PixelBuffer) -> OpsResult<PixelBuffer>) -> OpsResult<Self> {
        let buffer = op(&self.buffer)?;
        Ok(Self { buffer, ..self })
    }

    /// The effective inclusive far corner.
    pub fn far_corner(&self) -> (i64, i64) {
        (
            self.x1.unwrap_or(self.x0 + self.buffer.width() as i64 - 1),
            self.y1.unwrap_or(self.y0 + self.buffer.height() as i64 - 1),
        )
    }
}

/// A batch of shapes rendered onto transparency at an offset.
///
/// The scratch buffer auto-sizes to the largest shape extent, so shapes
/// never need a canvas size up front.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryLayer {
    /// Shapes in paint order.
    pub shapes: Vec<Shape>,
    /// Left edge on the canvas.
    pub x0: i64,
    /// Top edge on the canvas.
    pub y0: i64,
}

impl GeometryLayer {
    /// Creates an empty geometry layer at `(x, y)`.
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            shapes: Vec::new(),
            x0: x,
            y0: y,
        }
    }

    /// Adds a shape, builder style.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Size of the scratch buffer needed by [`GeometryLayer::rasterize`].
    pub fn extent(&self) -> (u32, u32) {
        let mut w = 1;
        let mut h = 1;
        for shape in &self.shapes {
            let (sw, sh) = shape.extent();
            w = w.max(sw);
            h = h.max(sh);
        }
        (w, h)
    }

    /// Renders all shapes in order onto a transparent buffer.
    pub fn rasterize(&self) -> OpsResult<PixelBuffer> {
        let (w, h) = self.extent();
        let mut buf = PixelBuffer::new(w, h).map_err(pix_ops::OpsError::Core)?;
        for shape in &self.shapes {
            shape.render(&mut buf);
        }
        Ok(buf)
    }
}

/// Anything a canvas can stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// A pixel buffer at an offset.
    Image(ImageLayer),
    /// Shapes rendered onto transparency.
    Geometry(GeometryLayer),
}

impl Layer {
    /// Composites the layer over `dst`.
    pub fn composite(&self, dst: &mut PixelBuffer) -> OpsResult<()> {
        match self {
            Layer::Image(layer) => {
                debug!(x = layer.x0, y = layer.y0, "composite image layer");
                let (x1, y1) = layer.far_corner();
                let target_w = (x1 - layer.x0 + 1).max(1) as u32;
                let target_h = (y1 - layer.y0 + 1).max(1) as u32;
                if (target_w, target_h) == layer.buffer.dimensions() {
                    draw_over(dst, &layer.buffer, layer.x0, layer.y0);
                } else {
                    let scaled = resize(&layer.buffer, target_w, target_h, Filter::Bilinear)?;
                    draw_over(dst, &scaled, layer.x0, layer.y0);
                }
                Ok(())
            }
            Layer::Geometry(layer) => {
                debug!(
                    shapes = layer.shapes.len(),
                    x = layer.x0,
                    y = layer.y0,
                    "composite geometry layer"
                );
                let scratch = layer.rasterize()?;
                draw_over(dst, &scratch, layer.x0, layer.y0);
                Ok(())
            }
        }
    }
}

impl From<ImageLayer> for Layer {
    fn from(l: ImageLayer) -> Self {
        Layer::Image(l)
    }
}

impl From<GeometryLayer> for Layer {
    fn from(l: GeometryLayer) -> Self {
        Layer::Geometry(l)
    }
}
