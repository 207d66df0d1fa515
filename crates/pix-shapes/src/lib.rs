//! # pix-shapes
//!
//! Anti-aliased shape rasterizers over [`pix_core::PixelBuffer`].
//!
//! The [`Shape`] enum is the drawing vocabulary of the geometry layer:
//! construct shapes as data, then [`Shape::render`] them onto a buffer.
//! Every rasterizer writes through the alpha-max blend policy, and all
//! stroked shapes share the one-pixel analytic anti-aliasing band in
//! [`aa`].
//!
//! # Example
//!
//! ```rust
//! use pix_core::{PixelBuffer, Rgba};
//! use pix_shapes::Shape;
//!
//! let mut buf = PixelBuffer::new(64, 64).unwrap();
//! Shape::Circle {
//!     center: (32, 32),
//!     radius: 20,
//!     color: Rgba::opaque(255, 0, 0),
//! }
//! .render(&mut buf);
//! assert_eq!(buf.get(32, 32), Some(Rgba::opaque(255, 0, 0)));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aa;
pub mod circle;
pub mod curve;
pub mod ellipse;
pub mod line;
pub mod polygon;
pub mod rect;
pub mod scanfill;
pub mod triangle;

use pix_core::{PixelBuffer, Rect, Rgba};
use tracing::debug;

/// A renderable 2D shape.
///
/// Coordinates are pixel positions; strokes take a full width in pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Stroked segment.
    Line {
        /// Start point
        a: (i64, i64),
        /// End point
        b: (i64, i64),
        /// Stroke width in pixels
        width: u32,
        /// Stroke color
        color: Rgba,
    },
    /// Filled axis-aligned rectangle.
    Rect {
        /// Rectangle, inclusive corners
        rect: Rect,
        /// Fill color
        color: Rgba,
    },
    /// Stroked rectangle outline.
    RectOutline {
        /// Rectangle, inclusive corners
        rect: Rect,
        /// Stroke width in pixels
        width: u32,
        /// Stroke color
        color: Rgba,
    },
    /// Filled disc.
    Circle {
        /// Center
        center: (i64, i64),
        /// Radius in pixels
        radius: i64,
        /// Fill color
        color: Rgba,
    },
    /// Stroked ring; degrades to a disc when the stroke swallows it.
    Ring {
        /// Center
        center: (i64, i64),
        /// Outer radius in pixels
        radius: i64,
        /// Stroke width in pixels
        width: u32,
        /// Stroke color
        color: Rgba,
    },
    /// Filled triangle.
    Triangle {
        /// Vertices
        verts: [(i64, i64); 3],
        /// Fill color
        color: Rgba,
    },
    /// Stroked triangle outline.
    TriangleOutline {
        /// Vertices
        verts: [(i64, i64); 3],
        /// Stroke width in pixels
        width: u32,
        /// Stroke color
        color: Rgba,
    },
    /// Filled polygon (even-odd rule).
    Polygon {
        /// Vertices in order
        verts: Vec<(i64, i64)>,
        /// Fill color
        color: Rgba,
    },
    /// Stroked polygon outline.
    PolygonOutline {
        /// Vertices in order
        verts: Vec<(i64, i64)>,
        /// Stroke width in pixels
        width: u32,
        /// Stroke color
        color: Rgba,
    },
    /// Filled ellipse, optionally rotated.
    Ellipse {
        /// Center
        center: (i64, i64),
        /// Semi-axis along X before rotation
        rx: f64,
        /// Semi-axis along Y before rotation
        ry: f64,
        /// Clockwise rotation in degrees
        rotation_deg: f64,
        /// Fill color
        color: Rgba,
    },
    /// Filled pie slice.
    Sector {
        /// Center
        center: (i64, i64),
        /// Radius in pixels
        radius: i64,
        /// Start angle in degrees from +X, clockwise on screen
        start_deg: f64,
        /// Sweep in degrees
        sweep_deg: f64,
        /// Fill color
        color: Rgba,
    },
    /// Filled star.
    Star {
        /// Center
        center: (i64, i64),
        /// Tip radius
        outer: i64,
        /// Valley radius
        inner: i64,
        /// Number of tips
        points: u32,
        /// Rotation in degrees; zero puts the first tip straight up
        rotation_deg: f64,
        /// Fill color
        color: Rgba,
    },
    /// Stroked quadratic Bézier.
    QuadCurve {
        /// Control points: start, control, end
        points: [(f64, f64); 3],
        /// Stroke width in pixels
        width: u32,
        /// Stroke color
        color: Rgba,
    },
    /// Stroked cubic Bézier.
    CubicCurve {
        /// Control points: start, two controls, end
        points: [(f64, f64); 4],
        /// Stroke width in pixels
        width: u32,
        /// Stroke color
        color: Rgba,
    },
}

impl Shape {
    /// Rasterizes the shape onto `buf`.
    pub fn render(&self, buf: &mut PixelBuffer) {
        debug!(shape = self.name(), "render shape");
        match self {
            Shape::Line { a, b, width, color } => line::draw_line(buf, *a, *b, *width, *color),
            Shape::Rect { rect, color } => rect::draw_rect(buf, *rect, *color),
            Shape::RectOutline { rect, width, color } => {
                rect::draw_rect_outline(buf, *rect, *width, *color)
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => circle::draw_circle(buf, *center, *radius, *color),
            Shape::Ring {
                center,
                radius,
                width,
                color,
            } => circle::draw_ring(buf, *center, *radius, *width, *color),
            Shape::Triangle { verts, color } => triangle::draw_triangle(buf, *verts, *color),
            Shape::TriangleOutline {
                verts,
                width,
                color,
            } => triangle::draw_triangle_outline(buf, *verts, *width, *color),
            Shape::Polygon { verts, color } => polygon::draw_polygon(buf, verts, *color),
            Shape::PolygonOutline {
                verts,
                width,
                color,
            } => polygon::draw_polygon_outline(buf, verts, *width, *color),
            Shape::Ellipse {
                center,
                rx,
                ry,
                rotation_deg,
                color,
            } => ellipse::draw_ellipse(buf, *center, *rx, *ry, *rotation_deg, *color),
            Shape::Sector {
                center,
                radius,
                start_deg,
                sweep_deg,
                color,
            } => scanfill::draw_sector(buf, *center, *radius, *start_deg, *sweep_deg, *color),
            Shape::Star {
                center,
                outer,
                inner,
                points,
                rotation_deg,
                color,
            } => scanfill::draw_star(buf, *center, *outer, *inner, *points, *rotation_deg, *color),
            Shape::QuadCurve {
                points,
                width,
                color,
            } => curve::draw_quad_curve(buf, points[0], points[1], points[2], *width, *color),
            Shape::CubicCurve {
                points,
                width,
                color,
            } => curve::draw_cubic_curve(
                buf, points[0], points[1], points[2], points[3], *width, *color,
            ),
        }
    }

    /// The buffer size needed to contain the shape with its AA fringe,
    /// as `(width, height)` measured from the origin.
    pub fn extent(&self) -> (u32, u32) {
        let (max_x, max_y, pad) = match self {
            Shape::Line { a, b, width, .. } => {
                (a.0.max(b.0), a.1.max(b.1), *width as i64 + 2)
            }
            Shape::Rect { rect, .. } => (rect.x1, rect.y1, 1),
            Shape::RectOutline { rect, width, .. } => (rect.x1, rect.y1, *width as i64 + 2),
            Shape::Circle { center, radius, .. } => (center.0 + radius, center.1 + radius, 2),
            Shape::Ring { center, radius, .. } => (center.0 + radius, center.1 + radius, 2),
            Shape::Triangle { verts, .. } => (max_coord(verts, 0), max_coord(verts, 1), 2),
            Shape::TriangleOutline { verts, width, .. } => {
                (max_coord(verts, 0), max_coord(verts, 1), *width as i64 + 2)
            }
            Shape::Polygon { verts, .. } => (max_coord(verts, 0), max_coord(verts, 1), 2),
            Shape::PolygonOutline { verts, width, .. } => {
                (max_coord(verts, 0), max_coord(verts, 1), *width as i64 + 2)
            }
            Shape::Ellipse {
                center, rx, ry, ..
            } => {
                let r = rx.max(*ry).ceil() as i64;
                (center.0 + r, center.1 + r, 2)
            }
            Shape::Sector { center, radius, .. } => (center.0 + radius, center.1 + radius, 2),
            Shape::Star { center, outer, .. } => (center.0 + outer, center.1 + outer, 2),
            Shape::QuadCurve { points, width, .. } => {
                let mx = points.iter().map(|p| p.0).fold(f64::MIN, f64::max);
                let my = points.iter().map(|p| p.1).fold(f64::MIN, f64::max);
                (mx.ceil() as i64, my.ceil() as i64, *width as i64 + 2)
            }
            Shape::CubicCurve { points, width, .. } => {
                let mx = points.iter().map(|p| p.0).fold(f64::MIN, f64::max);
                let my = points.iter().map(|p| p.1).fold(f64::MIN, f64::max);
                (mx.ceil() as i64, my.ceil() as i64, *width as i64 + 2)
            }
        };
        (
            (max_x + pad).max(1) as u32,
            (max_y + pad).max(1) as u32,
        )
    }

    fn name(&self) -> &'static str {
        match self {
            Shape::Line { .. } => "line",
            Shape::Rect { .. } => "rect",
            Shape::RectOutline { .. } => "rect_outline",
            Shape::Circle { .. } => "circle",
            Shape::Ring { .. } => "ring",
            Shape::Triangle { .. } => "triangle",
            Shape::TriangleOutline { .. } => "triangle_outline",
            Shape::Polygon { .. } => "polygon",
            Shape::PolygonOutline { .. } => "polygon_outline",
            Shape::Ellipse { .. } => "ellipse",
            Shape::Sector { .. } => "sector",
            Shape::Star { .. } => "star",
            Shape::QuadCurve { .. } => "quad_curve",
            Shape::CubicCurve { .. } => "cubic_curve",
        }
    }
}

fn max_coord(verts: &[(i64, i64)], axis: usize) -> i64 {
    verts
        .iter()
        .map(|v| if axis == 0 { v.0 } else { v.1 })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_draws() {
        let mut buf = PixelBuffer::new(32, 32).unwrap();
        Shape::Rect {
            rect: Rect::new(4, 4, 27, 27),
            color: Rgba::WHITE,
        }
        .render(&mut buf);
        assert_eq!(buf.get(10, 10).unwrap().a, 255);
    }

    #[test]
    fn test_extent_covers_circle() {
        let s = Shape::Circle {
            center: (30, 20),
            radius: 10,
            color: Rgba::WHITE,
        };
        let (w, h) = s.extent();
        assert!(w >= 41 && h >= 31, "extent was {w}x{h}");
    }

    #[test]
    fn test_extent_polygon() {
        let s = Shape::Polygon {
            verts: vec![(0, 0), (50, 10), (25, 40)],
            color: Rgba::WHITE,
        };
        let (w, h) = s.extent();
        assert!(w >= 51 && h >= 41);
    }

    #[test]
    fn test_render_into_auto_sized_buffer() {
        let s = Shape::Star {
            center: (20, 20),
            outer: 15,
            inner: 6,
            points: 5,
            rotation_deg: 0.0,
            color: Rgba::WHITE,
        };
        let (w, h) = s.extent();
        let mut buf = PixelBuffer::new(w, h).unwrap();
        s.render(&mut buf);
        assert!(buf.get(20, 20).unwrap().a > 0);
    }
}
