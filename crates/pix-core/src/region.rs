//! Region selection for crop and mosaic operations.
//!
//! A [`Region`] names a set of pixels by shape rather than by mask.
//! Membership is exact per pixel center and boundary points count as
//! inside, so crop followed by re-composite at the same offset is
//! lossless for interior pixels.

use crate::error::{Error, Result};
use crate::rect::Rect;
use pix_math::geom::{point_in_polygon, point_in_triangle};

/// A pixel-selection region.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// Axis-aligned rectangle, inclusive corners.
    Rect(Rect),
    /// Disc around a center.
    Circle {
        /// Center X
        cx: i64,
        /// Center Y
        cy: i64,
        /// Radius in pixels, must be positive
        radius: i64,
    },
    /// Filled triangle, boundary inclusive.
    Triangle([(i64, i64); 3]),
    /// Filled polygon (even-odd rule), boundary inclusive.
    Polygon(Vec<(i64, i64)>),
}

impl Region {
    /// Checks structural validity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] for a non-positive circle radius
    /// or a polygon with fewer than 3 vertices.
    pub fn validate(&self) -> Result<()> {
        match self {
            Region::Rect(_) | Region::Triangle(_) => Ok(()),
            Region::Circle { radius, .. } => {
                if *radius <= 0 {
                    Err(Error::invalid_region(format!(
                        "circle radius must be positive, got {radius}"
                    )))
                } else {
                    Ok(())
                }
            }
            Region::Polygon(verts) => {
                if verts.len() < 3 {
                    Err(Error::invalid_region(format!(
                        "polygon needs at least 3 vertices, got {}",
                        verts.len()
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Returns `true` when the pixel at `(x, y)` belongs to the region.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        match self {
            Region::Rect(r) => r.contains(x, y),
            Region::Circle { cx, cy, radius } => {
                let dx = x - cx;
                let dy = y - cy;
                dx * dx + dy * dy <= radius * radius
            }
            Region::Triangle([a, b, c]) => point_in_triangle(
                (x as f64, y as f64),
                (a.0 as f64, a.1 as f64),
                (b.0 as f64, b.1 as f64),
                (c.0 as f64, c.1 as f64),
            ),
            Region::Polygon(verts) => {
                let pts: Vec<(f64, f64)> =
                    verts.iter().map(|&(vx, vy)| (vx as f64, vy as f64)).collect();
                point_in_polygon((x as f64, y as f64), &pts)
            }
        }
    }

    /// Tight bounding rectangle of the region.
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Region::Rect(r) => *r,
            Region::Circle { cx, cy, radius } => {
                Rect::new(cx - radius, cy - radius, cx + radius, cy + radius)
            }
            Region::Triangle(verts) => bounds_of(verts),
            Region::Polygon(verts) => bounds_of(verts),
        }
    }
}

fn bounds_of(verts: &[(i64, i64)]) -> Rect {
    let mut x0 = i64::MAX;
    let mut y0 = i64::MAX;
    let mut x1 = i64::MIN;
    let mut y1 = i64::MIN;
    for &(x, y) in verts {
        x0 = x0.min(x);
        y0 = y0.min(y);
        x1 = x1.max(x);
        y1 = y1.max(y);
    }
    Rect { x0, y0, x1, y1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_membership() {
        let r = Region::Circle {
            cx: 0,
            cy: 0,
            radius: 5,
        };
        assert!(r.contains(3, 4)); // exactly on the boundary
        assert!(r.contains(0, 0));
        assert!(!r.contains(4, 4));
    }

    #[test]
    fn test_circle_bounds() {
        let r = Region::Circle {
            cx: 10,
            cy: 10,
            radius: 3,
        };
        assert_eq!(r.bounding_rect(), Rect::new(7, 7, 13, 13));
    }

    #[test]
    fn test_triangle_boundary_inside() {
        let r = Region::Triangle([(0, 0), (10, 0), (0, 10)]);
        assert!(r.contains(0, 0));
        assert!(r.contains(5, 5)); // on the hypotenuse
        assert!(r.contains(2, 2));
        assert!(!r.contains(6, 6));
    }

    #[test]
    fn test_polygon_validation() {
        assert!(Region::Polygon(vec![(0, 0), (1, 0)]).validate().is_err());
        assert!(
            Region::Polygon(vec![(0, 0), (4, 0), (4, 4), (0, 4)])
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_degenerate_circle() {
        assert!(
            Region::Circle {
                cx: 0,
                cy: 0,
                radius: 0
            }
            .validate()
            .is_err()
        );
    }
}
