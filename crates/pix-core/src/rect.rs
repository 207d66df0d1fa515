//! Rectangle type with inclusive corners.
//!
//! # Coordinate System
//!
//! Origin (0, 0) at the top-left corner, X right, Y down. Both corners are
//! inclusive: a rect from (0, 0) to (9, 9) covers 10x10 pixels. Corners
//! are `i64` so rects can describe off-buffer placements; clipping happens
//! at use sites.

/// A rectangle with inclusive min and max corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X of the left edge (inclusive)
    pub x0: i64,
    /// Y of the top edge (inclusive)
    pub y0: i64,
    /// X of the right edge (inclusive)
    pub x1: i64,
    /// Y of the bottom edge (inclusive)
    pub y1: i64,
}

impl Rect {
    /// Creates a rectangle from two corners, normalizing their order.
    #[inline]
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Creates a rectangle from an origin and a size.
    ///
    /// Zero-sized input produces a single-pixel rect at the origin; sizes
    /// are treated as at least 1.
    #[inline]
    pub fn from_size(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self::new(
            x,
            y,
            x + (width.max(1) as i64 - 1),
            y + (height.max(1) as i64 - 1),
        )
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0 + 1) as u32
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        (self.y1 - self.y0 + 1) as u32
    }

    /// Number of pixels covered.
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns `true` when the point lies inside (boundary inclusive).
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Intersection with another rect, or `None` when disjoint.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1.min(other.x1);
        let y1 = self.y1.min(other.y1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(Rect { x0, y0, x1, y1 })
    }

    /// Clips to a `width x height` buffer at the origin, or `None` when
    /// fully outside.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Rect> {
        if width == 0 || height == 0 {
            return None;
        }
        self.intersect(&Rect::new(0, 0, width as i64 - 1, height as i64 - 1))
    }

    /// Smallest rect containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corners() {
        let r = Rect::new(10, 12, 2, 4);
        assert_eq!(r, Rect::new(2, 4, 10, 12));
        assert_eq!(r.width(), 9);
        assert_eq!(r.height(), 9);
    }

    #[test]
    fn test_inclusive_extent() {
        let r = Rect::new(0, 0, 9, 9);
        assert_eq!(r.width(), 10);
        assert_eq!(r.area(), 100);
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 9));
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 20, 20);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 10, 10)));
        let c = Rect::new(11, 0, 20, 10);
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_clip_to_buffer() {
        let r = Rect::new(-5, -5, 3, 3);
        assert_eq!(r.clip_to(8, 8), Some(Rect::new(0, 0, 3, 3)));
        assert_eq!(Rect::new(10, 10, 12, 12).clip_to(8, 8), None);
    }

    #[test]
    fn test_from_size() {
        let r = Rect::from_size(2, 3, 4, 5);
        assert_eq!(r, Rect::new(2, 3, 5, 7));
        // Zero size degrades to one pixel.
        assert_eq!(Rect::from_size(1, 1, 0, 0), Rect::new(1, 1, 1, 1));
    }
}
