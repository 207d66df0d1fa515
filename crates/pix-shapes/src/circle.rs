//! Anti-aliased discs and rings.

use pix_core::{PixelBuffer, Rgba};

use crate::aa::{coverage, with_coverage};

/// Draws a filled disc.
///
/// Coverage treats the radius as the band half-width, which gives a full
/// interior with a one-pixel falloff at the rim.
pub fn draw_circle(buf: &mut PixelBuffer, center: (i64, i64), radius: i64, color: Rgba) {
    if radius <= 0 {
        return;
    }
    let r = radius as f64;
    let pad = radius + 1;
    for y in (center.1 - pad)..=(center.1 + pad) {
        for x in (center.0 - pad)..=(center.0 + pad) {
            if !buf.contains(x, y) {
                continue;
            }
            let dx = (x - center.0) as f64;
            let dy = (y - center.1) as f64;
            let cov = coverage((dx * dx + dy * dy).sqrt(), r);
            if cov > 0.0 {
                buf.blend(x, y, with_coverage(color, cov));
            }
        }
    }
}

/// Draws a ring of stroke width `width` whose outer rim sits at `radius`.
///
/// When the stroke consumes the whole disc (inner radius would go
/// negative) the ring degrades to a filled circle.
pub fn draw_ring(buf: &mut PixelBuffer, center: (i64, i64), radius: i64, width: u32, color: Rgba) {
    if radius <= 0 {
        return;
    }
    let w = width.max(1) as f64;
    if radius as f64 - w < 0.0 {
        draw_circle(buf, center, radius, color);
        return;
    }
    let hw = w / 2.0;
    let rc = radius as f64 - hw;
    let pad = radius + 1;
    for y in (center.1 - pad)..=(center.1 + pad) {
        for x in (center.0 - pad)..=(center.0 + pad) {
            if !buf.contains(x, y) {
                continue;
            }
            let dx = (x - center.0) as f64;
            let dy = (y - center.1) as f64;
            let d = (dx * dx + dy * dy).sqrt();
            let cov = coverage((d - rc).abs(), hw);
            if cov > 0.0 {
                buf.blend(x, y, with_coverage(color, cov));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_interior_full() {
        let mut buf = PixelBuffer::new(32, 32).unwrap();
        draw_circle(&mut buf, (16, 16), 10, Rgba::opaque(0, 255, 0));
        assert_eq!(buf.get(16, 16), Some(Rgba::opaque(0, 255, 0)));
        assert_eq!(buf.get(16, 8).unwrap().a, 255);
    }

    #[test]
    fn test_circle_exterior_untouched() {
        let mut buf = PixelBuffer::new(32, 32).unwrap();
        draw_circle(&mut buf, (16, 16), 10, Rgba::WHITE);
        assert_eq!(buf.get(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(buf.get(16, 4), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_circle_rim_partial() {
        let mut buf = PixelBuffer::new(32, 32).unwrap();
        draw_circle(&mut buf, (16, 16), 10, Rgba::WHITE);
        // Exactly on the rim: half coverage.
        let a = buf.get(16, 6).unwrap().a;
        assert!(a > 0 && a < 255, "alpha was {a}");
    }

    #[test]
    fn test_circle_rim_four_point_symmetry() {
        let mut buf = PixelBuffer::new(32, 32).unwrap();
        draw_circle(&mut buf, (16, 16), 10, Rgba::WHITE);
        // The four axis rim points sit at equal distance, so their
        // partial coverage must match exactly.
        let east = buf.get(26, 16).unwrap().a;
        assert_eq!(east, buf.get(6, 16).unwrap().a);
        assert_eq!(east, buf.get(16, 26).unwrap().a);
        assert_eq!(east, buf.get(16, 6).unwrap().a);
        assert!(east > 0 && east < 255, "alpha was {east}");
    }

    #[test]
    fn test_ring_hollow_center() {
        let mut buf = PixelBuffer::new(32, 32).unwrap();
        draw_ring(&mut buf, (16, 16), 12, 3, Rgba::WHITE);
        assert_eq!(buf.get(16, 16), Some(Rgba::TRANSPARENT));
        // Stroke centerline at radius 10.5.
        assert_eq!(buf.get(16, 6).unwrap().a, 255);
    }

    #[test]
    fn test_ring_degrades_to_disc() {
        let mut buf = PixelBuffer::new(16, 16).unwrap();
        draw_ring(&mut buf, (8, 8), 3, 10, Rgba::WHITE);
        assert_eq!(buf.get(8, 8).unwrap().a, 255);
    }

    #[test]
    fn test_nonpositive_radius_noop() {
        let mut buf = PixelBuffer::new(8, 8).unwrap();
        draw_circle(&mut buf, (4, 4), 0, Rgba::WHITE);
        assert_eq!(buf.get(4, 4), Some(Rgba::TRANSPARENT));
    }
}
