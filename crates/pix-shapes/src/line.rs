//! Anti-aliased line segments.

use pix_core::{PixelBuffer, Rgba};
use pix_math::geom::dist_sq_point_segment;

use crate::aa::{coverage_sq, with_coverage};

/// Draws a stroked segment from `a` to `b`.
///
/// `width` is the full stroke width in pixels; coverage comes from the
/// per-pixel distance to the segment. Writes blend with the alpha-max
/// policy, so crossing lines do not darken each other's alpha.
pub fn draw_line(buf: &mut PixelBuffer, a: (i64, i64), b: (i64, i64), width: u32, color: Rgba) {
    let hw = width.max(1) as f64 / 2.0;
    let pad = hw.ceil() as i64 + 1;
    let x0 = a.0.min(b.0) - pad;
    let x1 = a.0.max(b.0) + pad;
    let y0 = a.1.min(b.1) - pad;
    let y1 = a.1.max(b.1) + pad;
    let pa = (a.0 as f64, a.1 as f64);
    let pb = (b.0 as f64, b.1 as f64);
    for y in y0..=y1 {
        for x in x0..=x1 {
            if !buf.contains(x, y) {
                continue;
            }
            let d_sq = dist_sq_point_segment((x as f64, y as f64), pa, pb);
            let cov = coverage_sq(d_sq, hw);
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
    fn test_horizontal_line_center_opaque() {
        let mut buf = PixelBuffer::new(20, 10).unwrap();
        draw_line(&mut buf, (2, 5), (17, 5), 3, Rgba::opaque(255, 0, 0));
        let c = buf.get(10, 5).unwrap();
        assert_eq!(c, Rgba::opaque(255, 0, 0));
        // Far from the stroke: untouched.
        assert_eq!(buf.get(10, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_line_edge_is_partial() {
        let mut buf = PixelBuffer::new(20, 10).unwrap();
        draw_line(&mut buf, (2, 5), (17, 5), 4, Rgba::WHITE);
        // Distance 1 from the centerline, half-width 2 -> full
        assert_eq!(buf.get(10, 4).unwrap().a, 255);
        // Distance 2 sits mid-band -> half coverage
        let edge = buf.get(10, 3).unwrap().a;
        assert!(edge > 0 && edge < 255, "alpha was {edge}");
    }

    #[test]
    fn test_line_clips_to_buffer() {
        let mut buf = PixelBuffer::new(8, 8).unwrap();
        draw_line(&mut buf, (-10, 4), (20, 4), 1, Rgba::WHITE);
        assert_eq!(buf.get(0, 4).unwrap().a, 255);
        assert_eq!(buf.get(7, 4).unwrap().a, 255);
    }

    #[test]
    fn test_degenerate_line_is_dot() {
        let mut buf = PixelBuffer::new(8, 8).unwrap();
        draw_line(&mut buf, (4, 4), (4, 4), 2, Rgba::WHITE);
        assert_eq!(buf.get(4, 4).unwrap().a, 255);
        assert_eq!(buf.get(7, 7), Some(Rgba::TRANSPARENT));
    }
}
