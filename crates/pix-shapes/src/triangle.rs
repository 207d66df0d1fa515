//! Filled and outlined triangles.

use pix_core::{PixelBuffer, Rgba};
use pix_math::geom::{dist_sq_point_segment, point_in_triangle};

use crate::aa::{coverage_sq, edge_coverage, with_coverage};

fn fpoint(p: (i64, i64)) -> (f64, f64) {
    (p.0 as f64, p.1 as f64)
}

fn bounds(verts: &[(i64, i64)], pad: i64) -> (i64, i64, i64, i64) {
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
    (x0 - pad, y0 - pad, x1 + pad, y1 + pad)
}

/// Fills a triangle with a half-pixel anti-aliased boundary.
pub fn draw_triangle(buf: &mut PixelBuffer, verts: [(i64, i64); 3], color: Rgba) {
    let [a, b, c] = verts;
    let (fa, fb, fc) = (fpoint(a), fpoint(b), fpoint(c));
    let (x0, y0, x1, y1) = bounds(&verts, 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            if !buf.contains(x, y) {
                continue;
            }
            let p = (x as f64, y as f64);
            let cov = if point_in_triangle(p, fa, fb, fc) {
                1.0
            } else {
                let d_sq = dist_sq_point_segment(p, fa, fb)
                    .min(dist_sq_point_segment(p, fb, fc))
                    .min(dist_sq_point_segment(p, fc, fa));
                edge_coverage(d_sq.sqrt())
            };
            if cov > 0.0 {
                buf.blend(x, y, with_coverage(color, cov));
            }
        }
    }
}

/// Strokes a triangle outline.
///
/// Coverage is the max over the three edge bands, which rounds the
/// vertex joins. A stroke wide enough to swallow the incircle degrades
/// to a filled triangle.
pub fn draw_triangle_outline(
    buf: &mut PixelBuffer,
    verts: [(i64, i64); 3],
    width: u32,
    color: Rgba,
) {
    let [a, b, c] = verts;
    let (fa, fb, fc) = (fpoint(a), fpoint(b), fpoint(c));
    let hw = width.max(1) as f64 / 2.0;

    let area2 = ((fb.0 - fa.0) * (fc.1 - fa.1) - (fb.1 - fa.1) * (fc.0 - fa.0)).abs();
    let perimeter = dist(fa, fb) + dist(fb, fc) + dist(fc, fa);
    if perimeter > 0.0 && hw >= area2 / perimeter {
        // Incircle swallowed by the stroke.
        draw_triangle(buf, verts, color);
        return;
    }

    let pad = hw.ceil() as i64 + 1;
    let (x0, y0, x1, y1) = bounds(&verts, pad);
    for y in y0..=y1 {
        for x in x0..=x1 {
            if !buf.contains(x, y) {
                continue;
            }
            let p = (x as f64, y as f64);
            let d_sq = dist_sq_point_segment(p, fa, fb)
                .min(dist_sq_point_segment(p, fb, fc))
                .min(dist_sq_point_segment(p, fc, fa));
            let cov = coverage_sq(d_sq, hw);
            if cov > 0.0 {
                buf.blend(x, y, with_coverage(color, cov));
            }
        }
    }
}

fn dist(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRI: [(i64, i64); 3] = [(2, 2), (26, 2), (2, 26)];

    #[test]
    fn test_fill_interior_and_exterior() {
        let mut buf = PixelBuffer::new(32, 32).unwrap();
        draw_triangle(&mut buf, TRI, Rgba::opaque(0, 0, 255));
        assert_eq!(buf.get(6, 6), Some(Rgba::opaque(0, 0, 255)));
        assert_eq!(buf.get(25, 25), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_fill_boundary_is_covered() {
        let mut buf = PixelBuffer::new(32, 32).unwrap();
        draw_triangle(&mut buf, TRI, Rgba::WHITE);
        // On the vertical edge.
        assert_eq!(buf.get(2, 10).unwrap().a, 255);
    }

    #[test]
    fn test_outline_hollow_center() {
        let mut buf = PixelBuffer::new(32, 32).unwrap();
        draw_triangle_outline(&mut buf, TRI, 2, Rgba::WHITE);
        assert!(buf.get(2, 10).unwrap().a > 0);
        assert_eq!(buf.get(8, 8), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_fat_outline_degrades_to_fill() {
        let mut buf = PixelBuffer::new(16, 16).unwrap();
        draw_triangle_outline(&mut buf, [(2, 2), (12, 2), (2, 12)], 30, Rgba::WHITE);
        // Centroid covered once the stroke swallows the incircle.
        assert!(buf.get(5, 5).unwrap().a > 0);
    }
}
