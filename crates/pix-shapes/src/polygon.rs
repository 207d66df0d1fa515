//! Filled and outlined polygons.
//!
//! Fill membership uses ray casting with the even-odd rule, so
//! self-intersecting inputs produce the even-odd fill rather than a
//! nonzero-winding fill.

use pix_core::{PixelBuffer, Rgba};
use pix_math::geom::{dist_sq_point_segment, point_in_polygon};

use crate::aa::{coverage_sq, edge_coverage, with_coverage};

fn to_f64(verts: &[(i64, i64)]) -> Vec<(f64, f64)> {
    verts.iter().map(|&(x, y)| (x as f64, y as f64)).collect()
}

fn bounds(verts: &[(i64, i64)], pad: i64) -> Option<(i64, i64, i64, i64)> {
    if verts.is_empty() {
        return None;
    }
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
    Some((x0 - pad, y0 - pad, x1 + pad, y1 + pad))
}

fn min_edge_dist_sq(p: (f64, f64), verts: &[(f64, f64)]) -> f64 {
    let n = verts.len();
    let mut best = f64::MAX;
    for i in 0..n {
        let d = dist_sq_point_segment(p, verts[i], verts[(i + 1) % n]);
        if d < best {
            best = d;
        }
    }
    best
}

/// Fills a polygon with a half-pixel anti-aliased boundary.
///
/// Polygons with fewer than 3 vertices draw nothing.
pub fn draw_polygon(buf: &mut PixelBuffer, verts: &[(i64, i64)], color: Rgba) {
    if verts.len() < 3 {
        return;
    }
    let fverts = to_f64(verts);
    let Some((x0, y0, x1, y1)) = bounds(verts, 1) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            if !buf.contains(x, y) {
                continue;
            }
            let p = (x as f64, y as f64);
            let cov = if point_in_polygon(p, &fverts) {
                1.0
            } else {
                edge_coverage(min_edge_dist_sq(p, &fverts).sqrt())
            };
            if cov > 0.0 {
                buf.blend(x, y, with_coverage(color, cov));
            }
        }
    }
}

/// Strokes a polygon outline as the max over its edge bands.
pub fn draw_polygon_outline(buf: &mut PixelBuffer, verts: &[(i64, i64)], width: u32, color: Rgba) {
    if verts.len() < 2 {
        return;
    }
    let fverts = to_f64(verts);
    let hw = width.max(1) as f64 / 2.0;
    let pad = hw.ceil() as i64 + 1;
    let Some((x0, y0, x1, y1)) = bounds(verts, pad) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            if !buf.contains(x, y) {
                continue;
            }
            let p = (x as f64, y as f64);
            let cov = coverage_sq(min_edge_dist_sq(p, &fverts), hw);
            if cov > 0.0 {
                buf.blend(x, y, with_coverage(color, cov));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<(i64, i64)> {
        vec![(4, 4), (20, 4), (20, 20), (4, 20)]
    }

    #[test]
    fn test_fill_square() {
        let mut buf = PixelBuffer::new(28, 28).unwrap();
        draw_polygon(&mut buf, &square(), Rgba::opaque(255, 0, 255));
        assert_eq!(buf.get(12, 12), Some(Rgba::opaque(255, 0, 255)));
        assert_eq!(buf.get(25, 25), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_fill_concave() {
        let l = vec![(0, 0), (20, 0), (20, 10), (10, 10), (10, 20), (0, 20)];
        let mut buf = PixelBuffer::new(24, 24).unwrap();
        draw_polygon(&mut buf, &l, Rgba::WHITE);
        assert_eq!(buf.get(5, 15).unwrap().a, 255);
        assert_eq!(buf.get(16, 16), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_too_few_vertices_noop() {
        let mut buf = PixelBuffer::new(8, 8).unwrap();
        draw_polygon(&mut buf, &[(1, 1), (6, 6)], Rgba::WHITE);
        assert_eq!(buf.get(3, 3), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_outline_hollow() {
        let mut buf = PixelBuffer::new(28, 28).unwrap();
        draw_polygon_outline(&mut buf, &square(), 2, Rgba::WHITE);
        assert!(buf.get(4, 12).unwrap().a > 0);
        assert_eq!(buf.get(12, 12), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_self_intersecting_even_odd() {
        // Bowtie: the crossing region keeps the even-odd rule.
        let bowtie = vec![(0, 0), (20, 20), (20, 0), (0, 20)];
        let mut buf = PixelBuffer::new(24, 24).unwrap();
        draw_polygon(&mut buf, &bowtie, Rgba::WHITE);
        // Left lobe interior is filled.
        assert!(buf.get(5, 10).unwrap().a > 0);
    }
}
