//! Scanline polygon fill, sectors, and stars.
//!
//! The scanline filler walks an edge table per row: every non-horizontal
//! edge spanning the row contributes one crossing, crossings are sorted,
//! and even-odd pairs become filled spans. Sectors and stars are
//! polygonal approximations fed through the same filler, with arcs
//! chorded at no more than 10 degrees per segment.

use pix_core::{PixelBuffer, Rgba};

use crate::circle::draw_circle;
use crate::ellipse::fill_span;

/// Max arc step when chording a curve into polygon edges.
const MAX_ARC_STEP_DEG: f64 = 10.0;

/// Fills an arbitrary polygon given as `f64` vertices, even-odd rule.
///
/// Horizontal edges are skipped; the half-open row test on each edge
/// keeps shared vertices from double-counting.
pub(crate) fn scanline_fill(buf: &mut PixelBuffer, verts: &[(f64, f64)], color: Rgba) {
    let n = verts.len();
    if n < 3 {
        return;
    }
    let y_min = verts.iter().map(|v| v.1).fold(f64::MAX, f64::min);
    let y_max = verts.iter().map(|v| v.1).fold(f64::MIN, f64::max);

    let mut crossings: Vec<f64> = Vec::new();
    for y in (y_min.floor() as i64)..=(y_max.ceil() as i64) {
        let fy = y as f64;
        crossings.clear();
        for i in 0..n {
            let (x1, y1) = verts[i];
            let (x2, y2) = verts[(i + 1) % n];
            if y1 == y2 {
                continue; // horizontal edge
            }
            let (lo, hi) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
            if fy < lo || fy >= hi {
                continue;
            }
            crossings.push(x1 + (fy - y1) * (x2 - x1) / (y2 - y1));
        }
        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in crossings.chunks_exact(2) {
            fill_span(buf, y, pair[0], pair[1], color);
        }
    }
}

/// Draws a filled pie slice.
///
/// `start_deg` is measured from the positive X axis, increasing
/// clockwise on screen (Y down). A sweep of 360 degrees or more draws
/// the full disc.
pub fn draw_sector(
    buf: &mut PixelBuffer,
    center: (i64, i64),
    radius: i64,
    start_deg: f64,
    sweep_deg: f64,
    color: Rgba,
) {
    if radius <= 0 || sweep_deg == 0.0 {
        return;
    }
    if sweep_deg.abs() >= 360.0 {
        draw_circle(buf, center, radius, color);
        return;
    }
    let (cx, cy) = (center.0 as f64, center.1 as f64);
    let r = radius as f64;
    let steps = (sweep_deg.abs() / MAX_ARC_STEP_DEG).ceil().max(1.0) as usize;

    let mut verts: Vec<(f64, f64)> = Vec::with_capacity(steps + 2);
    verts.push((cx, cy));
    for i in 0..=steps {
        let a = (start_deg + sweep_deg * i as f64 / steps as f64).to_radians();
        verts.push((cx + r * a.cos(), cy + r * a.sin()));
    }
    scanline_fill(buf, &verts, color);
}

/// Draws a filled star with `points` tips.
///
/// `outer` and `inner` are the tip and valley radii; `rotation_deg`
/// spins the star, with zero putting the first tip straight up. Fewer
/// than 2 points or a non-positive outer radius draws nothing. An inner
/// radius at or above the outer one degrades to the convex polygon of
/// the tips.
pub fn draw_star(
    buf: &mut PixelBuffer,
    center: (i64, i64),
    outer: i64,
    inner: i64,
    points: u32,
    rotation_deg: f64,
    color: Rgba,
) {
    if points < 2 || outer <= 0 {
        return;
    }
    let (cx, cy) = (center.0 as f64, center.1 as f64);
    let r_out = outer as f64;
    let r_in = (inner.max(0) as f64).min(r_out);
    let n = points as usize;

    let mut verts: Vec<(f64, f64)> = Vec::with_capacity(2 * n);
    for i in 0..(2 * n) {
        let r = if i % 2 == 0 { r_out } else { r_in };
        let a = (rotation_deg - 90.0 + 180.0 * i as f64 / n as f64).to_radians();
        verts.push((cx + r * a.cos(), cy + r * a.sin()));
    }
    scanline_fill(buf, &verts, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanline_fills_diamond() {
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        let diamond = [(10.0, 2.0), (18.0, 10.0), (10.0, 18.0), (2.0, 10.0)];
        scanline_fill(&mut buf, &diamond, Rgba::WHITE);
        assert_eq!(buf.get(10, 10).unwrap().a, 255);
        assert_eq!(buf.get(3, 3), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_horizontal_edges_skipped() {
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        let square = [(4.0, 4.0), (15.0, 4.0), (15.0, 15.0), (4.0, 15.0)];
        scanline_fill(&mut buf, &square, Rgba::WHITE);
        assert_eq!(buf.get(10, 10).unwrap().a, 255);
        assert_eq!(buf.get(10, 4).unwrap().a, 255); // top edge row still filled
    }

    #[test]
    fn test_quarter_sector() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        // From +X axis sweeping down-right a quarter turn.
        draw_sector(&mut buf, (20, 20), 15, 0.0, 90.0, Rgba::WHITE);
        assert!(buf.get(27, 27).unwrap().a > 0); // inside the slice
        assert_eq!(buf.get(13, 13), Some(Rgba::TRANSPARENT)); // opposite quadrant
        assert_eq!(buf.get(27, 13), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_full_sweep_is_disc() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        draw_sector(&mut buf, (20, 20), 10, 45.0, 360.0, Rgba::WHITE);
        assert_eq!(buf.get(20, 12).unwrap().a, 255);
        assert_eq!(buf.get(28, 20).unwrap().a, 255);
    }

    #[test]
    fn test_star_tips_and_valleys() {
        let mut buf = PixelBuffer::new(64, 64).unwrap();
        draw_star(&mut buf, (32, 32), 24, 10, 5, 0.0, Rgba::WHITE);
        // Center and the upward tip are filled.
        assert_eq!(buf.get(32, 32).unwrap().a, 255);
        assert!(buf.get(32, 12).unwrap().a > 0);
        // Straight down between two lower tips, outside the valley radius.
        assert_eq!(buf.get(32, 54), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_star_degenerate_inputs() {
        let mut buf = PixelBuffer::new(16, 16).unwrap();
        draw_star(&mut buf, (8, 8), 0, 0, 5, 0.0, Rgba::WHITE);
        draw_star(&mut buf, (8, 8), 6, 2, 1, 0.0, Rgba::WHITE);
        assert_eq!(buf.get(8, 8), Some(Rgba::TRANSPARENT));
    }
}
