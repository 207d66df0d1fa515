//! Filled ellipses, axis-aligned and rotated.
//!
//! Both paths are scanline fills. The axis-aligned case solves the
//! implicit equation per row in closed form; the rotated case brackets
//! the row crossings by sign change and refines them with bisection.

use pix_core::{PixelBuffer, Rgba};

use crate::aa::with_coverage;

const BISECT_MAX_ITERS: u32 = 100;
const BISECT_TOLERANCE: f64 = 1e-6;

/// Draws a filled ellipse.
///
/// `rx`/`ry` are the semi-axes, `rotation_deg` rotates the ellipse
/// clockwise on screen. Non-positive semi-axes draw nothing.
pub fn draw_ellipse(
    buf: &mut PixelBuffer,
    center: (i64, i64),
    rx: f64,
    ry: f64,
    rotation_deg: f64,
    color: Rgba,
) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let theta = rotation_deg.to_radians();
    if theta.sin().abs() < 1e-9 {
        draw_axis_aligned(buf, center, rx, ry, color);
    } else {
        draw_rotated(buf, center, rx, ry, theta, color);
    }
}

fn draw_axis_aligned(buf: &mut PixelBuffer, center: (i64, i64), rx: f64, ry: f64, color: Rgba) {
    let (cx, cy) = (center.0 as f64, center.1 as f64);
    let y0 = (cy - ry).floor() as i64;
    let y1 = (cy + ry).ceil() as i64;
    for y in y0..=y1 {
        let dy = (y as f64 - cy) / ry;
        if dy.abs() > 1.0 {
            continue;
        }
        let half = rx * (1.0 - dy * dy).sqrt();
        fill_span(buf, y, cx - half, cx + half, color);
    }
}

fn draw_rotated(
    buf: &mut PixelBuffer,
    center: (i64, i64),
    rx: f64,
    ry: f64,
    theta: f64,
    color: Rgba,
) {
    let (cx, cy) = (center.0 as f64, center.1 as f64);
    let (sin_t, cos_t) = theta.sin_cos();
    // Tight rotated bounding box half-extents.
    let ex = ((rx * cos_t).powi(2) + (ry * sin_t).powi(2)).sqrt();
    let ey = ((rx * sin_t).powi(2) + (ry * cos_t).powi(2)).sqrt();

    let implicit = |x: f64, y: f64| {
        let u = cos_t * (x - cx) + sin_t * (y - cy);
        let v = -sin_t * (x - cx) + cos_t * (y - cy);
        (u / rx).powi(2) + (v / ry).powi(2) - 1.0
    };

    let y0 = (cy - ey).floor() as i64;
    let y1 = (cy + ey).ceil() as i64;
    let x_lo = cx - ex - 1.0;
    let x_hi = cx + ex + 1.0;
    for y in y0..=y1 {
        let fy = y as f64;
        // Bracket sign changes along the row, then bisect each bracket.
        let mut crossings: Vec<f64> = Vec::with_capacity(2);
        let mut prev_x = x_lo;
        let mut prev_f = implicit(prev_x, fy);
        let mut x = x_lo + 1.0;
        while x <= x_hi {
            let f = implicit(x, fy);
            if (prev_f < 0.0) != (f < 0.0) {
                crossings.push(bisect(|t| implicit(t, fy), prev_x, x));
            }
            prev_x = x;
            prev_f = f;
            x += 1.0;
        }
        for pair in crossings.chunks_exact(2) {
            fill_span(buf, y, pair[0], pair[1], color);
        }
    }
}

/// Bisection root refinement on a bracketed sign change.
fn bisect(f: impl Fn(f64) -> f64, mut lo: f64, mut hi: f64) -> f64 {
    let mut f_lo = f(lo);
    for _ in 0..BISECT_MAX_ITERS {
        if hi - lo < BISECT_TOLERANCE {
            break;
        }
        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid);
        if (f_lo < 0.0) == (f_mid < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}

/// Fills the horizontal span `[xl, xr]` on row `y`, with fractional
/// coverage where a pixel only partially overlaps the span.
pub(crate) fn fill_span(buf: &mut PixelBuffer, y: i64, xl: f64, xr: f64, color: Rgba) {
    if xr < xl {
        return;
    }
    let first = (xl - 0.5).floor() as i64;
    let last = (xr + 0.5).ceil() as i64;
    for x in first..=last {
        let overlap = (x as f64 + 0.5).min(xr) - (x as f64 - 0.5).max(xl);
        let cov = overlap.clamp(0.0, 1.0);
        if cov > 0.0 {
            buf.blend(x, y, with_coverage(color, cov));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_aligned_interior() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        draw_ellipse(&mut buf, (20, 20), 12.0, 6.0, 0.0, Rgba::WHITE);
        assert_eq!(buf.get(20, 20).unwrap().a, 255);
        assert_eq!(buf.get(30, 20).unwrap().a, 255); // inside on the long axis
        assert_eq!(buf.get(20, 12), Some(Rgba::TRANSPARENT)); // beyond the short axis
    }

    #[test]
    fn test_axis_aligned_edges_partial() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        draw_ellipse(&mut buf, (20, 20), 10.2, 5.5, 0.0, Rgba::WHITE);
        // Span end at x = 30.2: pixel 30 is partially covered.
        let a = buf.get(30, 20).unwrap().a;
        assert!(a > 0 && a < 255, "alpha was {a}");
    }

    #[test]
    fn test_rotated_90_swaps_axes() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        draw_ellipse(&mut buf, (20, 20), 12.0, 6.0, 90.0, Rgba::WHITE);
        // Long axis now vertical.
        assert_eq!(buf.get(20, 30).unwrap().a, 255);
        assert_eq!(buf.get(30, 20), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_rotated_45_contains_center() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        draw_ellipse(&mut buf, (20, 20), 14.0, 4.0, 45.0, Rgba::WHITE);
        assert_eq!(buf.get(20, 20).unwrap().a, 255);
        // Along the rotated long axis.
        assert!(buf.get(26, 26).unwrap().a > 0);
        // Perpendicular direction is outside.
        assert_eq!(buf.get(29, 11), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_degenerate_axes_noop() {
        let mut buf = PixelBuffer::new(16, 16).unwrap();
        draw_ellipse(&mut buf, (8, 8), 0.0, 5.0, 0.0, Rgba::WHITE);
        assert_eq!(buf.get(8, 8), Some(Rgba::TRANSPARENT));
    }
}
