//! Stroked Bézier curves.
//!
//! Curves are flattened into a dense polyline and stroked by the nearest
//! sampled segment, reusing the line anti-aliasing band. The sample count
//! grows with stroke width so fat strokes stay smooth.

use pix_core::{PixelBuffer, Rgba};
use pix_math::geom::dist_sq_point_segment;

use crate::aa::{coverage_sq, with_coverage};

/// Base number of flattening samples for a quadratic curve.
const BASE_SAMPLES: u32 = 100;

/// Draws a stroked quadratic Bézier through control points `p0..p2`.
pub fn draw_quad_curve(
    buf: &mut PixelBuffer,
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    width: u32,
    color: Rgba,
) {
    let n = BASE_SAMPLES + width * 2;
    let samples: Vec<(f64, f64)> = (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let u = 1.0 - t;
            (
                u * u * p0.0 + 2.0 * u * t * p1.0 + t * t * p2.0,
                u * u * p0.1 + 2.0 * u * t * p1.1 + t * t * p2.1,
            )
        })
        .collect();
    stroke_polyline(buf, &samples, width, color);
}

/// Draws a stroked cubic Bézier through control points `p0..p3`.
///
/// Cubics flatten at twice the quadratic sample density.
pub fn draw_cubic_curve(
    buf: &mut PixelBuffer,
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    width: u32,
    color: Rgba,
) {
    let n = (BASE_SAMPLES + width * 2) * 2;
    let samples: Vec<(f64, f64)> = (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let u = 1.0 - t;
            let b0 = u * u * u;
            let b1 = 3.0 * u * u * t;
            let b2 = 3.0 * u * t * t;
            let b3 = t * t * t;
            (
                b0 * p0.0 + b1 * p1.0 + b2 * p2.0 + b3 * p3.0,
                b0 * p0.1 + b1 * p1.1 + b2 * p2.1 + b3 * p3.1,
            )
        })
        .collect();
    stroke_polyline(buf, &samples, width, color);
}

/// Strokes a polyline by per-pixel distance to the nearest segment.
///
/// Taking the minimum distance over all segments (rather than drawing
/// each segment separately) avoids double-blended seams at the joints.
fn stroke_polyline(buf: &mut PixelBuffer, samples: &[(f64, f64)], width: u32, color: Rgba) {
    if samples.len() < 2 {
        return;
    }
    let hw = width.max(1) as f64 / 2.0;
    let pad = hw + 1.5;
    let x_min = samples.iter().map(|p| p.0).fold(f64::MAX, f64::min) - pad;
    let x_max = samples.iter().map(|p| p.0).fold(f64::MIN, f64::max) + pad;
    let y_min = samples.iter().map(|p| p.1).fold(f64::MAX, f64::min) - pad;
    let y_max = samples.iter().map(|p| p.1).fold(f64::MIN, f64::max) + pad;

    for y in (y_min.floor() as i64)..=(y_max.ceil() as i64) {
        for x in (x_min.floor() as i64)..=(x_max.ceil() as i64) {
            if !buf.contains(x, y) {
                continue;
            }
            let p = (x as f64, y as f64);
            let mut best = f64::MAX;
            for pair in samples.windows(2) {
                let d = dist_sq_point_segment(p, pair[0], pair[1]);
                if d < best {
                    best = d;
                }
            }
            let cov = coverage_sq(best, hw);
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
    fn test_quad_passes_near_midpoint() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        draw_quad_curve(&mut buf, (2.0, 30.0), (20.0, 0.0), (38.0, 30.0), 3, Rgba::WHITE);
        // Curve midpoint: (20, 15) for these controls.
        assert!(buf.get(20, 15).unwrap().a > 0);
        // Control point itself is not on the curve.
        assert_eq!(buf.get(20, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_quad_endpoints_covered() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        draw_quad_curve(&mut buf, (2.0, 30.0), (20.0, 0.0), (38.0, 30.0), 3, Rgba::WHITE);
        assert!(buf.get(2, 30).unwrap().a > 0);
        assert!(buf.get(38, 30).unwrap().a > 0);
    }

    #[test]
    fn test_cubic_s_shape() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        draw_cubic_curve(
            &mut buf,
            (2.0, 2.0),
            (38.0, 2.0),
            (2.0, 38.0),
            (38.0, 38.0),
            2,
            Rgba::WHITE,
        );
        // The S crosses the center.
        assert!(buf.get(20, 20).unwrap().a > 0);
        assert!(buf.get(2, 2).unwrap().a > 0);
        assert!(buf.get(38, 38).unwrap().a > 0);
    }

    #[test]
    fn test_degenerate_curve_is_dot() {
        let mut buf = PixelBuffer::new(16, 16).unwrap();
        draw_quad_curve(&mut buf, (8.0, 8.0), (8.0, 8.0), (8.0, 8.0), 2, Rgba::WHITE);
        assert!(buf.get(8, 8).unwrap().a > 0);
    }
}
