//! Shared analytic anti-aliasing band.
//!
//! Every stroked shape derives pixel coverage from the distance to its
//! ideal edge. The band is one pixel wide, centered on the half-width of
//! the stroke:
//!
//! ```text
//! d < hw - 0.5  -> 1.0
//! d > hw + 0.5  -> 0.0
//! otherwise     -> hw + 0.5 - d
//! ```
//!
//! Callers compare squared distances first and only take the square root
//! inside the band.

use pix_core::Rgba;

/// Coverage in [0, 1] for a pixel at distance `dist` from a stroke
/// centerline of half-width `half_width`.
#[inline]
pub fn coverage(dist: f64, half_width: f64) -> f64 {
    if dist < half_width - 0.5 {
        1.0
    } else if dist > half_width + 0.5 {
        0.0
    } else {
        half_width + 0.5 - dist
    }
}

/// Coverage from a squared distance, deferring the square root to the
/// transition band.
#[inline]
pub fn coverage_sq(dist_sq: f64, half_width: f64) -> f64 {
    let full = half_width - 0.5;
    if full > 0.0 && dist_sq < full * full {
        return 1.0;
    }
    let zero = half_width + 0.5;
    if dist_sq > zero * zero {
        return 0.0;
    }
    coverage(dist_sq.sqrt(), half_width)
}

/// Coverage for a fill boundary: full inside, a half-pixel falloff just
/// outside the edge.
#[inline]
pub fn edge_coverage(dist_outside: f64) -> f64 {
    if dist_outside >= 0.5 {
        0.0
    } else {
        0.5 - dist_outside
    }
}

/// Scales a color's alpha by a coverage fraction.
#[inline]
pub fn with_coverage(color: Rgba, cov: f64) -> Rgba {
    if cov >= 1.0 {
        return color;
    }
    color.with_alpha((color.a as f64 * cov) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_band_edges() {
        assert_relative_eq!(coverage(0.0, 2.0), 1.0);
        assert_relative_eq!(coverage(1.4, 2.0), 1.0);
        assert_relative_eq!(coverage(2.0, 2.0), 0.5);
        assert_relative_eq!(coverage(2.6, 2.0), 0.0);
    }

    #[test]
    fn test_coverage_sq_matches_linear() {
        for d in [0.0, 0.5, 1.0, 1.75, 2.25, 3.0] {
            assert_relative_eq!(coverage_sq(d * d, 2.0), coverage(d, 2.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_with_coverage_scales_alpha() {
        let c = with_coverage(Rgba::new(10, 20, 30, 200), 0.5);
        assert_eq!(c, Rgba::new(10, 20, 30, 100));
        assert_eq!(with_coverage(Rgba::WHITE, 1.0), Rgba::WHITE);
    }

    #[test]
    fn test_edge_coverage_falloff() {
        assert_relative_eq!(edge_coverage(0.0), 0.5);
        assert_relative_eq!(edge_coverage(0.25), 0.25);
        assert_relative_eq!(edge_coverage(0.5), 0.0);
    }
}
