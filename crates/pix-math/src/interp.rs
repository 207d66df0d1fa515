//! Interpolation helpers for resampling.

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0` and `b` when `t = 1.0`; values outside
/// [0, 1] extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Bilinear interpolation over a 2x2 neighborhood.
///
/// `c00`/`c10` are the top row, `c01`/`c11` the bottom row; `fx`/`fy` are
/// the fractional offsets within the cell.
#[inline]
pub fn bilinear(c00: f64, c10: f64, c01: f64, c11: f64, fx: f64, fy: f64) -> f64 {
    lerp(lerp(c00, c10, fx), lerp(c01, c11, fx), fy)
}
