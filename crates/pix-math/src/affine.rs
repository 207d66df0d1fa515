//! 2D affine transforms.
//!
//! [`Affine2`] is the six-parameter planar map used by the rotate, rigid,
//! and affine-warp operations:
//!
//! ```text
//! x' = a*x + b*y + c
//! y' = d*x + e*y + f
//! ```
//!
//! The inverse is analytic; a near-zero determinant means the map
//! collapses the plane and has no inverse.

use crate::mat3::Mat3;

/// A 2D affine transform stored as `[a, b, c, d, e, f]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    /// Coefficients `[a, b, c, d, e, f]` in reading order.
    pub coeffs: [f64; 6],
}

impl Affine2 {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        coeffs: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    };

    /// Creates a transform from its six coefficients.
    #[inline]
    pub const fn new(coeffs: [f64; 6]) -> Self {
        Self { coeffs }
    }

    /// Pure translation.
    #[inline]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new([1.0, 0.0, tx, 0.0, 1.0, ty])
    }

    /// Axis-aligned scale about the origin.
    #[inline]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new([sx, 0.0, 0.0, 0.0, sy, 0.0])
    }

    /// Counter-clockwise rotation about the origin, in radians.
    ///
    /// Y grows downward, so a positive angle appears clockwise on screen.
    #[inline]
    pub fn rotation(rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([c, -s, 0.0, s, c, 0.0])
    }

    /// Rotation about an arbitrary center.
    pub fn rotation_about(rad: f64, cx: f64, cy: f64) -> Self {
        Self::translation(cx, cy)
            .compose(&Self::rotation(rad))
            .compose(&Self::translation(-cx, -cy))
    }

    /// Applies the transform to a point.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let [a, b, c, d, e, f] = self.coeffs;
        (a * x + b * y + c, d * x + e * y + f)
    }

    /// Determinant of the linear part.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let [a, b, _, d, e, _] = self.coeffs;
        a * e - b * d
    }

    /// Composition `self(other(p))`.
    pub fn compose(&self, other: &Affine2) -> Affine2 {
        let [a1, b1, c1, d1, e1, f1] = self.coeffs;
        let [a2, b2, c2, d2, e2, f2] = other.coeffs;
        Affine2::new([
            a1 * a2 + b1 * d2,
            a1 * b2 + b1 * e2,
            a1 * c2 + b1 * f2 + c1,
            d1 * a2 + e1 * d2,
            d1 * b2 + e1 * e2,
            d1 * c2 + e1 * f2 + f1,
        ])
    }

    /// Analytic inverse, or `None` for a singular transform.
    pub fn inverse(&self) -> Option<Affine2> {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return None;
        }
        let [a, b, c, d, e, f] = self.coeffs;
        let inv_det = 1.0 / det;
        Some(Affine2::new([
            e * inv_det,
            -b * inv_det,
            (b * f - e * c) * inv_det,
            -d * inv_det,
            a * inv_det,
            (d * c - a * f) * inv_det,
        ]))
    }

    /// Lifts the affine map into a homography.
    pub fn to_mat3(&self) -> Mat3 {
        let [a, b, c, d, e, f] = self.coeffs;
        Mat3::from_rows([[a, b, c], [d, e, f], [0.0, 0.0, 1.0]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translation_apply() {
        let t = Affine2::translation(3.0, -2.0);
        assert_eq!(t.apply(1.0, 1.0), (4.0, -1.0));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let r = Affine2::rotation(std::f64::consts::FRAC_PI_2);
        let (x, y) = r.apply(1.0, 0.0);
        assert_relative_eq!(x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_about_fixes_center() {
        let r = Affine2::rotation_about(1.1, 5.0, 7.0);
        let (x, y) = r.apply(5.0, 7.0);
        assert_relative_eq!(x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(y, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = Affine2::new([1.5, 0.3, 10.0, -0.2, 0.9, -4.0]);
        let inv = m.inverse().unwrap();
        let (x, y) = inv.apply(m.apply(2.0, 3.0).0, m.apply(2.0, 3.0).1);
        assert_relative_eq!(x, 2.0, epsilon = 1e-10);
        assert_relative_eq!(y, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let m = Affine2::new([1.0, 2.0, 0.0, 2.0, 4.0, 0.0]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_compose_order() {
        // scale then translate: p -> 2p + (1, 0)
        let m = Affine2::translation(1.0, 0.0).compose(&Affine2::scale(2.0, 2.0));
        assert_eq!(m.apply(3.0, 0.0), (7.0, 0.0));
    }
}
