//! Scalar geometry predicates for rasterization.
//!
//! Shape fills and region membership all reduce to a handful of
//! predicates over `f64` points. Boundary points are deliberately counted
//! as inside everywhere so that adjacent fills meet without seams.

/// Squared distance from `p` to the segment `a`-`b`.
///
/// The projection parameter is clamped to the segment, so endpoints act
/// as caps. Squared form lets callers compare against squared thresholds
/// without a square root.
pub fn dist_sq_point_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (px, py) = p;
    let (ax, ay) = a;
    let (bx, by) = b;
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        let ex = px - ax;
        let ey = py - ay;
        return ex * ex + ey * ey;
    }
    let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
    let cx = ax + t * dx;
    let cy = ay + t * dy;
    let ex = px - cx;
    let ey = py - cy;
    ex * ex + ey * ey
}

/// Distance from `p` to the segment `a`-`b`.
#[inline]
pub fn dist_point_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    dist_sq_point_segment(p, a, b).sqrt()
}

#[inline]
fn cross(o: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

/// Returns `true` when `p` lies inside triangle `abc`, boundary included.
///
/// Uses the three edge cross products; the point is inside when the signs
/// agree or any product is zero.
pub fn point_in_triangle(p: (f64, f64), a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Returns `true` when `p` lies on segment `a`-`b` within `eps`.
///
/// Collinearity is tested against the cross product magnitude and the
/// point must fall inside the segment's bounding box.
pub fn on_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64), eps: f64) -> bool {
    if cross(a, b, p).abs() > eps {
        return false;
    }
    let (min_x, max_x) = (a.0.min(b.0), a.0.max(b.0));
    let (min_y, max_y) = (a.1.min(b.1), a.1.max(b.1));
    p.0 >= min_x - eps && p.0 <= max_x + eps && p.1 >= min_y - eps && p.1 <= max_y + eps
}

/// Returns `true` when `p` lies inside the polygon, boundary included.
///
/// Ray casting with even-odd parity; self-intersecting polygons follow
/// the even-odd rule. Points on an edge short-circuit to inside.
pub fn point_in_polygon(p: (f64, f64), verts: &[(f64, f64)]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        if on_segment(p, verts[i], verts[(i + 1) % n], 1e-9) {
            return true;
        }
    }
    let (px, py) = p;
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = verts[i];
        let (xj, yj) = verts[j];
        if (yi > py) != (yj > py) {
            let x_cross = xi + (py - yi) / (yj - yi) * (xj - xi);
            if px < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dist_to_segment_interior() {
        let d = dist_point_segment((0.0, 5.0), (-10.0, 0.0), (10.0, 0.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_dist_to_segment_clamps_to_endpoint() {
        let d = dist_point_segment((13.0, 4.0), (-10.0, 0.0), (10.0, 0.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_dist_degenerate_segment() {
        let d = dist_point_segment((3.0, 4.0), (0.0, 0.0), (0.0, 0.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_triangle_winding_independent() {
        let p = (1.0, 1.0);
        assert!(point_in_triangle(p, (0.0, 0.0), (4.0, 0.0), (0.0, 4.0)));
        assert!(point_in_triangle(p, (0.0, 4.0), (4.0, 0.0), (0.0, 0.0)));
    }

    #[test]
    fn test_triangle_vertex_is_inside() {
        assert!(point_in_triangle(
            (0.0, 0.0),
            (0.0, 0.0),
            (4.0, 0.0),
            (0.0, 4.0)
        ));
    }

    #[test]
    fn test_polygon_square() {
        let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        assert!(point_in_polygon((5.0, 5.0), &square));
        assert!(!point_in_polygon((15.0, 5.0), &square));
        // edge point counts as inside
        assert!(point_in_polygon((10.0, 5.0), &square));
    }

    #[test]
    fn test_polygon_concave() {
        // L-shape; the notch at (7, 7) is outside
        let l = [
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 5.0),
            (5.0, 5.0),
            (5.0, 10.0),
            (0.0, 10.0),
        ];
        assert!(point_in_polygon((2.0, 8.0), &l));
        assert!(!point_in_polygon((8.0, 8.0), &l));
    }

    #[test]
    fn test_on_segment_bounding_box() {
        // Collinear but beyond the far endpoint.
        assert!(!on_segment((15.0, 0.0), (0.0, 0.0), (10.0, 0.0), 1e-9));
        assert!(on_segment((10.0, 0.0), (0.0, 0.0), (10.0, 0.0), 1e-9));
    }
}
