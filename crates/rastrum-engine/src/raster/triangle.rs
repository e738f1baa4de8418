//! Per-triangle setup: interpolation basis, bounding box, coverage test.

use glam::{Vec2, Vec4};

/// Affine parameterization of a triangle anchored at its first vertex.
///
/// `u` runs along edge v0→v1. `v` is edge v0→v2 with its `u` component
/// removed, so the pair is orthonormal whatever the triangle's shape. A
/// point maps to `(nx, ny)` with v1 at `(1, 0)` and v2 at `(_, 1)`.
/// Depth and varyings are then mixed v0→v1 by `nx`, and toward v2 by `ny`.
/// This is not barycentric interpolation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct TriangleBasis {
    origin: Vec2,
    u_axis: Vec2,
    v_axis: Vec2,
    pub(crate) u_length: f32,
    pub(crate) v_length: f32,
}

impl TriangleBasis {
    /// Returns the basis, or the offending edge lengths when either is not
    /// strictly positive (collinear or coincident vertices, NaN input).
    pub(crate) fn new(v0: Vec2, v1: Vec2, v2: Vec2) -> Result<Self, (f32, f32)> {
        let u_axis = (v1 - v0).normalize();
        let towards_v2 = (v2 - v0).normalize();

        let n = u_axis.extend(0.0).cross(towards_v2.extend(0.0));
        let v_axis = n.cross(u_axis.extend(0.0)).normalize().truncate();

        let u_length = (v1 - v0).length();
        let v_length = (v2 - v0).dot(v_axis);

        // Negated comparisons so NaN lands on the degenerate side.
        if !(u_length > 0.0) || !(v_length > 0.0) {
            return Err((u_length, v_length));
        }

        Ok(Self {
            origin: v0,
            u_axis,
            v_axis,
            u_length,
            v_length,
        })
    }

    /// Normalized `(nx, ny)` of `p`.
    ///
    /// Negative values are possible inside triangles that are obtuse at v0;
    /// they are returned as-is and extrapolate.
    #[inline]
    pub(crate) fn params(&self, p: Vec2) -> (f32, f32) {
        let d = p - self.origin;
        (d.dot(self.u_axis) / self.u_length, d.dot(self.v_axis) / self.v_length)
    }
}

#[inline]
fn edge_sign(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Same-sign test against all three edges, either winding.
///
/// Points on an edge count as inside, so a pixel on an edge shared by two
/// triangles is shaded by both.
pub(crate) fn point_in_triangle(p: Vec2, v0: Vec2, v1: Vec2, v2: Vec2) -> bool {
    let d1 = edge_sign(p, v0, v1);
    let d2 = edge_sign(p, v1, v2);
    let d3 = edge_sign(p, v2, v0);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Inclusive integer bounds `(min_x, min_y, max_x, max_y)` of the xy
/// projection. Bounds are truncated toward zero.
pub(crate) fn bounding_box(positions: &[Vec4; 3]) -> (i32, i32, i32, i32) {
    let [a, b, c] = positions;
    let min_x = a.x.min(b.x).min(c.x);
    let min_y = a.y.min(b.y).min(c.y);
    let max_x = a.x.max(b.x).max(c.x);
    let max_y = a.y.max(b.y).max(c.y);
    (min_x as i32, min_y as i32, max_x as i32, max_y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── basis ─────────────────────────────────────────────────────────────

    #[test]
    fn right_triangle_maps_vertices_to_unit_params() {
        let basis = TriangleBasis::new(v(0.0, 0.0), v(300.0, 0.0), v(0.0, 140.0)).unwrap();
        assert_eq!(basis.u_length, 300.0);
        assert_eq!(basis.v_length, 140.0);
        assert_eq!(basis.params(v(0.0, 0.0)), (0.0, 0.0));
        assert_eq!(basis.params(v(300.0, 0.0)), (1.0, 0.0));
        assert_eq!(basis.params(v(0.0, 140.0)), (0.0, 1.0));
        assert_eq!(basis.params(v(150.0, 70.0)), (0.5, 0.5));
    }

    #[test]
    fn v_axis_is_corrected_for_skewed_triangles() {
        // v2 leans toward v1; its perpendicular distance is still the height.
        let basis = TriangleBasis::new(v(0.0, 0.0), v(4.0, 0.0), v(3.0, 2.0)).unwrap();
        assert!((basis.v_length - 2.0).abs() < 1e-6);
        let (nx, ny) = basis.params(v(3.0, 2.0));
        assert!((nx - 0.75).abs() < 1e-6);
        assert!((ny - 1.0).abs() < 1e-6);
    }

    #[test]
    fn winding_does_not_matter() {
        let cw = TriangleBasis::new(v(0.0, 0.0), v(0.0, 5.0), v(5.0, 0.0)).unwrap();
        assert_eq!(cw.v_length, 5.0);
        assert_eq!(cw.params(v(5.0, 0.0)).1, 1.0);
    }

    #[test]
    fn collinear_is_degenerate() {
        assert!(TriangleBasis::new(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)).is_err());
    }

    #[test]
    fn coincident_is_degenerate() {
        let err = TriangleBasis::new(v(1.0, 1.0), v(1.0, 1.0), v(3.0, 0.0)).unwrap_err();
        assert_eq!(err.0, 0.0);
    }

    // ── coverage ──────────────────────────────────────────────────────────

    #[test]
    fn inside_and_outside() {
        let (a, b, c) = (v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0));
        assert!(point_in_triangle(v(2.0, 2.0), a, b, c));
        assert!(!point_in_triangle(v(8.0, 8.0), a, b, c));
        assert!(!point_in_triangle(v(-1.0, 0.0), a, b, c));
    }

    #[test]
    fn edges_and_vertices_are_inside() {
        let (a, b, c) = (v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0));
        assert!(point_in_triangle(v(5.0, 0.0), a, b, c));
        assert!(point_in_triangle(v(5.0, 5.0), a, b, c));
        assert!(point_in_triangle(v(10.0, 0.0), a, b, c));
    }

    #[test]
    fn either_winding_is_covered() {
        let (a, b, c) = (v(0.0, 0.0), v(0.0, 10.0), v(10.0, 0.0));
        assert!(point_in_triangle(v(2.0, 2.0), a, b, c));
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn bounding_box_truncates_toward_zero() {
        let positions = [
            Vec4::new(-2.7, 0.5, 0.0, 1.0),
            Vec4::new(3.9, -1.2, 0.0, 1.0),
            Vec4::new(0.0, 4.99, 0.0, 1.0),
        ];
        assert_eq!(bounding_box(&positions), (-2, -1, 3, 4));
    }
}
