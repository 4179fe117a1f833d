//! Shared geometric predicates.
//!
//! Thin f64 predicates used by the triangulation, picking, and weight
//! solvers. These are plain floating-point evaluations, not exact-arithmetic
//! kernels: input coordinates come from a dimensionality-reduction step and
//! point sets stay in the dozens, so adaptive precision buys nothing here.

use glam::{DVec2, DVec3};

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive when the triangle winds counter-clockwise, negative when
/// clockwise, ~0 when the points are collinear.
#[inline]
pub fn orient2d(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether `p` lies strictly inside the circumcircle of the
/// counter-clockwise triangle `(a, b, c)`.
///
/// Standard 3x3 lifted-determinant test. The caller must pass a CCW
/// triangle; for a clockwise one the sign flips.
pub fn in_circumcircle(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
    let ax = a.x - p.x;
    let ay = a.y - p.y;
    let bx = b.x - p.x;
    let by = b.y - p.y;
    let cx = c.x - p.x;
    let cy = c.y - p.y;

    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);

    det > 0.0
}

/// Signed volume of tetrahedron `(a, b, c, d)`.
///
/// One sixth of the scalar triple product of the edge vectors out of `a`.
/// ~0 when the four points are coplanar.
#[inline]
pub fn signed_tetra_volume(a: DVec3, b: DVec3, c: DVec3, d: DVec3) -> f64 {
    (b - a).cross(c - a).dot(d - a) / 6.0
}

/// Centroid of a point set. Returns `None` for an empty slice.
pub fn centroid2d(points: &[DVec2]) -> Option<DVec2> {
    if points.is_empty() {
        return None;
    }
    let sum: DVec2 = points.iter().copied().sum();
    Some(sum / points.len() as f64)
}
