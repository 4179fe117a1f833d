//! Tetrahedron surface mesh: ray picking and containment.
//!
//! The 3D path of the engine handles exactly one tetrahedron. Its surface
//! is the four triangular faces; picking intersects a ray against that mesh
//! with the Moller-Trumbore test, and containment is decided separately by
//! checking that the query point sits on the same side of every face as the
//! opposite vertex. Keeping the two apart matters: barycentric weights are
//! defined for exterior points too, so a pick hit never implies interior.

use glam::DVec3;

use crate::primitives::signed_tetra_volume;

/// Rays closer than this to parallel with a face are treated as misses.
const RAY_EPSILON: f64 = 1e-12;

/// Tolerance for the face-side test; points on a face count as inside.
const FACE_EPSILON: f64 = 1e-10;

/// Vertex indices of the four faces.
const FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// A ray/surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Parametric distance along the ray direction.
    pub t: f64,
    /// The intersection point.
    pub point: DVec3,
    /// Which face was hit (index into the face list).
    pub face: usize,
}

/// A tetrahedron given by four vertices in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetrahedron {
    /// The four vertices.
    pub vertices: [DVec3; 4],
}

impl Tetrahedron {
    /// Build from four vertices.
    pub fn new(vertices: [DVec3; 4]) -> Self {
        Self { vertices }
    }

    /// Signed volume; ~0 when the vertices are coplanar.
    pub fn signed_volume(&self) -> f64 {
        let [a, b, c, d] = self.vertices;
        signed_tetra_volume(a, b, c, d)
    }

    /// Whether the absolute volume falls below `epsilon`.
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.signed_volume().abs() < epsilon
    }

    /// Geometric center of the four vertices.
    pub fn centroid(&self) -> DVec3 {
        self.vertices.iter().copied().sum::<DVec3>() / 4.0
    }

    /// Four-face sign-consistency containment test.
    ///
    /// `p` is inside (or on the boundary) when, for every face, `p` lies on
    /// the same side as the vertex opposite that face. A degenerate
    /// tetrahedron contains nothing: at least one face normal vanishes and
    /// the side test cannot be consistent.
    pub fn contains(&self, p: DVec3) -> bool {
        FACES.iter().enumerate().all(|(f, face)| {
            let a = self.vertices[face[0]];
            let b = self.vertices[face[1]];
            let c = self.vertices[face[2]];
            let opposite = self.vertices[3 - f];

            let normal = (b - a).cross(c - a);
            let side_opposite = normal.dot(opposite - a);
            let side_p = normal.dot(p - a);

            if side_opposite.abs() < FACE_EPSILON {
                return false;
            }
            side_p * side_opposite.signum() >= -FACE_EPSILON
        })
    }

    /// Intersect a ray with the surface mesh, returning the nearest hit.
    ///
    /// Runs Moller-Trumbore against each face and keeps the smallest
    /// non-negative `t`. Returns `None` when the ray misses every face,
    /// which also covers direction vectors of zero length.
    pub fn intersect_ray(&self, origin: DVec3, direction: DVec3) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;

        for (f, face) in FACES.iter().enumerate() {
            let a = self.vertices[face[0]];
            let b = self.vertices[face[1]];
            let c = self.vertices[face[2]];

            if let Some(t) = ray_triangle(origin, direction, a, b, c) {
                let hit = RayHit {
                    t,
                    point: origin + direction * t,
                    face: f,
                };
                if nearest.map_or(true, |n| t < n.t) {
                    nearest = Some(hit);
                }
            }
        }

        nearest
    }
}

/// Moller-Trumbore ray/triangle intersection.
///
/// Returns the parametric distance `t >= 0` of the hit, or `None` for a
/// miss. Back faces are not culled; the tetrahedron picking path wants hits
/// from either side of a face.
fn ray_triangle(origin: DVec3, direction: DVec3, a: DVec3, b: DVec3, c: DVec3) -> Option<f64> {
    let ab = b - a;
    let ac = c - a;

    let pvec = direction.cross(ac);
    let det = ab.dot(pvec);
    if det.abs() < RAY_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = origin - a;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(ab);
    let v = direction.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = ac.dot(qvec) * inv_det;
    if t < 0.0 {
        return None;
    }
    Some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tetra() -> Tetrahedron {
        Tetrahedron::new([DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z])
    }

    #[test]
    fn volume_of_unit_tetra() {
        assert!((unit_tetra().signed_volume().abs() - 1.0 / 6.0).abs() < 1e-12);
        assert!(!unit_tetra().is_degenerate(1e-10));
    }

    #[test]
    fn coplanar_tetra_is_degenerate() {
        let flat = Tetrahedron::new([
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            DVec3::new(1.0, 1.0, 0.0),
        ]);
        assert!(flat.is_degenerate(1e-10));
        assert!(!flat.contains(DVec3::new(0.25, 0.25, 0.0)));
    }

    #[test]
    fn centroid_is_mean_of_vertices() {
        let c = unit_tetra().centroid();
        assert!((c - DVec3::new(0.25, 0.25, 0.25)).length() < 1e-12);
    }

    #[test]
    fn contains_interior_and_boundary() {
        let tet = unit_tetra();
        assert!(tet.contains(DVec3::new(0.25, 0.25, 0.25)));
        assert!(tet.contains(DVec3::new(0.1, 0.1, 0.1)));
        // Vertices and face points are boundary, which counts as inside.
        assert!(tet.contains(DVec3::ZERO));
        assert!(tet.contains(DVec3::new(0.5, 0.5, 0.0)));
    }

    #[test]
    fn contains_rejects_exterior() {
        let tet = unit_tetra();
        assert!(!tet.contains(DVec3::new(1.0, 1.0, 1.0)));
        assert!(!tet.contains(DVec3::new(-0.1, 0.2, 0.2)));
        assert!(!tet.contains(DVec3::new(0.4, 0.4, 0.4)));
    }

    #[test]
    fn ray_from_outside_hits_surface() {
        let tet = unit_tetra();
        let origin = DVec3::new(2.0, 0.2, 0.2);
        let hit = tet
            .intersect_ray(origin, tet.centroid() - origin)
            .expect("ray toward centroid must hit");
        assert!(hit.t > 0.0);
        // The hit lies on the surface, so it is still contained.
        assert!(tet.contains(hit.point));
    }

    #[test]
    fn ray_from_inside_hits_surface() {
        let tet = unit_tetra();
        let hit = tet
            .intersect_ray(DVec3::new(0.2, 0.2, 0.2), DVec3::X)
            .expect("ray from interior must exit through a face");
        assert!(hit.t > 0.0);
    }

    #[test]
    fn ray_away_from_tetra_misses() {
        let tet = unit_tetra();
        assert!(tet
            .intersect_ray(DVec3::new(5.0, 5.0, 5.0), DVec3::new(1.0, 1.0, 1.0))
            .is_none());
    }

    #[test]
    fn zero_direction_misses() {
        let tet = unit_tetra();
        assert!(tet.intersect_ray(DVec3::new(0.2, 0.2, 0.2), DVec3::ZERO).is_none());
    }
}
