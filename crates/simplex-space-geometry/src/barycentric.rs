//! Barycentric weight solvers for triangles and tetrahedra.
//!
//! Both solvers are total: a degenerate simplex (collinear or coplanar
//! vertices) does not error, it yields equal weights `1/(k+1)` with the
//! `degenerate` flag raised. This recovery is a documented policy (callers
//! render something sensible instead of failing mid-interaction) and the
//! flag is a required field so it cannot go unnoticed.
//!
//! The 2D solve produces signed weights: a point outside the triangle gets
//! weights outside `[0, 1]` that still sum to 1, which is what the locator's
//! membership test keys off. The 3D solve uses absolute sub-volumes, so its
//! weights are non-negative and sum to 1 even for exterior points;
//! containment is a separate test (`Tetrahedron::contains`).

use glam::{DVec2, DVec3};

use crate::primitives::signed_tetra_volume;

/// Default threshold below which the 2D solve denominator is treated as
/// catastrophically small (collinear vertices).
pub const DEFAULT_DENOM_EPSILON: f64 = 1e-4;

/// Default threshold below which the 3D sub-volume sum is treated as zero.
pub const DEFAULT_VOLUME_EPSILON: f64 = 1e-12;

/// Barycentric weights for one query point against one simplex.
#[derive(Debug, Clone, PartialEq)]
pub struct BarycentricWeights {
    /// One weight per vertex, in vertex order. Length 3 or 4.
    pub values: Vec<f64>,
    /// True when the equal-weight fallback fired.
    pub degenerate: bool,
}

impl BarycentricWeights {
    /// Sum of the weights. ~1.0 for any non-degenerate solve.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Whether every weight lies in `[0, 1]`.
    ///
    /// For the signed 2D solve this is exactly the point-in-triangle test.
    pub fn all_in_unit_range(&self) -> bool {
        self.values.iter().all(|w| (0.0..=1.0).contains(w))
    }

    /// The flagged equal-weight fallback for a degenerate simplex with
    /// `count` vertices.
    pub fn equal_fallback(count: usize) -> Self {
        Self {
            values: vec![1.0 / count as f64; count],
            degenerate: true,
        }
    }
}

/// Solve the classic two-equation barycentric system for a triangle.
///
/// For vertices `v1, v2, v3` and point `p`:
///
/// ```text
/// denom = (v2.y - v3.y)(v1.x - v3.x) + (v3.x - v2.x)(v1.y - v3.y)
/// w1    = ((v2.y - v3.y)(p.x - v3.x) + (v3.x - v2.x)(p.y - v3.y)) / denom
/// w2    = ((v3.y - v1.y)(p.x - v3.x) + (v1.x - v3.x)(p.y - v3.y)) / denom
/// w3    = 1 - w1 - w2
/// ```
///
/// When `|denom| < denom_epsilon` the triangle is degenerate and the result
/// is the flagged equal-weight fallback.
pub fn triangle_weights(
    vertices: &[DVec2; 3],
    p: DVec2,
    denom_epsilon: f64,
) -> BarycentricWeights {
    let [v1, v2, v3] = *vertices;

    let denom = (v2.y - v3.y) * (v1.x - v3.x) + (v3.x - v2.x) * (v1.y - v3.y);
    if denom.abs() < denom_epsilon {
        return BarycentricWeights::equal_fallback(3);
    }

    let w1 = ((v2.y - v3.y) * (p.x - v3.x) + (v3.x - v2.x) * (p.y - v3.y)) / denom;
    let w2 = ((v3.y - v1.y) * (p.x - v3.x) + (v1.x - v3.x) * (p.y - v3.y)) / denom;
    let w3 = 1.0 - w1 - w2;

    BarycentricWeights {
        values: vec![w1, w2, w3],
        degenerate: false,
    }
}

/// Solve tetrahedron weights by the volume-ratio method.
///
/// `V_i` is the absolute volume of the sub-tetrahedron formed by replacing
/// vertex `i` with `p`; `weight_i = V_i / Σ V_j`. Normalizing by the sum of
/// absolute sub-volumes (rather than the signed total volume) keeps the
/// solve stable under sign cancellation. The weights therefore sum to ~1
/// for exterior points too; this function does not decide containment.
pub fn tetrahedron_weights(
    vertices: &[DVec3; 4],
    p: DVec3,
    volume_epsilon: f64,
) -> BarycentricWeights {
    let [v0, v1, v2, v3] = *vertices;

    let sub = [
        signed_tetra_volume(p, v1, v2, v3).abs(),
        signed_tetra_volume(v0, p, v2, v3).abs(),
        signed_tetra_volume(v0, v1, p, v3).abs(),
        signed_tetra_volume(v0, v1, v2, p).abs(),
    ];

    let total: f64 = sub.iter().sum();
    if total < volume_epsilon {
        return BarycentricWeights::equal_fallback(4);
    }

    BarycentricWeights {
        values: sub.iter().map(|v| v / total).collect(),
        degenerate: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn unit_triangle() -> [DVec2; 3] {
        [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
        ]
    }

    fn unit_tetra() -> [DVec3; 4] {
        [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z]
    }

    #[test]
    fn triangle_vertex_weights_are_unit() {
        let tri = unit_triangle();
        for (i, v) in tri.iter().enumerate() {
            let w = triangle_weights(&tri, *v, DEFAULT_DENOM_EPSILON);
            assert!(!w.degenerate);
            for (j, value) in w.values.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (value - expected).abs() < TOL,
                    "vertex {i}: weight {j} = {value}"
                );
            }
        }
    }

    #[test]
    fn triangle_centroid_is_even_thirds() {
        let tri = unit_triangle();
        let centroid = DVec2::new(1.0 / 3.0, 1.0 / 3.0);
        let w = triangle_weights(&tri, centroid, DEFAULT_DENOM_EPSILON);
        for value in &w.values {
            assert!((value - 1.0 / 3.0).abs() < TOL);
        }
    }

    #[test]
    fn triangle_exterior_point_sums_to_one() {
        let tri = unit_triangle();
        let w = triangle_weights(&tri, DVec2::new(5.0, 5.0), DEFAULT_DENOM_EPSILON);
        assert!((w.sum() - 1.0).abs() < TOL);
        assert!(!w.all_in_unit_range(), "exterior point must leave [0,1]");
    }

    #[test]
    fn collinear_triangle_falls_back_to_equal_weights() {
        let tri = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 2.0),
        ];
        // Any query point: same fallback, no panic.
        for p in [DVec2::new(0.5, 0.5), DVec2::new(-3.0, 7.0)] {
            let w = triangle_weights(&tri, p, DEFAULT_DENOM_EPSILON);
            assert!(w.degenerate);
            assert_eq!(w.values, vec![1.0 / 3.0; 3]);
        }
    }

    #[test]
    fn tetra_vertex_weights_are_unit() {
        let tet = unit_tetra();
        for (i, v) in tet.iter().enumerate() {
            let w = tetrahedron_weights(&tet, *v, DEFAULT_VOLUME_EPSILON);
            assert!(!w.degenerate);
            for (j, value) in w.values.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((value - expected).abs() < TOL);
            }
        }
    }

    #[test]
    fn tetra_centroid_is_even_quarters() {
        let tet = unit_tetra();
        let centroid = DVec3::new(0.25, 0.25, 0.25);
        let w = tetrahedron_weights(&tet, centroid, DEFAULT_VOLUME_EPSILON);
        for value in &w.values {
            assert!((value - 0.25).abs() < TOL);
        }
    }

    #[test]
    fn tetra_exterior_weights_still_normalized() {
        // Pinned exterior vectors: the abs-volume formula keeps weights
        // non-negative and normalized even though the point is outside.
        let tet = unit_tetra();

        let w = tetrahedron_weights(&tet, DVec3::new(2.0, 0.0, 0.0), DEFAULT_VOLUME_EPSILON);
        assert!((w.sum() - 1.0).abs() < TOL);
        assert!(w.values.iter().all(|v| *v >= 0.0));
        // Along +x past v1, the v1 share dominates.
        assert!(w.values[1] > w.values[0]);
        assert!(w.values[1] > w.values[2]);
        assert!(w.values[1] > w.values[3]);

        let w = tetrahedron_weights(&tet, DVec3::new(-1.0, -1.0, -1.0), DEFAULT_VOLUME_EPSILON);
        assert!((w.sum() - 1.0).abs() < TOL);
    }

    #[test]
    fn degenerate_point_tetra_falls_back() {
        let tet = [DVec3::ONE, DVec3::ONE, DVec3::ONE, DVec3::ONE];
        let w = tetrahedron_weights(&tet, DVec3::ONE, DEFAULT_VOLUME_EPSILON);
        assert!(w.degenerate);
        assert_eq!(w.values, vec![0.25; 4]);
    }
}
