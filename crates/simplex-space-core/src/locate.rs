//! Simplex location for query points.
//!
//! Three paths, one per tessellation shape:
//!
//! - single triangle: membership falls straight out of the barycentric
//!   solve, inside iff every weight lands in `[0, 1]`
//! - multiple triangles: the triangulation's own walk query finds the
//!   candidate face, which maps back to its simplex by position
//! - tetrahedron: a pick ray from the query point toward the centroid is
//!   intersected with the surface mesh; a hit selects the tetrahedron,
//!   while interior/exterior is a separate sign test applied during
//!   analysis
//!
//! A query of the wrong dimensionality, or against an uninitialized
//! tessellation, locates nothing.

use tracing::trace;

use crate::types::{Dimension, ProjectedPoint, Simplex, Tessellation};

use simplex_space_geometry::triangle_weights;

impl Tessellation {
    /// Find the simplex containing (or, in 3D, picked by) `point`.
    ///
    /// Returns `None` for points outside the convex hull of the 2D
    /// tessellation, for 3D picks that miss the mesh entirely, for
    /// dimension mismatches, and for uninitialized tessellations.
    pub fn locate(&self, point: &ProjectedPoint) -> Option<&Simplex> {
        let config = self.config()?;
        let dimension = self.dimension()?;
        if point.dimension() != dimension {
            trace!(
                query = ?point.dimension(),
                tessellation = ?dimension,
                "dimension mismatch in locate"
            );
            return None;
        }

        match dimension {
            Dimension::Two => {
                let p = point.as_dvec2()?;
                match self.triangulation() {
                    None => {
                        // Single-triangle path. A degenerate triangle
                        // answers every query with the fallback weights, so
                        // it is "containing" for any point.
                        let simplex = self.simplices().first()?;
                        if simplex.degenerate {
                            return Some(simplex);
                        }
                        let coords = simplex.triangle_coords()?;
                        let weights =
                            triangle_weights(&coords, p, config.geometry.denom_epsilon);
                        weights.all_in_unit_range().then_some(simplex)
                    }
                    Some(triangulation) => {
                        let index = triangulation.locate(p)?;
                        self.simplices().get(index)
                    }
                }
            }
            Dimension::Three => {
                let p = point.as_dvec3()?;
                let simplex = self.simplices().first()?;
                let tet = simplex.tetrahedron()?;

                let direction = tet.centroid() - p;
                if direction.length_squared() < f64::EPSILON {
                    // The query point is the centroid itself.
                    return Some(simplex);
                }
                match tet.intersect_ray(p, direction) {
                    Some(hit) => {
                        trace!(t = hit.t, face = hit.face, "pick ray hit tetrahedron");
                        Some(simplex)
                    }
                    None => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::build::build_tessellation;
    use crate::config::EngineConfig;
    use crate::types::{DocumentRef, ProjectedPoint};

    fn build2(points: &[[f64; 2]]) -> crate::types::Tessellation {
        let docs = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                DocumentRef::new(format!("d{i}"), format!("D{i}"), None, ProjectedPoint::D2(*p))
            })
            .collect();
        build_tessellation(docs, &EngineConfig::default())
    }

    fn build3(points: &[[f64; 3]]) -> crate::types::Tessellation {
        let docs = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                DocumentRef::new(format!("d{i}"), format!("D{i}"), None, ProjectedPoint::D3(*p))
            })
            .collect();
        build_tessellation(docs, &EngineConfig::default())
    }

    #[test]
    fn single_triangle_membership() {
        let t = build2(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert!(t.locate(&ProjectedPoint::D2([0.25, 0.25])).is_some());
        assert!(t.locate(&ProjectedPoint::D2([0.9, 0.9])).is_none());
    }

    #[test]
    fn degenerate_triangle_locates_everywhere() {
        let t = build2(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
        assert!(t.initialized());
        let s = t.locate(&ProjectedPoint::D2([40.0, -3.0])).unwrap();
        assert!(s.degenerate);
    }

    #[test]
    fn multi_triangle_walk_and_hull() {
        let t = build2(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.5, 0.5]]);
        let s = t.locate(&ProjectedPoint::D2([0.5, 0.25])).unwrap();
        assert_eq!(s.order(), 3);
        assert!(t.locate(&ProjectedPoint::D2([3.0, 3.0])).is_none());
    }

    #[test]
    fn located_simplex_contains_query_point() {
        let t = build2(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [1.0, 1.0]]);
        let query = ProjectedPoint::D2([0.4, 1.1]);
        let s = t.locate(&query).unwrap();
        let coords = s.triangle_coords().unwrap();
        let w = simplex_space_geometry::triangle_weights(
            &coords,
            query.as_dvec2().unwrap(),
            1e-4,
        );
        assert!(w.all_in_unit_range(), "walk returned a non-containing face");
    }

    #[test]
    fn tetrahedron_pick_hits_from_inside_and_outside() {
        let t = build3(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        // Interior, exterior, and centroid queries all pick the tetrahedron.
        assert!(t.locate(&ProjectedPoint::D3([0.2, 0.2, 0.2])).is_some());
        assert!(t.locate(&ProjectedPoint::D3([3.0, 3.0, 3.0])).is_some());
        assert!(t.locate(&ProjectedPoint::D3([0.25, 0.25, 0.25])).is_some());
    }

    #[test]
    fn dimension_mismatch_locates_nothing() {
        let t = build2(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert!(t.locate(&ProjectedPoint::D3([0.2, 0.2, 0.0])).is_none());
    }

    #[test]
    fn uninitialized_locates_nothing() {
        let t = build2(&[[0.0, 0.0]]);
        assert!(!t.initialized());
        assert!(t.locate(&ProjectedPoint::D2([0.0, 0.0])).is_none());
    }
}
