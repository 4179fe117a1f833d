//! Construction strategies, selected by vertex count.
//!
//! The three-document 2D case is common enough to deserve its own path: it
//! builds the single triangle directly instead of running a triangulation.
//! More than three 2D documents go through Delaunay; the 3D path supports
//! exactly one tetrahedron over exactly four documents. Each path sits
//! behind the same trait so the builder (and the tests) treat them
//! interchangeably.

use std::sync::Arc;

use simplex_space_geometry::{
    primitives::orient2d, DelaunayTriangulation, Tetrahedron, TriangulationError,
};
use tracing::debug;

use crate::config::EngineConfig;
use crate::types::{BuildFailure, Dimension, DocumentRef, Simplex};

/// Output of a successful strategy run.
pub(crate) struct BuiltSimplices {
    pub simplices: Vec<Simplex>,
    /// Point-location structure for the multi-triangle path; `None` for the
    /// direct paths.
    pub triangulation: Option<DelaunayTriangulation>,
}

/// One way of turning filtered documents into simplices.
pub(crate) trait BuildStrategy {
    /// Strategy name for diagnostics.
    fn name(&self) -> &'static str;

    /// Construct the simplices, or report why no tessellation exists.
    fn build(
        &self,
        documents: &[Arc<DocumentRef>],
        config: &EngineConfig,
    ) -> Result<BuiltSimplices, BuildFailure>;
}

/// Pick a strategy for the given dimensionality and surviving vertex count.
pub(crate) fn select_strategy(
    dimension: Dimension,
    count: usize,
) -> Result<Box<dyn BuildStrategy>, BuildFailure> {
    match dimension {
        Dimension::Two if count == 3 => Ok(Box::new(DirectTriangle)),
        Dimension::Two if count > 3 => Ok(Box::new(DelaunayFan)),
        Dimension::Two => Err(BuildFailure::InsufficientPoints {
            required: 3,
            got: count,
        }),
        // The 3D path supports exactly one tetrahedron; any other count is
        // reported under the fixed insufficient_points reason token.
        Dimension::Three if count == 4 => Ok(Box::new(SingleTetrahedron)),
        Dimension::Three => Err(BuildFailure::InsufficientPoints {
            required: 4,
            got: count,
        }),
    }
}

/// Exactly three 2D documents: one triangle, no triangulation run.
pub(crate) struct DirectTriangle;

impl BuildStrategy for DirectTriangle {
    fn name(&self) -> &'static str {
        "direct_triangle"
    }

    fn build(
        &self,
        documents: &[Arc<DocumentRef>],
        config: &EngineConfig,
    ) -> Result<BuiltSimplices, BuildFailure> {
        let coords: Vec<_> = documents
            .iter()
            .filter_map(|d| d.point.as_dvec2())
            .collect();

        // Same quantity the barycentric solve divides by; collinear input
        // builds a flagged degenerate triangle rather than failing.
        let area2 = orient2d(coords[0], coords[1], coords[2]);
        let degenerate = area2.abs() < config.geometry.denom_epsilon;
        if degenerate {
            debug!(area2, "direct triangle is degenerate");
        }

        let simplex = Simplex::new(documents.to_vec(), degenerate);
        Ok(BuiltSimplices {
            simplices: vec![simplex],
            triangulation: None,
        })
    }
}

/// More than three 2D documents: planar Delaunay triangulation, decomposed
/// into triangle simplices whose vertex indices map back to documents.
pub(crate) struct DelaunayFan;

impl BuildStrategy for DelaunayFan {
    fn name(&self) -> &'static str {
        "delaunay_fan"
    }

    fn build(
        &self,
        documents: &[Arc<DocumentRef>],
        config: &EngineConfig,
    ) -> Result<BuiltSimplices, BuildFailure> {
        let points: Vec<_> = documents
            .iter()
            .filter_map(|d| d.point.as_dvec2())
            .collect();

        let triangulation = DelaunayTriangulation::build(&points).map_err(|err| match err {
            TriangulationError::Collinear { count } => BuildFailure::DegenerateGeometry {
                detail: format!("all {count} points are collinear"),
            },
            TriangulationError::TooFewPoints { got } => BuildFailure::InsufficientPoints {
                required: 3,
                got,
            },
        })?;

        let simplices: Vec<Simplex> = triangulation
            .triangles()
            .iter()
            .map(|&[a, b, c]| {
                let area2 = orient2d(points[a], points[b], points[c]);
                let vertices = vec![
                    Arc::clone(&documents[a]),
                    Arc::clone(&documents[b]),
                    Arc::clone(&documents[c]),
                ];
                Simplex::new(vertices, area2.abs() < config.geometry.denom_epsilon)
            })
            .collect();

        debug!(simplices = simplices.len(), "decomposed triangulation");
        Ok(BuiltSimplices {
            simplices,
            triangulation: Some(triangulation),
        })
    }
}

/// Exactly four 3D documents: one tetrahedron.
pub(crate) struct SingleTetrahedron;

impl BuildStrategy for SingleTetrahedron {
    fn name(&self) -> &'static str {
        "single_tetrahedron"
    }

    fn build(
        &self,
        documents: &[Arc<DocumentRef>],
        config: &EngineConfig,
    ) -> Result<BuiltSimplices, BuildFailure> {
        let coords: Vec<_> = documents
            .iter()
            .filter_map(|d| d.point.as_dvec3())
            .collect();

        let tet = Tetrahedron::new([coords[0], coords[1], coords[2], coords[3]]);
        let degenerate = tet.is_degenerate(config.geometry.volume_epsilon);
        if degenerate {
            debug!(volume = tet.signed_volume(), "tetrahedron is degenerate");
        }

        let simplex = Simplex::new(documents.to_vec(), degenerate);
        Ok(BuiltSimplices {
            simplices: vec![simplex],
            triangulation: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectedPoint;

    fn docs2(points: &[[f64; 2]]) -> Vec<Arc<DocumentRef>> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Arc::new(DocumentRef::new(
                    format!("d{i}"),
                    format!("D{i}"),
                    None,
                    ProjectedPoint::D2(*p),
                ))
            })
            .collect()
    }

    fn docs3(points: &[[f64; 3]]) -> Vec<Arc<DocumentRef>> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Arc::new(DocumentRef::new(
                    format!("d{i}"),
                    format!("D{i}"),
                    None,
                    ProjectedPoint::D3(*p),
                ))
            })
            .collect()
    }

    #[test]
    fn selection_by_count() {
        assert_eq!(select_strategy(Dimension::Two, 3).unwrap().name(), "direct_triangle");
        assert_eq!(select_strategy(Dimension::Two, 7).unwrap().name(), "delaunay_fan");
        assert_eq!(
            select_strategy(Dimension::Three, 4).unwrap().name(),
            "single_tetrahedron"
        );
        assert!(select_strategy(Dimension::Two, 2).is_err());
        assert!(select_strategy(Dimension::Three, 5).is_err());
    }

    #[test]
    fn direct_triangle_builds_one_simplex() {
        let docs = docs2(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        let built = DirectTriangle.build(&docs, &EngineConfig::default()).unwrap();
        assert_eq!(built.simplices.len(), 1);
        assert!(built.triangulation.is_none());
        assert!(!built.simplices[0].degenerate);
    }

    #[test]
    fn direct_triangle_flags_collinear_input() {
        let docs = docs2(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
        let built = DirectTriangle.build(&docs, &EngineConfig::default()).unwrap();
        assert!(built.simplices[0].degenerate);
    }

    #[test]
    fn delaunay_fan_maps_indices_to_documents() {
        let docs = docs2(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let built = DelaunayFan.build(&docs, &EngineConfig::default()).unwrap();
        assert_eq!(built.simplices.len(), 2);
        let triangulation = built.triangulation.as_ref().unwrap();

        for (simplex, tri) in built.simplices.iter().zip(triangulation.triangles()) {
            let expected: Vec<&str> = tri.iter().map(|&i| docs[i].id.as_str()).collect();
            let actual: Vec<&str> = simplex.vertex_ids().collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn delaunay_fan_collinear_is_degenerate_geometry() {
        let docs = docs2(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);
        match DelaunayFan.build(&docs, &EngineConfig::default()) {
            Err(BuildFailure::DegenerateGeometry { detail }) => {
                assert!(detail.contains("collinear"));
            }
            other => panic!("expected DegenerateGeometry, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn tetrahedron_builds_and_flags_coplanar() {
        let regular = docs3(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let built = SingleTetrahedron
            .build(&regular, &EngineConfig::default())
            .unwrap();
        assert!(!built.simplices[0].degenerate);

        let flat = docs3(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ]);
        let built = SingleTetrahedron
            .build(&flat, &EngineConfig::default())
            .unwrap();
        assert!(built.simplices[0].degenerate);
    }
}
