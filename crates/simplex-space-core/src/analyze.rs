//! Query analysis: locate, weigh, blend, classify.
//!
//! `analyze` is a pure function of `(tessellation, point)`. Nothing is
//! cached and nothing is mutated, so any number of analyses may run
//! concurrently against one tessellation.

use simplex_space_geometry::{tetrahedron_weights, triangle_weights, BarycentricWeights};

use crate::config::EngineConfig;
use crate::error::CoreResult;
use crate::semantic::{classify, interpolate_embeddings};
use crate::types::{AnalysisResult, Dimension, ProjectedPoint, Simplex, Tessellation};

impl Tessellation {
    /// Analyze a query point against this tessellation.
    ///
    /// `Ok(None)` when no simplex is located (outside the hull, a missed 3D
    /// pick, a dimension mismatch, or an uninitialized tessellation).
    /// `Err(DimensionMismatch)` when vertex embeddings are inconsistent;
    /// that failure is surfaced rather than guessed around.
    pub fn analyze(&self, point: &ProjectedPoint) -> CoreResult<Option<AnalysisResult>> {
        let Some(simplex) = self.locate(point) else {
            return Ok(None);
        };
        let Some(config) = self.config() else {
            return Ok(None);
        };

        let weights = simplex_weights(simplex, point, config);

        let is_inside = match simplex.dimension() {
            Dimension::Two => None,
            Dimension::Three => {
                let inside = point
                    .as_dvec3()
                    .zip(simplex.tetrahedron())
                    .map(|(p, tet)| tet.contains(p))
                    .unwrap_or(false);
                Some(inside)
            }
        };

        let blend = interpolate_embeddings(simplex.vertices(), &weights.values)?;
        let classification = classify(&weights.values, simplex, &config.classifier);

        Ok(Some(AnalysisResult {
            simplex: simplex.clone(),
            degenerate: simplex.degenerate || weights.degenerate,
            weights: weights.values,
            is_inside,
            blend,
            classification,
        }))
    }
}

/// Barycentric weights for a located simplex.
///
/// A build-time-degenerate simplex takes the equal-weight fallback
/// directly; otherwise the per-dimension solver runs (and may itself fall
/// back on a catastrophic denominator).
fn simplex_weights(
    simplex: &Simplex,
    point: &ProjectedPoint,
    config: &EngineConfig,
) -> BarycentricWeights {
    if simplex.degenerate {
        return BarycentricWeights::equal_fallback(simplex.order());
    }

    if let (Some(coords), Some(p)) = (simplex.triangle_coords(), point.as_dvec2()) {
        return triangle_weights(&coords, p, config.geometry.denom_epsilon);
    }
    if let (Some(tet), Some(p)) = (simplex.tetrahedron(), point.as_dvec3()) {
        return tetrahedron_weights(&tet.vertices, p, config.geometry.volume_epsilon);
    }

    // Unreachable for simplices produced by the builder; answer with the
    // fallback rather than panicking.
    BarycentricWeights::equal_fallback(simplex.order())
}
