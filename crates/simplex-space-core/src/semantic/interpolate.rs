//! Weighted embedding interpolation.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::types::{DocumentRef, SemanticBlend};

use super::similarity::cosine_similarity;

/// Blend the vertex embeddings of a simplex by barycentric weights.
///
/// `combined[j] = Σ_i weight_i · embedding_i[j]`, followed by the cosine
/// similarity of the blend against each vertex embedding.
///
/// Missing data is handled in two distinct ways:
/// - every vertex lacks an embedding: the degraded
///   [`SemanticBlend::PositionalMix`] is returned, weights-only
/// - some vertices lack an embedding, or lengths disagree:
///   [`CoreError::DimensionMismatch`] is surfaced, because blending what
///   remains would silently corrupt the analysis
pub fn interpolate_embeddings(
    vertices: &[Arc<DocumentRef>],
    weights: &[f64],
) -> CoreResult<SemanticBlend> {
    let embeddings: Vec<Option<&[f32]>> = vertices
        .iter()
        .map(|v| v.embedding.as_deref())
        .collect();

    if embeddings.iter().all(Option::is_none) {
        return Ok(SemanticBlend::PositionalMix);
    }

    let dim = embeddings
        .iter()
        .flatten()
        .map(|e| e.len())
        .next()
        .unwrap_or(0);

    let mut resolved: Vec<&[f32]> = Vec::with_capacity(embeddings.len());
    for embedding in embeddings.iter().copied() {
        match embedding {
            None => {
                return Err(CoreError::DimensionMismatch {
                    expected: dim,
                    actual: 0,
                })
            }
            Some(e) if e.len() != dim => {
                return Err(CoreError::DimensionMismatch {
                    expected: dim,
                    actual: e.len(),
                })
            }
            Some(e) => resolved.push(e),
        }
    }

    let mut combined = vec![0.0f64; dim];
    for (weight, embedding) in weights.iter().zip(&resolved) {
        for (acc, value) in combined.iter_mut().zip(*embedding) {
            *acc += weight * f64::from(*value);
        }
    }
    let combined: Vec<f32> = combined.into_iter().map(|v| v as f32).collect();

    let per_vertex_similarity = resolved
        .iter()
        .map(|embedding| cosine_similarity(&combined, embedding))
        .collect();

    Ok(SemanticBlend::Full {
        combined_embedding: combined,
        per_vertex_similarity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectedPoint;

    fn doc(id: &str, embedding: Option<Vec<f32>>) -> Arc<DocumentRef> {
        Arc::new(DocumentRef::new(
            id,
            id,
            embedding,
            ProjectedPoint::D2([0.0, 0.0]),
        ))
    }

    #[test]
    fn vertex_weight_reproduces_vertex_embedding() {
        let vertices = vec![
            doc("a", Some(vec![1.0, 0.0, 0.0])),
            doc("b", Some(vec![0.0, 1.0, 0.0])),
            doc("c", Some(vec![0.0, 0.0, 1.0])),
        ];
        let blend = interpolate_embeddings(&vertices, &[1.0, 0.0, 0.0]).unwrap();
        let combined = blend.combined_embedding().unwrap();
        assert_eq!(combined, &[1.0, 0.0, 0.0]);

        let sims = blend.per_vertex_similarity().unwrap();
        assert!((sims[0] - 1.0).abs() < 1e-6);
        assert!(sims[1].abs() < 1e-6);
    }

    #[test]
    fn blend_is_weighted_sum() {
        let vertices = vec![
            doc("a", Some(vec![1.0, 0.0])),
            doc("b", Some(vec![0.0, 1.0])),
            doc("c", Some(vec![1.0, 1.0])),
        ];
        let blend = interpolate_embeddings(&vertices, &[0.5, 0.25, 0.25]).unwrap();
        let combined = blend.combined_embedding().unwrap();
        assert!((combined[0] - 0.75).abs() < 1e-6);
        assert!((combined[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn all_missing_embeddings_degrade_to_positional_mix() {
        let vertices = vec![doc("a", None), doc("b", None), doc("c", None)];
        let blend = interpolate_embeddings(&vertices, &[0.4, 0.3, 0.3]).unwrap();
        assert_eq!(blend, SemanticBlend::PositionalMix);
    }

    #[test]
    fn partially_missing_embedding_is_a_mismatch() {
        let vertices = vec![
            doc("a", Some(vec![1.0, 0.0])),
            doc("b", None),
            doc("c", Some(vec![0.0, 1.0])),
        ];
        match interpolate_embeddings(&vertices, &[0.4, 0.3, 0.3]) {
            Err(CoreError::DimensionMismatch { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 0);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn differing_lengths_are_a_mismatch() {
        let vertices = vec![
            doc("a", Some(vec![1.0, 0.0])),
            doc("b", Some(vec![1.0, 0.0, 0.0])),
            doc("c", Some(vec![0.0, 1.0])),
        ];
        match interpolate_embeddings(&vertices, &[0.4, 0.3, 0.3]) {
            Err(CoreError::DimensionMismatch { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn zero_norm_blend_has_zero_similarity() {
        let vertices = vec![
            doc("a", Some(vec![1.0, 0.0])),
            doc("b", Some(vec![-1.0, 0.0])),
            doc("c", Some(vec![0.0, 0.0])),
        ];
        // 0.5 and 0.5 on opposite vectors cancel to the zero vector.
        let blend = interpolate_embeddings(&vertices, &[0.5, 0.5, 0.0]).unwrap();
        let sims = blend.per_vertex_similarity().unwrap();
        assert!(sims.iter().all(|s| *s == 0.0), "zero-norm cosine must be 0");
    }
}
