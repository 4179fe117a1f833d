//! Nearest-neighbor search over corpus embeddings.

use std::sync::Arc;

use serde::Serialize;

use crate::types::{DocumentRef, Tessellation};

use super::similarity::cosine_similarity;

/// Similarity above `1 - SELF_TOLERANCE` is treated as the query itself
/// and excluded from results.
const SELF_TOLERANCE: f32 = 1e-6;

/// One nearest-neighbor hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    /// Index into the corpus the search ran over.
    pub index: usize,
    /// Cosine similarity to the query.
    pub score: f32,
}

/// Find the `k` corpus embeddings most similar to `query`.
///
/// Results come back in descending similarity order. Entries whose
/// similarity is ~1.0 are assumed to be the query itself and skipped, so a
/// query that is a member of the corpus never returns itself. Fewer than
/// `k` results are returned when the corpus is small.
pub fn find_k_nearest(query: &[f32], corpus: &[Vec<f32>], k: usize) -> Vec<Neighbor> {
    let mut scored: Vec<Neighbor> = corpus
        .iter()
        .enumerate()
        .map(|(index, embedding)| Neighbor {
            index,
            score: cosine_similarity(query, embedding),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    scored
        .into_iter()
        .filter(|n| (1.0 - n.score).abs() > SELF_TOLERANCE)
        .take(k)
        .collect()
}

impl Tessellation {
    /// The document closest to `embedding`, excluding exact matches.
    ///
    /// This is the "semantic center" readout: blend some embeddings, then
    /// ask which document the blend lands nearest to. Documents without
    /// embeddings are skipped; `None` when no candidate remains.
    pub fn semantic_center(&self, embedding: &[f32]) -> Option<(Arc<DocumentRef>, f32)> {
        let candidates: Vec<(usize, &Arc<DocumentRef>)> = self
            .documents()
            .iter()
            .enumerate()
            .filter(|(_, d)| d.embedding.is_some())
            .collect();

        let corpus: Vec<Vec<f32>> = candidates
            .iter()
            .filter_map(|(_, d)| d.embedding.clone())
            .collect();

        let nearest = find_k_nearest(embedding, &corpus, 1).into_iter().next()?;
        let (_, doc) = candidates.get(nearest.index)?;
        Some((Arc::clone(doc), nearest.score))
    }
}
