//! Per-query analysis results.

use serde::{Deserialize, Serialize};

use super::simplex::Simplex;

/// The semantic part of an analysis: either a full blend or the degraded
/// positional fallback.
///
/// This is an enum rather than a pair of optional fields so callers are
/// forced to handle the degraded shape. `PositionalMix` appears when none
/// of the simplex vertices carry embeddings; the weights in the surrounding
/// [`AnalysisResult`] are still meaningful as a purely positional mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SemanticBlend {
    /// The full semantic result.
    Full {
        /// `combined[j] = Σ_i weight_i · embedding_i[j]`.
        combined_embedding: Vec<f32>,
        /// Cosine similarity of the combined embedding against each vertex
        /// embedding, in vertex order.
        per_vertex_similarity: Vec<f32>,
    },
    /// No vertex carried an embedding; only the weights are available.
    PositionalMix,
}

impl SemanticBlend {
    /// The combined embedding, when the blend is full.
    pub fn combined_embedding(&self) -> Option<&[f32]> {
        match self {
            SemanticBlend::Full {
                combined_embedding, ..
            } => Some(combined_embedding),
            SemanticBlend::PositionalMix => None,
        }
    }

    /// Per-vertex similarities, when the blend is full.
    pub fn per_vertex_similarity(&self) -> Option<&[f32]> {
        match self {
            SemanticBlend::Full {
                per_vertex_similarity,
                ..
            } => Some(per_vertex_similarity),
            SemanticBlend::PositionalMix => None,
        }
    }
}

/// Descriptive category of one weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationKind {
    /// Triangle: every weight moderate and close together.
    BalancedIntersection,
    /// Triangle: one vertex dominates with no other real influence.
    SingleDocument,
    /// Triangle: one vertex dominates but others still contribute.
    DominantWithInfluence,
    /// Triangle: two strong vertices, the third negligible.
    PairedIntersection,
    /// Triangle: anything else.
    ComplexWeightedCombination,
    /// Tetrahedron: one vertex dominates.
    Dominant,
    /// Tetrahedron: two vertices carry almost all the weight.
    PairedDocuments,
    /// Tetrahedron: anything else.
    ComplexMix,
}

impl ClassificationKind {
    /// Stable snake_case token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationKind::BalancedIntersection => "balanced_intersection",
            ClassificationKind::SingleDocument => "single_document",
            ClassificationKind::DominantWithInfluence => "dominant_with_influence",
            ClassificationKind::PairedIntersection => "paired_intersection",
            ClassificationKind::ComplexWeightedCombination => "complex_weighted_combination",
            ClassificationKind::Dominant => "dominant",
            ClassificationKind::PairedDocuments => "paired_documents",
            ClassificationKind::ComplexMix => "complex_mix",
        }
    }
}

/// Classifier output: a category plus a human-readable description naming
/// the vertices involved. Purely descriptive; nothing downstream branches
/// on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The matched category.
    #[serde(rename = "type")]
    pub kind: ClassificationKind,
    /// Explanation naming the dominant/contributing vertices.
    pub description: String,
}

/// Everything the engine can say about one query point.
///
/// Freshly computed per query and never cached; holding one across a
/// tessellation rebuild is safe because it shares nothing mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The simplex containing (or, in 3D, picked for) the query point.
    pub simplex: Simplex,

    /// Barycentric weights, one per vertex, summing to ~1.
    pub weights: Vec<f64>,

    /// True when the simplex is degenerate or the equal-weight fallback
    /// fired. Required so the fallback cannot pass unnoticed.
    pub degenerate: bool,

    /// 3D only: whether the query point is inside the tetrahedron. Weights
    /// are computed for exterior points too, so this is deliberately a
    /// separate field rather than being folded into the weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_inside: Option<bool>,

    /// The semantic blend, full or degraded.
    pub blend: SemanticBlend,

    /// Descriptive classification of the weight vector.
    pub classification: Classification,
}
