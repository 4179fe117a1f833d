//! Semantic computations over embeddings.
//!
//! - [`similarity`]: cosine similarity, pairwise matrices, centroids
//! - [`interpolate`]: weighted embedding blends with per-vertex similarity
//! - [`classify`]: the descriptive weight-vector taxonomy
//! - [`knn`]: nearest-neighbor search with self-exclusion
//! - [`graph`]: threshold-gated similarity graphs over a document set

pub mod classify;
pub mod graph;
pub mod interpolate;
pub mod knn;
pub mod similarity;

pub use classify::classify;
pub use graph::{SemanticEdge, SemanticGraph};
pub use interpolate::interpolate_embeddings;
pub use knn::{find_k_nearest, Neighbor};
pub use similarity::{cosine_similarity, embedding_centroid, similarity_matrix};
