//! Threshold-gated similarity graphs.
//!
//! Connect every pair of documents whose embedding similarity reaches a
//! threshold, and keep per-node degree counts. The rendering layer draws
//! this; here it is plain adjacency over document indices.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::types::{DocumentRef, Tessellation};

use super::similarity::cosine_similarity;

/// An undirected edge between two documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SemanticEdge {
    /// Node index of one endpoint.
    pub source: usize,
    /// Node index of the other endpoint.
    pub target: usize,
    /// Cosine similarity that put the edge over the threshold.
    pub similarity: f32,
}

/// A similarity graph over one document set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticGraph {
    labels: Vec<String>,
    edges: Vec<SemanticEdge>,
    degrees: Vec<usize>,
    threshold: f32,
}

impl SemanticGraph {
    /// Build the graph over every document that carries an embedding.
    ///
    /// Nodes are those documents (labelled by title, in input order); an
    /// edge connects each pair whose cosine similarity is at least
    /// `threshold`.
    pub fn build(documents: &[Arc<DocumentRef>], threshold: f32) -> Self {
        let embedded: Vec<&Arc<DocumentRef>> = documents
            .iter()
            .filter(|d| d.embedding.is_some())
            .collect();

        let labels: Vec<String> = embedded.iter().map(|d| d.title.clone()).collect();
        let mut edges = Vec::new();
        let mut degrees = vec![0usize; embedded.len()];

        for i in 0..embedded.len() {
            for j in (i + 1)..embedded.len() {
                let (Some(a), Some(b)) = (&embedded[i].embedding, &embedded[j].embedding) else {
                    continue;
                };
                let similarity = cosine_similarity(a, b);
                if similarity >= threshold {
                    edges.push(SemanticEdge {
                        source: i,
                        target: j,
                        similarity,
                    });
                    degrees[i] += 1;
                    degrees[j] += 1;
                }
            }
        }

        debug!(
            nodes = labels.len(),
            edges = edges.len(),
            threshold,
            "built semantic graph"
        );

        Self {
            labels,
            edges,
            degrees,
            threshold,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// All edges.
    pub fn edges(&self) -> &[SemanticEdge] {
        &self.edges
    }

    /// Degree of one node.
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.degrees.get(node).copied()
    }

    /// The threshold the graph was built with.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// The `n` best-connected nodes as `(label, degree)`, descending by
    /// degree, zero-degree nodes excluded.
    pub fn top_connected(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .labels
            .iter()
            .zip(&self.degrees)
            .filter(|(_, degree)| **degree > 0)
            .map(|(label, degree)| (label.as_str(), *degree))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl Tessellation {
    /// Build a similarity graph over this tessellation's documents.
    pub fn semantic_graph(&self, threshold: f32) -> SemanticGraph {
        SemanticGraph::build(self.documents(), threshold)
    }
}
