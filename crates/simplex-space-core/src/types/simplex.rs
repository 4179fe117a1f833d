//! Simplices: triangles and tetrahedra over document vertices.

use std::sync::Arc;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use simplex_space_geometry::Tetrahedron;

use super::document::{Dimension, DocumentRef};

/// An ordered set of `k + 1` document vertices spanning one simplex.
///
/// Vertices are shared `Arc`s so that adjacent simplices in a triangulation
/// reference one snapshot of each document instead of cloning embeddings.
/// A simplex is immutable after construction; rebuilding the tessellation
/// produces entirely new simplices.
///
/// The `degenerate` flag is required, not optional: a near-zero-area
/// triangle or near-zero-volume tetrahedron still participates in queries,
/// answering with the equal-weight fallback, and callers are expected to
/// surface that state rather than silently trust the weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simplex {
    vertices: Vec<Arc<DocumentRef>>,
    /// True when the simplex has near-zero area/volume.
    pub degenerate: bool,
}

impl Simplex {
    pub(crate) fn new(vertices: Vec<Arc<DocumentRef>>, degenerate: bool) -> Self {
        debug_assert!(
            vertices.len() == 3 || vertices.len() == 4,
            "a simplex has 3 or 4 vertices, got {}",
            vertices.len()
        );
        Self {
            vertices,
            degenerate,
        }
    }

    /// The vertices in construction order.
    pub fn vertices(&self) -> &[Arc<DocumentRef>] {
        &self.vertices
    }

    /// Number of vertices: 3 for a triangle, 4 for a tetrahedron.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// The coordinate space this simplex spans.
    pub fn dimension(&self) -> Dimension {
        if self.vertices.len() == 3 {
            Dimension::Two
        } else {
            Dimension::Three
        }
    }

    /// Vertex ids in order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|v| v.id.as_str())
    }

    /// Vertex titles in order.
    pub fn vertex_titles(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|v| v.title.as_str())
    }

    /// The triangle's vertex coordinates, for a 2D simplex.
    pub fn triangle_coords(&self) -> Option<[DVec2; 3]> {
        if self.vertices.len() != 3 {
            return None;
        }
        let a = self.vertices[0].point.as_dvec2()?;
        let b = self.vertices[1].point.as_dvec2()?;
        let c = self.vertices[2].point.as_dvec2()?;
        Some([a, b, c])
    }

    /// The tetrahedron geometry, for a 3D simplex.
    pub fn tetrahedron(&self) -> Option<Tetrahedron> {
        if self.vertices.len() != 4 {
            return None;
        }
        let a = self.vertices[0].point.as_dvec3()?;
        let b = self.vertices[1].point.as_dvec3()?;
        let c = self.vertices[2].point.as_dvec3()?;
        let d = self.vertices[3].point.as_dvec3()?;
        Some(Tetrahedron::new([a, b, c, d]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectedPoint;

    fn doc2(id: &str, x: f64, y: f64) -> Arc<DocumentRef> {
        Arc::new(DocumentRef::new(id, id, None, ProjectedPoint::D2([x, y])))
    }

    #[test]
    fn triangle_accessors() {
        let s = Simplex::new(
            vec![doc2("a", 0.0, 0.0), doc2("b", 1.0, 0.0), doc2("c", 0.0, 1.0)],
            false,
        );
        assert_eq!(s.order(), 3);
        assert_eq!(s.dimension(), Dimension::Two);
        assert!(!s.degenerate);
        assert_eq!(s.vertex_ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);

        let coords = s.triangle_coords().unwrap();
        assert_eq!(coords[1], DVec2::new(1.0, 0.0));
        assert!(s.tetrahedron().is_none());
    }

    #[test]
    fn tetrahedron_accessors() {
        let docs: Vec<Arc<DocumentRef>> = [
            ([0.0, 0.0, 0.0], "a"),
            ([1.0, 0.0, 0.0], "b"),
            ([0.0, 1.0, 0.0], "c"),
            ([0.0, 0.0, 1.0], "d"),
        ]
        .into_iter()
        .map(|(p, id)| Arc::new(DocumentRef::new(id, id, None, ProjectedPoint::D3(p))))
        .collect();

        let s = Simplex::new(docs, false);
        assert_eq!(s.order(), 4);
        assert_eq!(s.dimension(), Dimension::Three);
        let tet = s.tetrahedron().unwrap();
        assert!((tet.signed_volume().abs() - 1.0 / 6.0).abs() < 1e-12);
        assert!(s.triangle_coords().is_none());
    }
}
