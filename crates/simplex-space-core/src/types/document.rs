//! Document records and their projected coordinates.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Dimensionality of a tessellation's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Planar: triangles over 2D projected points.
    Two,
    /// Spatial: one tetrahedron over 3D projected points.
    Three,
}

impl Dimension {
    /// Vertices per simplex: 3 for a triangle, 4 for a tetrahedron.
    pub fn simplex_order(&self) -> usize {
        match self {
            Dimension::Two => 3,
            Dimension::Three => 4,
        }
    }

    /// Minimum number of valid documents a build needs.
    pub fn min_documents(&self) -> usize {
        self.simplex_order()
    }
}

/// A low-dimensional coordinate produced by an external projection step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectedPoint {
    /// A 2D coordinate.
    D2([f64; 2]),
    /// A 3D coordinate.
    D3([f64; 3]),
}

impl ProjectedPoint {
    /// The coordinate space this point lives in.
    pub fn dimension(&self) -> Dimension {
        match self {
            ProjectedPoint::D2(_) => Dimension::Two,
            ProjectedPoint::D3(_) => Dimension::Three,
        }
    }

    /// The point as a 2D vector, when it is one.
    pub fn as_dvec2(&self) -> Option<DVec2> {
        match self {
            ProjectedPoint::D2([x, y]) => Some(DVec2::new(*x, *y)),
            ProjectedPoint::D3(_) => None,
        }
    }

    /// The point as a 3D vector, when it is one.
    pub fn as_dvec3(&self) -> Option<DVec3> {
        match self {
            ProjectedPoint::D2(_) => None,
            ProjectedPoint::D3([x, y, z]) => Some(DVec3::new(*x, *y, *z)),
        }
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            ProjectedPoint::D2(c) => c.iter().all(|v| v.is_finite()),
            ProjectedPoint::D3(c) => c.iter().all(|v| v.is_finite()),
        }
    }
}

impl From<DVec2> for ProjectedPoint {
    fn from(v: DVec2) -> Self {
        ProjectedPoint::D2([v.x, v.y])
    }
}

impl From<DVec3> for ProjectedPoint {
    fn from(v: DVec3) -> Self {
        ProjectedPoint::D3([v.x, v.y, v.z])
    }
}

/// An immutable snapshot of one document at tessellation-build time.
///
/// The embedding and projected point are supplied by external collaborators
/// (an embedding model and a dimensionality-reduction step); this engine
/// never computes either. The embedding is optional so that a selection
/// without embeddings can still be tessellated and analyzed positionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Caller-supplied unique identifier.
    pub id: String,

    /// Human-readable title, used in classification descriptions.
    pub title: String,

    /// High-dimensional embedding. All embeddings within one tessellation
    /// must share the same length.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,

    /// Externally projected 2D or 3D coordinate.
    pub point: ProjectedPoint,
}

impl DocumentRef {
    /// Build a record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        embedding: Option<Vec<f32>>,
        point: ProjectedPoint,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            embedding,
            point,
        }
    }

    /// Boundary validation: non-empty id, finite point, and a non-empty
    /// embedding when one is present.
    pub fn validate(&self) -> CoreResult<()> {
        if self.id.is_empty() {
            return Err(CoreError::InvalidDocument {
                id: self.id.clone(),
                reason: "id must not be empty".to_string(),
            });
        }
        if !self.point.is_finite() {
            return Err(CoreError::InvalidDocument {
                id: self.id.clone(),
                reason: "projected point has non-finite components".to_string(),
            });
        }
        if let Some(embedding) = &self.embedding {
            if embedding.is_empty() {
                return Err(CoreError::InvalidDocument {
                    id: self.id.clone(),
                    reason: "embedding is present but empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_dimension_and_conversion() {
        let p2 = ProjectedPoint::D2([1.0, 2.0]);
        assert_eq!(p2.dimension(), Dimension::Two);
        assert_eq!(p2.as_dvec2(), Some(DVec2::new(1.0, 2.0)));
        assert_eq!(p2.as_dvec3(), None);

        let p3 = ProjectedPoint::D3([1.0, 2.0, 3.0]);
        assert_eq!(p3.dimension(), Dimension::Three);
        assert_eq!(p3.as_dvec3(), Some(DVec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn simplex_order_per_dimension() {
        assert_eq!(Dimension::Two.simplex_order(), 3);
        assert_eq!(Dimension::Three.simplex_order(), 4);
    }

    #[test]
    fn validate_accepts_well_formed_record() {
        let doc = DocumentRef::new(
            "a",
            "Document A",
            Some(vec![0.1, 0.2]),
            ProjectedPoint::D2([0.0, 0.0]),
        );
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_id() {
        let doc = DocumentRef::new("", "t", None, ProjectedPoint::D2([0.0, 0.0]));
        assert!(matches!(
            doc.validate(),
            Err(CoreError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn validate_rejects_nan_point() {
        let doc = DocumentRef::new("a", "t", None, ProjectedPoint::D2([f64::NAN, 0.0]));
        assert!(doc.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_embedding() {
        let doc = DocumentRef::new("a", "t", Some(vec![]), ProjectedPoint::D2([0.0, 0.0]));
        assert!(doc.validate().is_err());
    }

    #[test]
    fn document_round_trips_through_json() {
        let doc = DocumentRef::new(
            "a",
            "Document A",
            Some(vec![0.5, -0.5]),
            ProjectedPoint::D3([1.0, 2.0, 3.0]),
        );
        let json = serde_json::to_string(&doc).unwrap();
        let back: DocumentRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
