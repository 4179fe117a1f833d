//! Simplex-based semantic interpolation engine.
//!
//! Place a small set of documents as vertices of a geometric structure (a
//! triangle tessellation in 2D, a tetrahedron in 3D), then query any point
//! inside it to get a weighted semantic blend of the source documents:
//! barycentric weights, a combined embedding, per-vertex similarity, and a
//! descriptive classification of the mix.
//!
//! # Modules
//!
//! - [`types`]: `DocumentRef`, `Simplex`, `Tessellation`, `AnalysisResult`
//! - [`build`]: tessellation construction strategies
//! - [`semantic`]: interpolation, classification, similarity, knn, graphs
//! - [`config`]: tolerances and classifier thresholds
//! - [`error`]: error types and the `CoreResult` alias
//!
//! # Example
//!
//! ```
//! use simplex_space_core::{build_tessellation, EngineConfig};
//! use simplex_space_core::types::{DocumentRef, ProjectedPoint};
//!
//! let docs = vec![
//!     DocumentRef::new("a", "Alpha", Some(vec![1.0, 0.0]), ProjectedPoint::D2([0.0, 0.0])),
//!     DocumentRef::new("b", "Beta", Some(vec![0.0, 1.0]), ProjectedPoint::D2([1.0, 0.0])),
//!     DocumentRef::new("c", "Gamma", Some(vec![1.0, 1.0]), ProjectedPoint::D2([0.0, 1.0])),
//! ];
//!
//! let tessellation = build_tessellation(docs, &EngineConfig::default());
//! assert!(tessellation.initialized());
//!
//! let result = tessellation
//!     .analyze(&ProjectedPoint::D2([0.25, 0.25]))
//!     .unwrap()
//!     .expect("interior point is located");
//! let total: f64 = result.weights.iter().sum();
//! assert!((total - 1.0).abs() < 1e-6);
//! ```
//!
//! The engine is an in-process library: no I/O, no network surface, no
//! persistence. Embeddings and projected coordinates are supplied by
//! external collaborators; rendering the results is the caller's job.

mod analyze;
pub mod build;
pub mod config;
pub mod error;
mod locate;
pub mod semantic;
pub mod types;

pub use build::build_tessellation;
pub use config::EngineConfig;
pub use error::{CoreError, CoreResult};
pub use types::{
    AnalysisResult, BuildFailure, Classification, ClassificationKind, Dimension, DocumentRef,
    ProjectedPoint, SemanticBlend, Simplex, Tessellation,
};

/// Free-function form of [`Tessellation::locate`].
pub fn locate<'a>(tessellation: &'a Tessellation, point: &ProjectedPoint) -> Option<&'a Simplex> {
    tessellation.locate(point)
}

/// Free-function form of [`Tessellation::analyze`].
pub fn analyze(
    tessellation: &Tessellation,
    point: &ProjectedPoint,
) -> CoreResult<Option<AnalysisResult>> {
    tessellation.analyze(point)
}
