//! Domain types for the interpolation engine.

mod analysis;
mod document;
mod simplex;
mod tessellation;

pub use analysis::{AnalysisResult, Classification, ClassificationKind, SemanticBlend};
pub use document::{Dimension, DocumentRef, ProjectedPoint};
pub use simplex::Simplex;
pub use tessellation::{BuildFailure, Tessellation};
