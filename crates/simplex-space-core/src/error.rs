//! Error types for simplex-space-core.
//!
//! Only data-integrity problems are errors here. Geometric degeneracies
//! (collinear triangles, coplanar tetrahedra) recover with documented
//! fallback values so the caller can keep rendering, and a failed build is
//! an uninitialized [`crate::Tessellation`] carrying a reason, not an error.
//! What does surface is anything that would otherwise silently corrupt a
//! blended embedding, mismatched embedding dimensions above all.

use thiserror::Error;

/// Top-level error type for engine operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Vertex embeddings disagree in length, or one is missing while its
    /// siblings are present. Guessing here would corrupt the blend, so the
    /// mismatch is surfaced instead of recovered.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Embedding length shared by the rest of the simplex.
        expected: usize,
        /// Offending length (0 when the embedding is absent).
        actual: usize,
    },

    /// A document record failed boundary validation.
    #[error("invalid document '{id}': {reason}")]
    InvalidDocument {
        /// The document id as supplied by the caller.
        id: String,
        /// What was wrong with the record.
        reason: String,
    },

    /// Configuration failed validation.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Error during serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

/// Result type alias for engine operations.
pub type CoreResult<T> = Result<T, CoreError>;
