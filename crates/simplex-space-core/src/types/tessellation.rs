//! The tessellation: simplices plus document bookkeeping for one selection.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use simplex_space_geometry::DelaunayTriangulation;

use crate::config::EngineConfig;
use crate::types::{Dimension, DocumentRef, Simplex};

/// Why a build produced an uninitialized tessellation.
///
/// These are soft outcomes, not errors: the caller keeps a renderable
/// tessellation value either way and decides what to tell the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum BuildFailure {
    /// Too few valid documents survived filtering. The 2D path needs at
    /// least 3; the 3D path supports exactly 4.
    InsufficientPoints {
        /// Number of valid documents required.
        required: usize,
        /// Number of valid documents remaining after filtering.
        got: usize,
    },

    /// More than three points were supplied but every one of them is
    /// collinear, so no triangulation exists.
    DegenerateGeometry {
        /// Diagnostic detail.
        detail: String,
    },
}

impl BuildFailure {
    /// Stable machine-readable reason token.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildFailure::InsufficientPoints { .. } => "insufficient_points",
            BuildFailure::DegenerateGeometry { .. } => "degenerate_geometry",
        }
    }
}

impl fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildFailure::InsufficientPoints { required, got } => {
                write!(f, "insufficient points: need {required}, got {got}")
            }
            BuildFailure::DegenerateGeometry { detail } => {
                write!(f, "degenerate geometry: {detail}")
            }
        }
    }
}

/// The immutable product of one committed document selection.
///
/// Owns the filtered document snapshots, the simplices spanning them, and
/// (for the multi-triangle 2D case) the triangulation structure used for
/// point location. A tessellation is built once and never mutated; any
/// change to the selection means building a fresh one, which is atomic by
/// construction. Queries borrow it immutably, so concurrent analyses need
/// no coordination.
#[derive(Debug, Clone)]
pub struct Tessellation {
    pub(crate) state: TessellationState,
}

#[derive(Debug, Clone)]
pub(crate) enum TessellationState {
    Ready {
        dimension: Dimension,
        documents: Vec<Arc<DocumentRef>>,
        simplices: Vec<Simplex>,
        /// Present only on the multi-triangle 2D path; its triangle order
        /// matches `simplices`.
        triangulation: Option<DelaunayTriangulation>,
        config: EngineConfig,
    },
    Uninitialized {
        reason: BuildFailure,
    },
}

impl Tessellation {
    pub(crate) fn ready(
        dimension: Dimension,
        documents: Vec<Arc<DocumentRef>>,
        simplices: Vec<Simplex>,
        triangulation: Option<DelaunayTriangulation>,
        config: EngineConfig,
    ) -> Self {
        Self {
            state: TessellationState::Ready {
                dimension,
                documents,
                simplices,
                triangulation,
                config,
            },
        }
    }

    pub(crate) fn uninitialized(reason: BuildFailure) -> Self {
        Self {
            state: TessellationState::Uninitialized { reason },
        }
    }

    /// Whether the build produced usable simplices.
    pub fn initialized(&self) -> bool {
        matches!(self.state, TessellationState::Ready { .. })
    }

    /// The failure reason of an uninitialized tessellation.
    pub fn reason(&self) -> Option<&BuildFailure> {
        match &self.state {
            TessellationState::Ready { .. } => None,
            TessellationState::Uninitialized { reason } => Some(reason),
        }
    }

    /// The coordinate space, when initialized.
    pub fn dimension(&self) -> Option<Dimension> {
        match &self.state {
            TessellationState::Ready { dimension, .. } => Some(*dimension),
            TessellationState::Uninitialized { .. } => None,
        }
    }

    /// The document snapshots that survived boundary filtering, in input
    /// order. Empty for an uninitialized tessellation.
    pub fn documents(&self) -> &[Arc<DocumentRef>] {
        match &self.state {
            TessellationState::Ready { documents, .. } => documents,
            TessellationState::Uninitialized { .. } => &[],
        }
    }

    /// The simplices, in triangulation order. Empty when uninitialized.
    pub fn simplices(&self) -> &[Simplex] {
        match &self.state {
            TessellationState::Ready { simplices, .. } => simplices,
            TessellationState::Uninitialized { .. } => &[],
        }
    }

    pub(crate) fn config(&self) -> Option<&EngineConfig> {
        match &self.state {
            TessellationState::Ready { config, .. } => Some(config),
            TessellationState::Uninitialized { .. } => None,
        }
    }

    pub(crate) fn triangulation(&self) -> Option<&DelaunayTriangulation> {
        match &self.state {
            TessellationState::Ready { triangulation, .. } => triangulation.as_ref(),
            TessellationState::Uninitialized { .. } => None,
        }
    }
}
