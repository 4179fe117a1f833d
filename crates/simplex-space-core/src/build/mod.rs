//! Tessellation construction.
//!
//! The builder filters the incoming records at the boundary (wrong
//! dimensionality, non-finite points, duplicate ids or coordinates), picks
//! a construction strategy from the surviving vertex count, and produces
//! either a ready tessellation or an uninitialized one carrying a reason.
//! It never panics and never throws: both failure modes are ordinary
//! values the caller can render.

mod strategy;

use std::sync::Arc;

use tracing::debug;

use crate::config::EngineConfig;
use crate::types::{BuildFailure, Dimension, DocumentRef, Tessellation};

use strategy::select_strategy;

/// Build a tessellation from a committed document selection.
///
/// The target dimensionality is set by the first record with a valid
/// point; records of the other dimensionality are filtered out along with
/// invalid ones. Replacement is atomic by construction: the returned value
/// is complete before the caller ever sees it, and nothing from a prior
/// build is reused.
pub fn build_tessellation(documents: Vec<DocumentRef>, config: &EngineConfig) -> Tessellation {
    let total = documents.len();
    let dimension = documents
        .iter()
        .find(|d| d.validate().is_ok())
        .map(|d| d.point.dimension());

    let Some(dimension) = dimension else {
        debug!(total, "no valid documents in selection");
        return Tessellation::uninitialized(BuildFailure::InsufficientPoints {
            required: 3,
            got: 0,
        });
    };

    let valid = filter_documents(documents, dimension);
    debug!(
        total,
        valid = valid.len(),
        ?dimension,
        "filtered document selection"
    );

    let strategy = match select_strategy(dimension, valid.len()) {
        Ok(s) => s,
        Err(reason) => return Tessellation::uninitialized(reason),
    };
    debug!(strategy = strategy.name(), "selected build strategy");

    match strategy.build(&valid, config) {
        Ok(built) => Tessellation::ready(
            dimension,
            valid,
            built.simplices,
            built.triangulation,
            config.clone(),
        ),
        Err(reason) => Tessellation::uninitialized(reason),
    }
}

impl Tessellation {
    /// Method form of [`build_tessellation`].
    pub fn build(documents: Vec<DocumentRef>, config: &EngineConfig) -> Tessellation {
        build_tessellation(documents, config)
    }
}

/// Drop records that fail validation, carry the wrong dimensionality, or
/// duplicate an earlier record's id or projected coordinate.
fn filter_documents(documents: Vec<DocumentRef>, dimension: Dimension) -> Vec<Arc<DocumentRef>> {
    let mut kept: Vec<Arc<DocumentRef>> = Vec::with_capacity(documents.len());

    for doc in documents {
        if let Err(err) = doc.validate() {
            debug!(%err, "dropping invalid document");
            continue;
        }
        if doc.point.dimension() != dimension {
            debug!(id = %doc.id, "dropping document of mismatched dimensionality");
            continue;
        }
        if kept.iter().any(|k| k.id == doc.id) {
            debug!(id = %doc.id, "dropping duplicate document id");
            continue;
        }
        if kept.iter().any(|k| k.point == doc.point) {
            debug!(id = %doc.id, "dropping duplicate projected point");
            continue;
        }
        kept.push(Arc::new(doc));
    }

    kept
}
