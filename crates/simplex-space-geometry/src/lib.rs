//! Geometric layer for simplex-space.
//!
//! This crate owns the pure geometry the interpolation engine is built on:
//!
//! - [`barycentric`]: barycentric weight solvers for triangles and tetrahedra,
//!   including the documented equal-weight fallback for degenerate simplices
//! - [`delaunay`]: incremental planar Delaunay triangulation with a native
//!   walk-based point-location query
//! - [`tetra`]: tetrahedron surface mesh with ray picking and the four-face
//!   sign-consistency containment test
//! - [`primitives`]: shared orientation / circumcircle / volume predicates
//!
//! Everything here is synchronous, allocation-light, and free of side effects.
//! Coordinates are `f64` (`glam::DVec2` / `glam::DVec3`); semantic concerns
//! (documents, embeddings) live in `simplex-space-core`.

pub mod barycentric;
pub mod delaunay;
pub mod primitives;
pub mod tetra;

pub use barycentric::{tetrahedron_weights, triangle_weights, BarycentricWeights};
pub use delaunay::{DelaunayTriangulation, TriangulationError};
pub use tetra::{RayHit, Tetrahedron};

/// Re-exported vector types so downstream crates agree on the math stack.
pub use glam::{DVec2, DVec3};
