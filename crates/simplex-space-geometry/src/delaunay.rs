//! Incremental planar Delaunay triangulation.
//!
//! Bowyer-Watson construction: seed a super-triangle enclosing every input
//! point, insert points one at a time, carve out the cavity of triangles
//! whose circumcircle contains the new point, and re-fan the cavity boundary
//! from the inserted point. Super-triangle faces are dropped at the end.
//!
//! Point counts here are small (one tessellation covers a handful to a few
//! dozen documents), so insertion finds the cavity by a circumcircle scan.
//! Point location after construction is the structure's own walk query:
//! starting from an arbitrary triangle, step across whichever edge has the
//! query point on its outer side until no such edge exists.
//!
//! Triangles are kept counter-clockwise throughout; the walk and the
//! circumcircle predicate both rely on that winding.

use glam::DVec2;
use thiserror::Error;
use tracing::{debug, trace};

use crate::primitives::{in_circumcircle, orient2d};

/// Points closer than this are treated as duplicates during insertion.
const DUPLICATE_EPSILON: f64 = 1e-12;

/// Errors raised while constructing a triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// Fewer than three points were supplied.
    #[error("Delaunay triangulation needs at least 3 points, got {got}")]
    TooFewPoints {
        /// Number of points supplied.
        got: usize,
    },

    /// Every supplied point is collinear; no triangle exists.
    #[error("all {count} points are collinear, no triangulation exists")]
    Collinear {
        /// Number of points supplied.
        count: usize,
    },
}

/// A planar Delaunay triangulation over an indexed point set.
///
/// Triangle vertices are indices into the original point slice, so callers
/// can map them back to whatever identity the points carry.
#[derive(Debug, Clone)]
pub struct DelaunayTriangulation {
    points: Vec<DVec2>,
    triangles: Vec<[usize; 3]>,
    /// `neighbors[t][e]` is the triangle sharing edge `e` of triangle `t`,
    /// where edge `e` runs from vertex `e` to vertex `(e + 1) % 3`.
    neighbors: Vec<[Option<usize>; 3]>,
}

impl DelaunayTriangulation {
    /// Triangulate a point set.
    ///
    /// Duplicate points (within 1e-12) are skipped; their indices simply
    /// never appear in any triangle. Returns [`TriangulationError::Collinear`]
    /// when no non-degenerate triangle survives.
    pub fn build(points: &[DVec2]) -> Result<Self, TriangulationError> {
        if points.len() < 3 {
            return Err(TriangulationError::TooFewPoints { got: points.len() });
        }

        let mut working: Vec<DVec2> = points.to_vec();
        let super_base = working.len();
        let [s0, s1, s2] = super_triangle(points);
        working.extend([s0, s1, s2]);

        // Super-triangle is CCW by construction.
        let mut triangles: Vec<[usize; 3]> = vec![[super_base, super_base + 1, super_base + 2]];

        for (idx, &p) in points.iter().enumerate() {
            if points[..idx]
                .iter()
                .any(|q| (p - *q).length_squared() < DUPLICATE_EPSILON * DUPLICATE_EPSILON)
            {
                trace!(point = idx, "skipping duplicate point");
                continue;
            }

            // Cavity: every triangle whose circumcircle contains p.
            let mut bad = Vec::new();
            for (t, tri) in triangles.iter().enumerate() {
                let [a, b, c] = *tri;
                if in_circumcircle(working[a], working[b], working[c], p) {
                    bad.push(t);
                }
            }

            // Boundary of the cavity: edges used by exactly one bad triangle.
            let mut boundary: Vec<(usize, usize)> = Vec::new();
            for &t in &bad {
                let [a, b, c] = triangles[t];
                for edge in [(a, b), (b, c), (c, a)] {
                    if let Some(pos) = boundary
                        .iter()
                        .position(|&(x, y)| (x, y) == (edge.1, edge.0))
                    {
                        boundary.swap_remove(pos);
                    } else {
                        boundary.push(edge);
                    }
                }
            }

            trace!(point = idx, cavity = bad.len(), boundary = boundary.len(), "inserting");

            for &t in bad.iter().rev() {
                triangles.swap_remove(t);
            }

            for (a, b) in boundary {
                let tri = ccw([a, b, idx], &working);
                triangles.push(tri);
            }
        }

        // Drop every face that still touches the super-triangle.
        triangles.retain(|tri| tri.iter().all(|&v| v < super_base));

        if triangles.is_empty() {
            return Err(TriangulationError::Collinear {
                count: points.len(),
            });
        }

        let neighbors = build_adjacency(&triangles);
        debug!(
            points = points.len(),
            triangles = triangles.len(),
            "built Delaunay triangulation"
        );

        Ok(Self {
            points: points.to_vec(),
            triangles,
            neighbors,
        })
    }

    /// The triangulated faces, each a CCW triple of point indices.
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// The point set the triangulation was built over.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Locate the triangle containing `p` by walking the adjacency.
    ///
    /// Returns the triangle's index into [`Self::triangles`], or `None` when
    /// `p` falls outside the convex hull. Points on shared edges resolve to
    /// whichever incident triangle the walk reaches first.
    pub fn locate(&self, p: DVec2) -> Option<usize> {
        let mut current = 0;
        // A straight walk visits each triangle at most once; anything past
        // that means the walk is cycling on a flat mesh, so fall back to a
        // scan of every face.
        let max_steps = self.triangles.len() + 1;

        for _ in 0..max_steps {
            match self.step(current, p) {
                WalkStep::Inside => return Some(current),
                WalkStep::Across(next) => current = next,
                WalkStep::OutsideHull => return None,
            }
        }

        trace!("walk cycled, falling back to linear scan");
        self.triangles
            .iter()
            .position(|tri| self.triangle_contains(tri, p))
    }

    fn step(&self, t: usize, p: DVec2) -> WalkStep {
        let tri = self.triangles[t];
        for e in 0..3 {
            let a = self.points[tri[e]];
            let b = self.points[tri[(e + 1) % 3]];
            if orient2d(a, b, p) < 0.0 {
                return match self.neighbors[t][e] {
                    Some(next) => WalkStep::Across(next),
                    None => WalkStep::OutsideHull,
                };
            }
        }
        WalkStep::Inside
    }

    fn triangle_contains(&self, tri: &[usize; 3], p: DVec2) -> bool {
        (0..3).all(|e| {
            let a = self.points[tri[e]];
            let b = self.points[tri[(e + 1) % 3]];
            orient2d(a, b, p) >= 0.0
        })
    }
}

enum WalkStep {
    Inside,
    Across(usize),
    OutsideHull,
}

/// Orient a triangle counter-clockwise, leaving degenerate ones untouched.
fn ccw(tri: [usize; 3], points: &[DVec2]) -> [usize; 3] {
    if orient2d(points[tri[0]], points[tri[1]], points[tri[2]]) < 0.0 {
        [tri[0], tri[2], tri[1]]
    } else {
        tri
    }
}

/// Enclose all points in a triangle far larger than their bounding box.
fn super_triangle(points: &[DVec2]) -> [DVec2; 3] {
    let mut min = points[0];
    let mut max = points[0];
    for p in points {
        min = min.min(*p);
        max = max.max(*p);
    }
    let center = (min + max) * 0.5;
    let span = (max - min).max_element().max(1.0) * 20.0;

    [
        DVec2::new(center.x - 2.0 * span, center.y - span),
        DVec2::new(center.x + 2.0 * span, center.y - span),
        DVec2::new(center.x, center.y + 2.0 * span),
    ]
}

/// Pair up triangles that share an edge.
fn build_adjacency(triangles: &[[usize; 3]]) -> Vec<[Option<usize>; 3]> {
    let mut neighbors = vec![[None; 3]; triangles.len()];

    for (t, tri) in triangles.iter().enumerate() {
        for e in 0..3 {
            if neighbors[t][e].is_some() {
                continue;
            }
            let edge = (tri[e], tri[(e + 1) % 3]);
            for (u, other) in triangles.iter().enumerate() {
                if u == t {
                    continue;
                }
                for f in 0..3 {
                    let candidate = (other[f], other[(f + 1) % 3]);
                    if candidate == (edge.1, edge.0) {
                        neighbors[t][e] = Some(u);
                        neighbors[u][f] = Some(t);
                    }
                }
            }
        }
    }

    neighbors
}
