//! Contracts for the triangulation and point-location stages.
//!
//! The monotone decomposition is the first stage of a triangulation
//! pipeline feeding a hierarchical point locator. The downstream stages
//! are external collaborators: only their call contracts live here, plus
//! the driver that folds a full polygon through a monotone triangulator.

use crate::polygon::Polygon;
use crate::primitives::{Coord, Edge, Point};
use crate::sweep::decompose;

/// A triangle, referenced by its three directed boundary edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub edges: [Edge; 3],
}

/// Triangulates a single y-monotone polygon.
///
/// Implementations receive faces produced by
/// [`decompose`](crate::sweep::decompose), which are guaranteed
/// counter-clockwise and y-monotone, and return the triangles plus the
/// diagonals they added.
pub trait MonotoneTriangulator<C: Coord> {
    fn triangulate_monotone(&self, face: &Polygon<C>) -> (Vec<Triangle>, Vec<Edge>);
}

/// Answers point-in-polygon queries against a finished subdivision.
///
/// A builder for this (Kirkpatrick-style hierarchy over the triangles,
/// the convex hull and a bounding triangle) is not part of this crate.
pub trait PointLocator<C: Coord> {
    fn contains(&self, point: Point<C>) -> bool;
}

/// Triangulates a simple polygon by decomposing it into y-monotone faces
/// and running each through the supplied triangulator.
///
/// Returns all triangles and all diagonals the triangulator reported,
/// concatenated in face order.
pub fn triangulate_with<C: Coord, T: MonotoneTriangulator<C>>(
    polygon: &Polygon<C>,
    triangulator: &T,
) -> (Vec<Triangle>, Vec<Edge>) {
    let mut triangles = Vec::new();
    let mut diagonals = Vec::new();

    for face in decompose(polygon) {
        let (t, d) = triangulator.triangulate_monotone(&face);
        triangles.extend(t);
        diagonals.extend(d);
    }

    (triangles, diagonals)
}
