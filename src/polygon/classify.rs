//! Vertex classification for the top-to-bottom sweep.

use crate::primitives::{orient2d, Coord, Orientation, Point};
use std::f64::consts::PI;

/// Role of a vertex relative to the descending sweep line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexType {
    /// Both neighbors below, interior angle < π; opens a new region.
    Start,
    /// Both neighbors below, interior angle > π; splits a region and
    /// always receives a diagonal.
    Split,
    /// Both neighbors above, interior angle < π; closes a region.
    End,
    /// Both neighbors above, interior angle > π; two regions meet and a
    /// later vertex must connect back to it.
    Merge,
    /// One neighbor above, one below.
    Regular,
}

/// Returns true if `a` is processed before `b` by the sweep.
///
/// The sweep runs top to bottom, left to right: descending y, ties broken
/// by ascending x. This single rule orders the event queue, decides which
/// neighbors count as "below" a vertex, and picks the interior side at
/// regular vertices, so ties cannot classify inconsistently.
#[inline]
pub fn sweep_before<C: Coord>(a: &Point<C>, b: &Point<C>) -> bool {
    a.y > b.y || (a.y == b.y && a.x < b.x)
}

/// Classifies a vertex given its polygon-order neighbors.
///
/// `prev` and `next` are the predecessor and successor of `v` walking the
/// polygon counter-clockwise. The convex/reflex decision uses the exact
/// orientation predicate rather than the floating interior angle, so
/// classification stays consistent with every other turn test.
///
/// This is a pure function: classifying the same triple always yields the
/// same label, independent of sweep state.
pub fn classify_vertex<C: Coord>(prev: &Point<C>, v: &Point<C>, next: &Point<C>) -> VertexType {
    let prev_below = sweep_before(v, prev);
    let next_below = sweep_before(v, next);

    // For a CCW polygon, a clockwise (v, prev, next) triple means the
    // interior angle at v is below π; counter-clockwise means reflex.
    match (prev_below, next_below, orient2d(*v, *prev, *next)) {
        (true, true, Orientation::Clockwise) => VertexType::Start,
        (true, true, Orientation::CounterClockwise) => VertexType::Split,
        (false, false, Orientation::Clockwise) => VertexType::End,
        (false, false, Orientation::CounterClockwise) => VertexType::Merge,
        _ => VertexType::Regular,
    }
}

/// Returns the interior angle at `v` in radians, in `(0, 2π)`.
///
/// The unsigned angle between the two incident edge directions is
/// reflected to `2π - a` when the exact turn test says the vertex is
/// reflex. Reported for inspection; the classifier itself never branches
/// on this floating value.
pub fn interior_angle<C: Coord>(prev: &Point<C>, v: &Point<C>, next: &Point<C>) -> f64 {
    let a = (*prev - *v).angle_between(*next - *v);
    match orient2d(*v, *prev, *next) {
        Orientation::CounterClockwise => 2.0 * PI - a,
        _ => a,
    }
}
