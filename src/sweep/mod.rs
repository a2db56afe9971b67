//! Sweep-line decomposition of a simple polygon into y-monotone pieces.
//!
//! The sweep processes vertices top to bottom (ties left to right),
//! maintaining the set of active edges in a [`SweepStatus`] and, for each
//! active edge, a helper vertex eligible to receive a diagonal. Split and
//! merge vertices force diagonals that cut the polygon into pieces whose
//! boundaries are monotone in y; the planar graph walk in [`crate::graph`]
//! then recovers those pieces as polygons.
//!
//! The algorithm is strictly sequential: every status lookup depends on
//! the cumulative effect of all earlier events. Each call owns all of its
//! state, so independent polygons can be decomposed on separate threads
//! without any coordination.

mod status;

pub use status::SweepStatus;

use crate::graph::PlanarGraph;
use crate::polygon::{classify_vertex, sweep_before, Polygon, VertexType};
use crate::primitives::{Coord, Edge, Point};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Decomposes a simple polygon into y-monotone sub-polygons.
///
/// The input winding does not matter; a counter-clockwise working copy is
/// made internally. Every returned face is counter-clockwise, has at
/// least three vertices, and together the faces tile exactly the input
/// polygon's interior. The unbounded outer face is never returned. A
/// polygon that is already monotone comes back as a single face equal to
/// the input up to rotation.
///
/// Runs in O(n log n) for the sweep plus O(n) amortized for face
/// recovery.
pub fn decompose<C: Coord>(polygon: &Polygon<C>) -> Vec<Polygon<C>> {
    let mut work = polygon.clone();
    work.ensure_ccw();

    let outcome = run_sweep(&work);
    debug_assert_eq!(outcome.residual, 0, "active edges left after sweep");

    PlanarGraph::new(&work, &outcome.diagonals).extract_faces()
}

/// Runs only the sweep and returns the diagonals it would add.
///
/// The diagonal set is purely additive: each entry is a chord between two
/// vertex ids of the input polygon, and adding all of them to the boundary
/// makes every bounded face y-monotone.
pub fn monotone_diagonals<C: Coord>(polygon: &Polygon<C>) -> Vec<Edge> {
    let mut work = polygon.clone();
    work.ensure_ccw();
    run_sweep(&work).diagonals
}

/// Event-queue entry; ordered so that a max-heap pops the highest-y,
/// then smallest-x vertex first.
#[derive(Debug, PartialEq, Eq)]
struct Event<C> {
    y: C,
    x: C,
    idx: usize,
}

impl<C: Coord> Ord for Event<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y
            .cmp(&other.y)
            .then_with(|| other.x.cmp(&self.x))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl<C: Coord> PartialOrd for Event<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Everything the sweep produced, including the bookkeeping the tests
/// check invariants against.
pub(crate) struct SweepOutcome {
    pub(crate) diagonals: Vec<Edge>,
    /// Status insertions over the whole sweep.
    pub(crate) inserted: usize,
    /// Status removals over the whole sweep.
    pub(crate) removed: usize,
    /// Edges still active at termination. Zero for any simple input.
    pub(crate) residual: usize,
}

/// Doubled midpoint x of the segment between two points, the status key.
#[inline]
fn mid2<C: Coord>(a: &Point<C>, b: &Point<C>) -> i128 {
    let (ax, bx): (i128, i128) = (a.x.into(), b.x.into());
    ax + bx
}

/// Emits a diagonal from `v` to `edge`'s helper if that helper is a merge
/// vertex waiting to be resolved. A missing helper entry means no merge
/// vertex is pending, which is not an error.
fn close_merge_helper<C: Coord>(
    helper: &HashMap<Edge, usize>,
    types: &[VertexType],
    verts: &[Point<C>],
    edge: Edge,
    v: &Point<C>,
    diagonals: &mut Vec<Edge>,
) {
    if let Some(&h) = helper.get(&edge) {
        if types[h] == VertexType::Merge {
            diagonals.push(Edge::new(v.id, verts[h].id));
        }
    }
}

/// The sweep proper. Expects counter-clockwise input.
fn run_sweep<C: Coord>(ccw: &Polygon<C>) -> SweepOutcome {
    let verts = ccw.vertices();
    let n = verts.len();

    // Classification is a pure function of each vertex's neighbors, so it
    // can run once up front; the driver only dispatches on the labels.
    let types: Vec<VertexType> = (0..n)
        .map(|i| classify_vertex(ccw.prev(i), &verts[i], ccw.next(i)))
        .collect();

    let mut queue: BinaryHeap<Event<C>> = verts
        .iter()
        .enumerate()
        .map(|(idx, v)| Event { y: v.y, x: v.x, idx })
        .collect();

    let mut status = SweepStatus::new();
    let mut helper: HashMap<Edge, usize> = HashMap::with_capacity(n);
    let mut diagonals = Vec::new();
    let mut inserted = 0usize;
    let mut removed = 0usize;

    while let Some(Event { idx: i, .. }) = queue.pop() {
        let v = &verts[i];
        let prev = ccw.prev(i);
        let next = ccw.next(i);
        let edge_out = Edge::new(v.id, next.id); // starts at v
        let edge_in = Edge::new(prev.id, v.id); // ends at v
        let vx: i128 = v.x.into();
        let query = 2 * vx;

        match types[i] {
            VertexType::Start => {
                if status.insert(mid2(v, next), edge_out) {
                    inserted += 1;
                }
                helper.insert(edge_out, i);
            }
            VertexType::Split => {
                // A split vertex always connects to the helper of the
                // region to its left, then opens its own edge.
                if let Some(left) = status.left_of(query) {
                    if let Some(&h) = helper.get(&left) {
                        diagonals.push(Edge::new(v.id, verts[h].id));
                    }
                    helper.insert(left, i);
                }
                if status.insert(mid2(v, next), edge_out) {
                    inserted += 1;
                }
                helper.insert(edge_out, i);
            }
            VertexType::End => {
                close_merge_helper(&helper, &types, verts, edge_in, v, &mut diagonals);
                if status.remove(mid2(prev, v), edge_in) {
                    removed += 1;
                }
            }
            VertexType::Merge => {
                close_merge_helper(&helper, &types, verts, edge_in, v, &mut diagonals);
                if status.remove(mid2(prev, v), edge_in) {
                    removed += 1;
                }
                if let Some(left) = status.left_of(query) {
                    close_merge_helper(&helper, &types, verts, left, v, &mut diagonals);
                    helper.insert(left, i);
                }
            }
            VertexType::Regular => {
                if sweep_before(prev, next) {
                    // Interior on the right: v sits on the left chain, so
                    // the incoming edge ends here and the outgoing one
                    // takes its place.
                    close_merge_helper(&helper, &types, verts, edge_in, v, &mut diagonals);
                    if status.remove(mid2(prev, v), edge_in) {
                        removed += 1;
                    }
                    if status.insert(mid2(v, next), edge_out) {
                        inserted += 1;
                    }
                    helper.insert(edge_out, i);
                } else {
                    // Interior on the left: v only refreshes the helper of
                    // the region to its left.
                    if let Some(left) = status.left_of(query) {
                        close_merge_helper(&helper, &types, verts, left, v, &mut diagonals);
                        helper.insert(left, i);
                    }
                }
            }
        }
    }

    SweepOutcome {
        diagonals,
        inserted,
        removed,
        residual: status.len(),
    }
}
