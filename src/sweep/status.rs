//! Ordered set of edges crossed by the sweep line.

use crate::primitives::{Edge, VertexId};
use std::collections::BTreeSet;

/// Ordering key for an active edge: doubled midpoint x, then the edge's
/// id pair.
///
/// The original formulation keys active edges by the midpoint x of their
/// endpoints as a proxy for "x where the edge meets the sweep line". That
/// proxy is kept here (doubled, so it stays an exact integer), including
/// its known limitation: edges whose true sweep-line intersections reorder
/// between events while their midpoints do not can compare out of order.
/// The id tie-break keeps distinct edges with equal midpoints both
/// resident and makes the choice among them deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct StatusKey {
    mid2: i128,
    edge: Edge,
}

/// The sweep-line status: active polygon edges ordered left to right.
///
/// An edge lives here from the event that processes its upper endpoint as
/// a start/split/regular vertex until the event that processes its lower
/// endpoint as an end/merge/regular vertex. Keys derive only from the
/// edge's own endpoints, so the caller supplies the doubled midpoint with
/// each operation and the stored order never changes between events.
#[derive(Debug, Default)]
pub struct SweepStatus {
    entries: BTreeSet<StatusKey>,
}

impl SweepStatus {
    /// Creates an empty status structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an active edge with its doubled midpoint x.
    ///
    /// Returns false if the exact edge was already resident.
    pub fn insert(&mut self, mid2: i128, edge: Edge) -> bool {
        self.entries.insert(StatusKey { mid2, edge })
    }

    /// Removes an active edge, keyed by the same doubled midpoint it was
    /// inserted with. Returns false if it was not resident.
    pub fn remove(&mut self, mid2: i128, edge: Edge) -> bool {
        self.entries.remove(&StatusKey { mid2, edge })
    }

    /// Returns the active edge immediately to the left of the doubled
    /// query coordinate `x2`, if any.
    ///
    /// "Left" is strict: edges whose midpoint lies exactly at the query
    /// x do not count, matching the original predecessor semantics.
    /// `None` means the sweep point has no region to its left.
    pub fn left_of(&self, x2: i128) -> Option<Edge> {
        let bound = StatusKey {
            mid2: x2,
            edge: Edge::new(VertexId(0), VertexId(0)),
        };
        self.entries.range(..bound).next_back().map(|k| k.edge)
    }

    /// Number of currently active edges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no edge is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(from: u32, to: u32) -> Edge {
        Edge::new(VertexId(from), VertexId(to))
    }

    #[test]
    fn test_left_of_picks_nearest_smaller() {
        let mut status = SweepStatus::new();
        status.insert(2, e(0, 1));
        status.insert(6, e(2, 3));
        status.insert(10, e(4, 5));

        assert_eq!(status.left_of(7), Some(e(2, 3)));
        assert_eq!(status.left_of(100), Some(e(4, 5)));
    }

    #[test]
    fn test_left_of_is_strict() {
        let mut status = SweepStatus::new();
        status.insert(4, e(0, 1));

        // An edge sitting exactly at the query x is not "to the left".
        assert_eq!(status.left_of(4), None);
        assert_eq!(status.left_of(5), Some(e(0, 1)));
    }

    #[test]
    fn test_left_of_nothing_to_the_left() {
        let mut status = SweepStatus::new();
        status.insert(8, e(0, 1));
        assert_eq!(status.left_of(3), None);
    }

    #[test]
    fn test_equal_midpoints_both_resident() {
        let mut status = SweepStatus::new();
        assert!(status.insert(4, e(0, 1)));
        assert!(status.insert(4, e(2, 3)));
        assert_eq!(status.len(), 2);

        assert!(status.remove(4, e(0, 1)));
        assert!(status.remove(4, e(2, 3)));
        assert!(status.is_empty());
    }

    #[test]
    fn test_remove_absent_edge() {
        let mut status = SweepStatus::new();
        status.insert(4, e(0, 1));
        assert!(!status.remove(4, e(0, 2)));
        assert_eq!(status.len(), 1);
    }
}
