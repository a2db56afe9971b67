//! Directed edges between identified vertices.

use super::VertexId;
use std::fmt;

/// A directed edge between two vertex ids.
///
/// Equality is id-pair equality, not geometric: the same segment traversed
/// in the opposite direction is a different edge. The sweep status and the
/// helper map are keyed on this directional identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    /// Creates a new directed edge.
    #[inline]
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }

    /// Returns the same segment traversed in the opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns the endpoint ids with the smaller id first.
    ///
    /// Useful as an undirected key when both traversal directions should
    /// collapse to one entry.
    #[inline]
    pub fn undirected(self) -> (VertexId, VertexId) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[edge from {} to {}]", self.from, self.to)
    }
}
