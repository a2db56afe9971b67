//! Error types for polygon construction.

use crate::primitives::VertexId;
use thiserror::Error;

/// Errors reported when validating a polygon's vertex list.
///
/// Validation happens once, in [`Polygon::new`](crate::Polygon::new); the
/// decomposition algorithms assume an already-validated polygon and never
/// produce these errors themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {got}")]
    TooFewVertices {
        /// Number of vertices provided.
        got: usize,
    },

    /// Two vertices carry the same id.
    ///
    /// Vertex ids are the sole identity used for equality and lookup, so
    /// they must be unique within a polygon.
    #[error("duplicate vertex id {id}")]
    DuplicateVertexId {
        /// The repeated id.
        id: VertexId,
    },

    /// Two distinct vertices share the same coordinates.
    ///
    /// Identity equality and coordinate equality must agree; coincident
    /// vertices with different ids would silently corrupt the sweep status
    /// and the angular adjacency, so they are rejected up front.
    #[error("vertices {first} and {second} have identical coordinates")]
    CoincidentVertices {
        /// Id of the first vertex at the shared position.
        first: VertexId,
        /// Id of the second vertex at the shared position.
        second: VertexId,
    },
}
