//! monotome - Y-monotone polygon decomposition
//!
//! Cuts a simple polygon (non-convex allowed, any winding) into y-monotone
//! pieces with a classic top-to-bottom sweep, using exact integer
//! predicates for every decision that affects topology. This is the first
//! stage of a triangulation pipeline feeding a planar point locator; the
//! downstream stages are external and only their contracts live here.
//!
//! ```
//! use monotome::{decompose, Point, Polygon, VertexId};
//!
//! // A hexagon with a vertex poking down into its interior.
//! let polygon = Polygon::new(vec![
//!     Point::new(2, 0, VertexId(0)),
//!     Point::new(3, 2, VertexId(1)),
//!     Point::new(6, 0, VertexId(2)),
//!     Point::new(2, 5, VertexId(3)),
//!     Point::new(2, 3, VertexId(4)),
//!     Point::new(0, 3, VertexId(5)),
//! ])?;
//!
//! let faces = decompose(&polygon);
//! assert_eq!(faces.len(), 2); // one diagonal resolves the split vertex
//! # Ok::<(), monotome::PolygonError>(())
//! ```

pub mod error;
pub mod graph;
pub mod hull;
pub mod pipeline;
pub mod polygon;
pub mod primitives;
pub mod sweep;

pub use error::PolygonError;
pub use polygon::{classify_vertex, interior_angle, sweep_before, Polygon, VertexType};
pub use primitives::{orient2d, Coord, Edge, Orientation, Point, Vec2, VertexId};
pub use sweep::{decompose, monotone_diagonals};
