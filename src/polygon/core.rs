//! Core polygon type and basic operations.

use crate::error::PolygonError;
use crate::primitives::{Coord, Point};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A simple polygon: an ordered sequence of identified points, implicitly
/// closed (the last vertex connects back to the first).
///
/// No winding is fixed at construction; algorithms that need a specific
/// orientation call [`ensure_ccw`](Self::ensure_ccw) first. Simplicity
/// (no self-intersection) is assumed, not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon<C> {
    vertices: Vec<Point<C>>,
}

impl<C: Coord> Polygon<C> {
    /// Creates a polygon from a vertex list, validating it.
    ///
    /// Rejects lists with fewer than three vertices, repeated vertex ids,
    /// and distinct vertices at identical coordinates. Passing validation
    /// guarantees that id equality and coordinate equality agree for every
    /// vertex pair, so the algorithms never have to re-check it.
    pub fn new(vertices: Vec<Point<C>>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices {
                got: vertices.len(),
            });
        }

        let mut ids = HashSet::with_capacity(vertices.len());
        for v in &vertices {
            if !ids.insert(v.id) {
                return Err(PolygonError::DuplicateVertexId { id: v.id });
            }
        }

        let mut coords: HashMap<(C, C), Point<C>> = HashMap::with_capacity(vertices.len());
        for v in &vertices {
            if let Some(prior) = coords.insert((v.x, v.y), *v) {
                return Err(PolygonError::CoincidentVertices {
                    first: prior.id,
                    second: v.id,
                });
            }
        }

        Ok(Self { vertices })
    }

    /// Builds a polygon without validation.
    ///
    /// Only for faces assembled internally from vertices of an
    /// already-validated polygon.
    pub(crate) fn from_vertices_unchecked(vertices: Vec<Point<C>>) -> Self {
        debug_assert!(vertices.len() >= 3);
        Self { vertices }
    }

    /// Returns the vertices in order.
    #[inline]
    pub fn vertices(&self) -> &[Point<C>] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// A validated polygon is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the vertex preceding position `i` in polygon order.
    #[inline]
    pub fn prev(&self, i: usize) -> &Point<C> {
        let n = self.vertices.len();
        &self.vertices[(i + n - 1) % n]
    }

    /// Returns the vertex following position `i` in polygon order.
    #[inline]
    pub fn next(&self, i: usize) -> &Point<C> {
        &self.vertices[(i + 1) % self.vertices.len()]
    }

    /// Returns twice the signed area (exact shoelace sum).
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    /// Doubling keeps the result an exact integer.
    pub fn signed_area2(&self) -> i128 {
        let origin = self.vertices[0];
        self.vertices
            .windows(2)
            .skip(1)
            .map(|w| (w[0] - origin).cross(w[1] - origin))
            .sum()
    }

    /// Returns twice the absolute area.
    #[inline]
    pub fn area2(&self) -> i128 {
        self.signed_area2().abs()
    }

    /// Reorders the vertices counter-clockwise.
    ///
    /// Works for non-convex polygons; running it twice yields the same
    /// order as running it once.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area2() < 0 {
            self.vertices.reverse();
        }
    }
}

/// Minimal textual dump for inspection: the vertex count on the first
/// line, then `x y` per vertex. Not a durable interchange format.
impl<C: Coord> fmt::Display for Polygon<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertices.len())?;
        for v in &self.vertices {
            writeln!(f, "{} {}", v.x, v.y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::VertexId;

    fn p(x: i64, y: i64, id: u32) -> Point<i64> {
        Point::new(x, y, VertexId(id))
    }

    fn triangle() -> Polygon<i64> {
        Polygon::new(vec![p(0, 1, 0), p(1, 0, 1), p(1, 1, 2)]).unwrap()
    }

    #[test]
    fn test_rejects_too_few_vertices() {
        let err = Polygon::new(vec![p(0, 0, 0), p(1, 1, 1)]).unwrap_err();
        assert_eq!(err, PolygonError::TooFewVertices { got: 2 });
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let err = Polygon::new(vec![p(0, 0, 0), p(1, 0, 1), p(1, 1, 0)]).unwrap_err();
        assert_eq!(err, PolygonError::DuplicateVertexId { id: VertexId(0) });
    }

    #[test]
    fn test_rejects_coincident_vertices() {
        let err = Polygon::new(vec![p(0, 0, 0), p(1, 0, 1), p(0, 0, 2)]).unwrap_err();
        assert_eq!(
            err,
            PolygonError::CoincidentVertices {
                first: VertexId(0),
                second: VertexId(2),
            }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Polygon::new(vec![p(0, 0, 0)]).unwrap_err();
        assert_eq!(err.to_string(), "polygon needs at least 3 vertices, got 1");
    }

    #[test]
    fn test_signed_area2() {
        // CCW triangle with area 1/2, doubled to stay integer.
        assert_eq!(triangle().signed_area2(), 1);
        assert_eq!(triangle().area2(), 1);
    }

    #[test]
    fn test_ensure_ccw_reverses_clockwise_input() {
        let mut poly = Polygon::new(vec![p(0, 1, 0), p(1, 1, 2), p(1, 0, 1)]).unwrap();
        assert!(poly.signed_area2() < 0);
        poly.ensure_ccw();
        assert!(poly.signed_area2() > 0);
    }

    #[test]
    fn test_ensure_ccw_idempotent() {
        let mut poly = Polygon::new(vec![p(0, 1, 0), p(1, 1, 2), p(1, 0, 1)]).unwrap();
        poly.ensure_ccw();
        let once = poly.clone();
        poly.ensure_ccw();
        assert_eq!(poly, once);
    }

    #[test]
    fn test_cyclic_neighbors() {
        let tri = triangle();
        assert_eq!(tri.prev(0).id, VertexId(2));
        assert_eq!(tri.next(2).id, VertexId(0));
    }

    #[test]
    fn test_dump_format() {
        assert_eq!(triangle().to_string(), "3\n0 1\n1 0\n1 1\n");
    }
}
