//! Identified integer points.

use super::{Coord, Vec2};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Stable identity of a polygon vertex.
///
/// Ids are the sole identity used for equality, hashing and lookup; the
/// coordinates hanging off a [`Point`] must agree with that identity,
/// which [`Polygon::new`](crate::Polygon::new) validates once at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A polygon vertex: integer coordinates plus a stable id.
///
/// Subtracting two points yields a [`Vec2`], which carries no id at all —
/// there is no "point with an undefined id" state to misuse. Translating
/// a point by a vector (`+`, `-`, `+=`, `-=`) preserves its id.
#[derive(Debug, Clone, Copy)]
pub struct Point<C> {
    pub x: C,
    pub y: C,
    pub id: VertexId,
}

impl<C: Coord> Point<C> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: C, y: C, id: VertexId) -> Self {
        Self { x, y, id }
    }

    /// Returns the coordinates as a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<C> {
        Vec2::new(self.x, self.y)
    }
}

impl<C> PartialEq for Point<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for Point<C> {}

impl<C> Hash for Point<C> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<C: Coord> Sub for Point<C> {
    type Output = Vec2<C>;

    /// The displacement from `other` to `self`. The result is a plain
    /// vector; no identity survives the subtraction.
    #[inline]
    fn sub(self, other: Self) -> Vec2<C> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<C: Coord> Add<Vec2<C>> for Point<C> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<C>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
            id: self.id,
        }
    }
}

impl<C: Coord> Sub<Vec2<C>> for Point<C> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<C>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
            id: self.id,
        }
    }
}

impl<C: Coord> AddAssign<Vec2<C>> for Point<C> {
    #[inline]
    fn add_assign(&mut self, v: Vec2<C>) {
        self.x = self.x + v.x;
        self.y = self.y + v.y;
    }
}

impl<C: Coord> SubAssign<Vec2<C>> for Point<C> {
    #[inline]
    fn sub_assign(&mut self, v: Vec2<C>) {
        self.x = self.x - v.x;
        self.y = self.y - v.y;
    }
}

impl<C: Coord> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, id={})", self.x, self.y, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64, id: u32) -> Point<i64> {
        Point::new(x, y, VertexId(id))
    }

    #[test]
    fn test_sub_yields_vector() {
        let v = p(5, 7, 1) - p(2, 3, 2);
        assert_eq!(v, Vec2::new(3, 4));
    }

    #[test]
    fn test_translation_preserves_id() {
        let mut a = p(1, 2, 9);
        a += Vec2::new(3, -1);
        assert_eq!((a.x, a.y), (4, 1));
        assert_eq!(a.id, VertexId(9));

        a -= Vec2::new(1, 1);
        assert_eq!((a.x, a.y), (3, 0));
        assert_eq!(a.id, VertexId(9));
    }

    #[test]
    fn test_sub_assign_subtracts_each_axis() {
        // Both components move along their own axis.
        let mut a = p(10, 10, 0);
        a -= Vec2::new(2, 5);
        assert_eq!((a.x, a.y), (8, 5));
    }

    #[test]
    fn test_equality_is_identity() {
        // Equality compares ids; validated polygons keep ids and
        // coordinates consistent.
        assert_eq!(p(1, 2, 3), p(1, 2, 3));
        assert_ne!(p(1, 2, 3), p(1, 2, 4));
    }
}
