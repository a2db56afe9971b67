//! Exact orientation predicate.

use super::{Coord, Point};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points make a left turn (positive signed area).
    CounterClockwise,
    /// Points make a right turn (negative signed area).
    Clockwise,
    /// Points are exactly collinear.
    Collinear,
}

/// Computes the orientation of three points, exactly.
///
/// Returns the orientation of the triangle `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right
/// - `Collinear` if `c` lies on the line
///
/// The test is the integer cross product of `(b - a)` and `(c - a)` widened
/// to `i128`, so there is no tolerance parameter and no misclassification
/// near degenerate inputs. Every topology-affecting turn decision in this
/// crate (winding, vertex classification, hull construction) goes through
/// this predicate.
#[inline]
pub fn orient2d<C: Coord>(a: Point<C>, b: Point<C>, c: Point<C>) -> Orientation {
    let cross = (b - a).cross(c - a);
    if cross > 0 {
        Orientation::CounterClockwise
    } else if cross < 0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
