//! Integer geometric primitives and exact orientation predicates.

mod edge;
mod orient;
mod point;
mod vec2;

pub use edge::Edge;
pub use orient::{orient2d, Orientation};
pub use point::{Point, VertexId};
pub use vec2::Vec2;

use num_traits::{AsPrimitive, PrimInt, Signed};
use std::fmt;
use std::hash::Hash;

/// Integer coordinate type for exact geometry.
///
/// Cross and dot products widen to `i128` so orientation tests are exact
/// for any `i32` or `i64` input; the `f64` conversion only feeds the
/// angle helpers, which never make topological decisions.
pub trait Coord:
    PrimInt + Signed + Into<i128> + AsPrimitive<f64> + Hash + fmt::Debug + fmt::Display
{
}

impl<T> Coord for T where
    T: PrimInt + Signed + Into<i128> + AsPrimitive<f64> + Hash + fmt::Debug + fmt::Display
{
}
