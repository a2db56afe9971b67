//! Polygon type, winding normalization and vertex classification.
//!
//! A [`Polygon`] is an ordered, implicitly closed sequence of identified
//! integer points, validated once at construction. [`classify_vertex`]
//! labels each vertex relative to a top-to-bottom sweep; the labels drive
//! the monotone decomposition in [`crate::sweep`].

mod classify;
mod core;

pub use classify::{classify_vertex, interior_angle, sweep_before, VertexType};
pub use self::core::Polygon;
