//! Convex hull and bounding-triangle construction.
//!
//! These are leaf utilities for the point-location pipeline built on top
//! of the decomposition; the monotone sweep itself never calls them.

use crate::primitives::{orient2d, Coord, Orientation, Point, VertexId};

/// Computes the convex hull of a point set using Andrew's monotone chain
/// algorithm with exact orientation tests.
///
/// Returns the hull vertices in counter-clockwise order starting from the
/// lexicographically smallest point, without repeating the first point at
/// the end. Collinear points on hull edges are excluded. Inputs with
/// fewer than three points come back sorted, as-is.
///
/// O(n log n) from the lexicographic sort; ids are preserved.
pub fn convex_hull<C: Coord>(points: &[Point<C>]) -> Vec<Point<C>> {
    let mut sorted: Vec<Point<C>> = points.to_vec();
    sorted.sort_by(|a, b| a.x.cmp(&b.x).then_with(|| a.y.cmp(&b.y)));

    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Point<C>> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2
            && orient2d(lower[lower.len() - 2], lower[lower.len() - 1], p)
                != Orientation::CounterClockwise
        {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point<C>> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2
            && orient2d(upper[upper.len() - 2], upper[upper.len() - 1], p)
                != Orientation::CounterClockwise
        {
            upper.pop();
        }
        upper.push(p);
    }

    // The last point of each chain repeats the first of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Builds a right-isosceles triangle enclosing the given hull.
///
/// The triangle's right angle sits at the hull's bounding-box bottom-left
/// corner; its legs run along x and y so that the hypotenuse lies on the
/// line x + y = s through the hull's farthest vertex (largest x + y), so
/// every point is inside or on the boundary. The three synthetic vertices
/// take ids `first_id`,
/// `first_id + 1` and `first_id + 2`, which must not collide with any
/// existing vertex id.
///
/// # Panics
///
/// Panics if `hull` is empty.
pub fn bounding_triangle<C: Coord>(hull: &[Point<C>], first_id: u32) -> [Point<C>; 3] {
    assert!(!hull.is_empty(), "bounding triangle of an empty hull");

    let min_x = hull.iter().map(|p| p.x).min().expect("non-empty hull");
    let min_y = hull.iter().map(|p| p.y).min().expect("non-empty hull");
    let farthest = hull
        .iter()
        .max_by_key(|p| p.x + p.y)
        .expect("non-empty hull");

    let max_x = farthest.x + (farthest.y - min_y);
    let max_y = farthest.y + (farthest.x - min_x);

    [
        Point::new(min_x, min_y, VertexId(first_id)),
        Point::new(max_x, min_y, VertexId(first_id + 1)),
        Point::new(min_x, max_y, VertexId(first_id + 2)),
    ]
}
