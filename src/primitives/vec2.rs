//! 2D integer vector type for directions and offsets.

use super::Coord;
use num_traits::AsPrimitive;
use std::f64::consts::PI;
use std::ops::{Add, Neg, Sub};

/// A 2D vector with integer components, the result of subtracting two
/// points.
///
/// Unlike [`Point`](super::Point), a vector carries no identity: only its
/// components matter for equality and hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2<C> {
    pub x: C,
    pub y: C,
}

impl<C: Coord> Vec2<C> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: C, y: C) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: C::zero(),
            y: C::zero(),
        }
    }

    /// Returns true if both components are zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Computes the dot product with another vector, exactly.
    #[inline]
    pub fn dot(self, other: Self) -> i128 {
        let (ax, ay): (i128, i128) = (self.x.into(), self.y.into());
        let (bx, by): (i128, i128) = (other.x.into(), other.y.into());
        ax * bx + ay * by
    }

    /// Computes the 2D cross product, exactly.
    ///
    /// Returns the z-component of the 3D cross product if the vectors were
    /// extended to 3D with z = 0. Positive means `other` is
    /// counter-clockwise of `self`. This is the only turn test the crate
    /// uses for decisions that affect topology.
    #[inline]
    pub fn cross(self, other: Self) -> i128 {
        let (ax, ay): (i128, i128) = (self.x.into(), self.y.into());
        let (bx, by): (i128, i128) = (other.x.into(), other.y.into());
        ax * by - ay * bx
    }

    /// Returns the Euclidean length of the vector.
    #[inline]
    pub fn magnitude(self) -> f64 {
        (self.dot(self) as f64).sqrt()
    }

    /// Returns the unsigned angle between `self` and `other` in `[0, π]`.
    ///
    /// Computed as the `acos` of the normalized dot product, so it cannot
    /// distinguish turn direction; pair it with [`cross`](Self::cross)
    /// when the side matters. A zero vector on either side yields 0.
    pub fn angle_between(self, other: Self) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        let dp = self.dot(other) as f64 / (self.magnitude() * other.magnitude());
        dp.clamp(-1.0, 1.0).acos()
    }

    /// Returns the angle of the vector from the positive x axis,
    /// normalized to `[0, 2π)`.
    ///
    /// Used purely for ordering neighbors around a point, never for
    /// orientation decisions. The zero vector is defined to have angle 0.
    pub fn full_angle(self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let a = self.y.as_().atan2(self.x.as_());
        if a < 0.0 {
            a + 2.0 * PI
        } else {
            a
        }
    }
}

impl<C: Coord> Add for Vec2<C> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<C: Coord> Sub for Vec2<C> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<C: Coord> Neg for Vec2<C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_sign() {
        let x_axis: Vec2<i64> = Vec2::new(1, 0);
        let y_axis = Vec2::new(0, 1);

        // y axis is counter-clockwise of x axis
        assert!(x_axis.cross(y_axis) > 0);
        assert!(y_axis.cross(x_axis) < 0);
        assert_eq!(x_axis.cross(x_axis), 0);
    }

    #[test]
    fn test_cross_exact_large() {
        // Values that would overflow a 64-bit product
        let a: Vec2<i64> = Vec2::new(3_000_000_000, 1);
        let b = Vec2::new(1, 3_000_000_000);
        assert_eq!(a.cross(b), 9_000_000_000_000_000_000i128 - 1);
    }

    #[test]
    fn test_dot() {
        let a: Vec2<i64> = Vec2::new(2, 3);
        let b = Vec2::new(4, -1);
        assert_eq!(a.dot(b), 5);
    }

    #[test]
    fn test_angle_between_right_angle() {
        let a: Vec2<i64> = Vec2::new(1, 0);
        let b = Vec2::new(0, 5);
        assert_relative_eq!(a.angle_between(b), PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_between_opposite() {
        let a: Vec2<i64> = Vec2::new(1, 0);
        let b = Vec2::new(-3, 0);
        assert_relative_eq!(a.angle_between(b), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_between_zero_vector() {
        let a: Vec2<i64> = Vec2::zero();
        let b = Vec2::new(1, 1);
        assert_eq!(a.angle_between(b), 0.0);
    }

    #[test]
    fn test_full_angle_quadrants() {
        assert_relative_eq!(Vec2::<i64>::new(1, 0).full_angle(), 0.0);
        assert_relative_eq!(Vec2::<i64>::new(0, 1).full_angle(), PI / 2.0);
        assert_relative_eq!(Vec2::<i64>::new(-1, 0).full_angle(), PI);
        assert_relative_eq!(Vec2::<i64>::new(0, -1).full_angle(), 3.0 * PI / 2.0);
    }

    #[test]
    fn test_full_angle_range() {
        let a = Vec2::<i64>::new(3, -4).full_angle();
        assert!((0.0..2.0 * PI).contains(&a));
    }

    #[test]
    fn test_full_angle_zero_vector() {
        assert_eq!(Vec2::<i64>::zero().full_angle(), 0.0);
    }

    #[test]
    fn test_magnitude() {
        let v: Vec2<i64> = Vec2::new(3, 4);
        assert_relative_eq!(v.magnitude(), 5.0);
    }
}
