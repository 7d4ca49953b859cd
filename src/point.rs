//! Affine points.
//!
//! A [`P3`] is a position. Positions and displacements combine as
//!
//! ```text
//! P3 + V3 = P3
//! P3 - V3 = P3
//! P3 - P3 = V3
//! ```
//!
//! and two points are never summed, so there is no `Add<P3>` impl.

use crate::affine::T3;
use crate::errors::{MathError, expect_len};
use crate::float_types::{Real, tolerance};
use crate::vector::{V3, V4};
use core::fmt;
use core::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct P3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl P3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// The point reached by moving `v` away from the origin.
    #[inline]
    pub const fn from_vector(v: V3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Drops `w` without dividing by it; the source is assumed to be affine.
    #[inline]
    pub const fn from_homogeneous(v: V4) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Displacement from the origin to this point.
    #[inline]
    pub const fn to_vector(self) -> V3 {
        V3::from_point(self)
    }

    /// ```
    /// # use gfxmath::{P3, V3};
    /// let a = P3::new(1.0, 0.0, 0.0);
    /// let b = P3::new(1.0, 3.0, 4.0);
    /// assert_eq!(a.distance(b), 5.0);
    /// assert_eq!(b - a, V3::new(0.0, 3.0, 4.0));
    /// ```
    #[inline]
    pub fn distance(self, other: Self) -> Real {
        (self - other).length()
    }

    /// Same as `t.transform(self)`.
    #[inline]
    pub fn transform(self, t: &T3) -> Self {
        t.transform(self)
    }

    #[inline]
    pub fn equivalent(self, other: Self, epsilon: Real) -> bool {
        (other.x - self.x).abs() < epsilon
            && (other.y - self.y).abs() < epsilon
            && (other.z - self.z).abs() < epsilon
    }

    #[inline]
    pub const fn to_array(self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add<V3> for P3 {
    type Output = Self;
    fn add(self, v: V3) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub<V3> for P3 {
    type Output = Self;
    fn sub(self, v: V3) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl Sub<P3> for P3 {
    type Output = V3;
    fn sub(self, p: P3) -> V3 {
        V3::new(self.x - p.x, self.y - p.y, self.z - p.z)
    }
}

impl From<[Real; 3]> for P3 {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl TryFrom<&[Real]> for P3 {
    type Error = MathError;

    fn try_from(values: &[Real]) -> Result<Self, Self::Error> {
        expect_len(values, 3)?;
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl fmt::Display for P3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl approx::AbsDiffEq for P3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.equivalent(*other, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vector_arithmetic() {
        let p = P3::new(1.0, 0.0, 0.0);
        let v = V3::new(0.0, 0.0, 1.0);
        let moved = p + v;
        assert_eq!(moved, P3::new(1.0, 0.0, 1.0));
        assert_eq!(moved - v, p);
        assert_eq!(moved - p, v);
    }

    #[test]
    fn conversions_are_explicit_round_trips() {
        let p = P3::new(-2.0, 0.5, 7.0);
        assert_eq!(P3::from_vector(p.to_vector()), p);
        assert_eq!(P3::from_homogeneous(V4::from_point(p)), p);
        assert_eq!(p.to_vector(), p - P3::ORIGIN);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = P3::new(1.0, 2.0, 3.0);
        let b = P3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn copies_are_independent() {
        let original = P3::new(1.0, 2.0, 3.0);
        let mut copy = original;
        assert_eq!(copy, original);
        copy.x = 10.0;
        assert_eq!(original.x, 1.0);
        assert_ne!(copy, original);
    }

    #[test]
    fn display() {
        assert_eq!(P3::new(0.5, 0.0, -3.0).to_string(), "(0.5, 0, -3)");
    }
}
