//! Free vectors: [`V3`] and the homogeneous [`V4`].

use crate::affine::T3;
use crate::errors::{MathError, expect_len};
use crate::float_types::{Real, tolerance};
use crate::point::P3;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/* ----------------------------------- V3 ------------------------------------ */

/// A 3-component free vector (a displacement, not a position).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct V3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl V3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Reinterpret a position as the vector from the origin to it.
    #[inline]
    pub const fn from_point(p: P3) -> Self {
        Self::new(p.x, p.y, p.z)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Real {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product: `X.cross(Y) == Z`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(self) -> Real {
        self.dot(self).sqrt()
    }

    /// Component-wise `|a - b| < epsilon`. A difference equal to `epsilon`
    /// is not equivalent.
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

impl Add for V3 {
    type Output = Self;
    fn add(self, r: Self) -> Self {
        Self::new(self.x + r.x, self.y + r.y, self.z + r.z)
    }
}

impl Sub for V3 {
    type Output = Self;
    fn sub(self, r: Self) -> Self {
        Self::new(self.x - r.x, self.y - r.y, self.z - r.z)
    }
}

impl Neg for V3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Real> for V3 {
    type Output = Self;
    fn mul(self, s: Real) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl From<[Real; 3]> for V3 {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl TryFrom<&[Real]> for V3 {
    type Error = MathError;

    fn try_from(values: &[Real]) -> Result<Self, Self::Error> {
        expect_len(values, 3)?;
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl fmt::Display for V3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl approx::AbsDiffEq for V3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.equivalent(*other, epsilon)
    }
}

/* ----------------------------------- V4 ------------------------------------ */

/// A 4-component homogeneous vector. `w` is left entirely to the caller:
/// 0 for directions, 1 for positions promoted from a [`P3`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct V4 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

impl V4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { x, y, z, w }
    }

    /// Promote a position: `w = 1`.
    #[inline]
    pub const fn from_point(p: P3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    /// Promote a direction: `w = 0`.
    #[inline]
    pub const fn from_vector(v: V3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Drop `w` without dividing by it.
    #[inline]
    pub const fn xyz(self) -> V3 {
        V3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Real {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn length(self) -> Real {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn equivalent(self, other: Self, epsilon: Real) -> bool {
        (other.x - self.x).abs() < epsilon
            && (other.y - self.y).abs() < epsilon
            && (other.z - self.z).abs() < epsilon
            && (other.w - self.w).abs() < epsilon
    }

    /// Row vector times a 4×3 matrix: `(1×4) · (4×3) = (1×3)`.
    ///
    /// Unlike [`T3::transform`], the caller's `w` weights the translation row,
    /// so `w = 0` moves a direction and `w = 1` moves a position.
    #[inline]
    pub fn transform(self, t: &T3) -> V3 {
        V3::new(
            t.column(0).dot(self),
            t.column(1).dot(self),
            t.column(2).dot(self),
        )
    }

    #[inline]
    pub const fn to_array(self) -> [Real; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Add for V4 {
    type Output = Self;
    fn add(self, r: Self) -> Self {
        Self::new(self.x + r.x, self.y + r.y, self.z + r.z, self.w + r.w)
    }
}

impl Sub for V4 {
    type Output = Self;
    fn sub(self, r: Self) -> Self {
        Self::new(self.x - r.x, self.y - r.y, self.z - r.z, self.w - r.w)
    }
}

impl Neg for V4 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<Real> for V4 {
    type Output = Self;
    fn mul(self, s: Real) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl From<[Real; 4]> for V4 {
    fn from([x, y, z, w]: [Real; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl TryFrom<&[Real]> for V4 {
    type Error = MathError;

    fn try_from(values: &[Real]) -> Result<Self, Self::Error> {
        expect_len(values, 4)?;
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

impl fmt::Display for V4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl approx::AbsDiffEq for V4 {
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

    const EPS: Real = 1e-4;

    #[test]
    fn right_hand_rule() {
        assert!(V3::X.cross(V3::Y).equivalent(V3::Z, EPS));
        assert!(V3::Y.cross(V3::Z).equivalent(V3::X, EPS));
        assert!(V3::Z.cross(V3::X).equivalent(V3::Y, EPS));
        assert!(V3::Y.cross(V3::X).equivalent(-V3::Z, EPS));
    }

    #[test]
    fn length_and_dot() {
        let v = V3::new(1.0, 2.0, 2.0);
        assert_eq!(v.dot(v), 9.0);
        assert_eq!(v.length(), 3.0);
        assert_eq!(V4::new(1.0, 1.0, 1.0, 1.0).length(), 2.0);
        assert_eq!(V3::X.dot(V3::Y), 0.0);
    }

    #[test]
    fn add_sub() {
        let a = V3::new(1.0, 2.0, 3.0);
        let b = V3::new(0.5, -1.0, 4.0);
        assert_eq!(a + b, V3::new(1.5, 1.0, 7.0));
        assert_eq!(a - b, V3::new(0.5, 3.0, -1.0));
        assert_eq!(a - a, V3::ZERO);

        let c = V4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(c + c, V4::new(2.0, 4.0, 6.0, 2.0));
        assert_eq!(c - c, V4::ZERO);
    }

    #[test]
    fn equivalence_is_strict() {
        let a = V3::new(0.0, 0.0, 0.0);
        let b = V3::new(0.5, 0.0, 0.0);
        assert!(!a.equivalent(b, 0.5));
        assert!(a.equivalent(b, 0.5001));
        assert!(!a.equivalent(a, 0.0));

        let c = V4::new(0.0, 0.0, 0.0, 0.25);
        assert!(!V4::ZERO.equivalent(c, 0.25));
        assert!(V4::ZERO.equivalent(c, 0.3));
    }

    #[test]
    fn nan_is_never_equivalent() {
        let n = V3::new(Real::NAN, 0.0, 0.0);
        assert!(!n.equivalent(n, 1.0));
    }

    #[test]
    fn promotion() {
        let p = P3::new(1.0, 2.0, 3.0);
        assert_eq!(V4::from_point(p), V4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(V4::from_vector(V3::from_point(p)), V4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(V4::from_point(p).xyz(), V3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn display() {
        assert_eq!(V3::new(1.0, -0.5, 2.25).to_string(), "(1, -0.5, 2.25)");
        assert_eq!(V4::new(0.0, 1.0, 0.0, 1.0).to_string(), "(0, 1, 0, 1)");
    }

    #[test]
    fn from_slice() {
        let values: [Real; 3] = [1.0, 2.0, 3.0];
        let v = V3::try_from(&values[..]).unwrap();
        assert_eq!(v, V3::new(1.0, 2.0, 3.0));
        assert_eq!(
            V4::try_from(&values[..]),
            Err(MathError::LengthMismatch { expected: 4, found: 3 })
        );
    }
}
