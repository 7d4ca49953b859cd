//! 3×3 linear transforms (rotation and scale, no translation).
//!
//! Vectors are **row vectors** multiplied on the left: `v' = v · M`. With that
//! convention `a.compose(b)` is the ordinary product `a · b` and means
//! "apply `a`, then `b`".

use crate::errors::{MathError, expect_len};
use crate::float_types::{Real, tolerance};
use crate::rotation::{Axis, rotation_rows};
use crate::vector::V3;
use core::fmt;
use core::ops::{Index, Mul};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct M3 {
    // Row-major storage: m[row][col]
    m: [[Real; 3]; 3],
}

impl M3 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    #[inline]
    pub const fn from_rows(rows: [[Real; 3]; 3]) -> Self {
        Self { m: rows }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Non-uniform scale along the diagonal.
    #[inline]
    pub const fn scale(x: Real, y: Real, z: Real) -> Self {
        Self::from_rows([
            [x, 0.0, 0.0],
            [0.0, y, 0.0],
            [0.0, 0.0, z],
        ])
    }

    /// Rotation about a coordinate axis, angle in radians.
    #[inline]
    pub fn rotate(axis: Axis, radians: Real) -> Self {
        Self::from_rows(rotation_rows(axis, radians))
    }

    #[inline]
    pub fn rotate_x(radians: Real) -> Self {
        Self::rotate(Axis::X, radians)
    }

    #[inline]
    pub fn rotate_y(radians: Real) -> Self {
        Self::rotate(Axis::Y, radians)
    }

    /// ```
    /// # use gfxmath::{M3, V3, float_types::FRAC_PI_2};
    /// let r = M3::rotate_z(FRAC_PI_2);
    /// assert!(r.mul_v3(V3::X).equivalent(V3::Y, 1e-4));
    /// ```
    #[inline]
    pub fn rotate_z(radians: Real) -> Self {
        Self::rotate(Axis::Z, radians)
    }

    #[inline]
    pub const fn rows(&self) -> [[Real; 3]; 3] {
        self.m
    }

    #[inline]
    pub const fn row(&self, i: usize) -> V3 {
        V3::new(self.m[i][0], self.m[i][1], self.m[i][2])
    }

    #[inline]
    pub const fn column(&self, j: usize) -> V3 {
        V3::new(self.m[0][j], self.m[1][j], self.m[2][j])
    }

    /// Row vector times matrix: `v · M`.
    #[inline]
    pub fn mul_v3(&self, v: V3) -> V3 {
        V3::new(
            v.dot(self.column(0)),
            v.dot(self.column(1)),
            v.dot(self.column(2)),
        )
    }

    /// `self · b`: transforming by the result is transforming by `self`, then by `b`.
    #[inline]
    pub fn compose(&self, b: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * b.m[0][j]
                    + self.m[i][1] * b.m[1][j]
                    + self.m[i][2] * b.m[2][j];
            }
        }
        Self::from_rows(out)
    }

    /// Rows and columns swapped. For a pure rotation this is its inverse.
    #[inline]
    pub const fn transpose(&self) -> Self {
        let m = &self.m;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Element-wise `|a - b| < epsilon`.
    pub fn equivalent(&self, other: &Self, epsilon: Real) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (b - a).abs() < epsilon)
    }
}

impl Default for M3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for M3 {
    type Output = Real;
    fn index(&self, (row, col): (usize, usize)) -> &Real {
        &self.m[row][col]
    }
}

impl Mul for M3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<M3> for V3 {
    type Output = V3;
    fn mul(self, m: M3) -> V3 {
        m.mul_v3(self)
    }
}

impl TryFrom<&[Real]> for M3 {
    type Error = MathError;

    /// Row-major, 9 values.
    fn try_from(values: &[Real]) -> Result<Self, Self::Error> {
        expect_len(values, 9)?;
        let mut m = [[0.0; 3]; 3];
        for (row, chunk) in m.iter_mut().zip(values.chunks_exact(3)) {
            row.copy_from_slice(chunk);
        }
        Ok(Self::from_rows(m))
    }
}

impl fmt::Display for M3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.m {
            writeln!(f, "{:.6} {:.6} {:.6}", r[0], r[1], r[2])?;
        }
        Ok(())
    }
}

impl approx::AbsDiffEq for M3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.equivalent(other, epsilon)
    }
}
