//! 4×4 homogeneous transforms.
//!
//! Same row-vector convention as [`M3`]: translation lives in the last row and
//! `v' = v · M`. Affine matrices keep the last column at `(0, 0, 0, 1)`, but
//! nothing stops a caller from building a projective one with [`M4::from_rows`].

use crate::errors::{MathError, expect_len};
use crate::float_types::{Real, tolerance};
use crate::matrix3::M3;
use crate::point::P3;
use crate::rotation::{Axis, rotation_rows};
use crate::vector::{V3, V4};
use core::fmt;
use core::ops::{Index, Mul};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct M4 {
    /// Row-major 4×4
    m: [[Real; 4]; 4],
}

impl M4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    #[inline]
    pub const fn from_rows(rows: [[Real; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Affine matrix from a linear block and a translation row.
    #[inline]
    pub const fn from_linear_and_translation(r: &M3, t: V3) -> Self {
        let l = r.rows();
        Self::from_rows([
            [l[0][0], l[0][1], l[0][2], 0.0],
            [l[1][0], l[1][1], l[1][2], 0.0],
            [l[2][0], l[2][1], l[2][2], 0.0],
            [t.x, t.y, t.z, 1.0],
        ])
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn translate(x: Real, y: Real, z: Real) -> Self {
        Self::from_linear_and_translation(&M3::IDENTITY, V3::new(x, y, z))
    }

    #[inline]
    pub const fn scale(x: Real, y: Real, z: Real) -> Self {
        Self::from_linear_and_translation(&M3::scale(x, y, z), V3::ZERO)
    }

    #[inline]
    pub fn rotate(axis: Axis, radians: Real) -> Self {
        Self::from_linear_and_translation(&M3::from_rows(rotation_rows(axis, radians)), V3::ZERO)
    }

    #[inline]
    pub fn rotate_x(radians: Real) -> Self {
        Self::rotate(Axis::X, radians)
    }

    #[inline]
    pub fn rotate_y(radians: Real) -> Self {
        Self::rotate(Axis::Y, radians)
    }

    #[inline]
    pub fn rotate_z(radians: Real) -> Self {
        Self::rotate(Axis::Z, radians)
    }

    #[inline]
    pub const fn rows(&self) -> [[Real; 4]; 4] {
        self.m
    }

    #[inline]
    pub const fn row(&self, i: usize) -> V4 {
        V4::new(self.m[i][0], self.m[i][1], self.m[i][2], self.m[i][3])
    }

    #[inline]
    pub const fn column(&self, j: usize) -> V4 {
        V4::new(self.m[0][j], self.m[1][j], self.m[2][j], self.m[3][j])
    }

    /// Row vector times matrix: one dot product per column.
    ///
    /// ```
    /// # use gfxmath::{M4, V4};
    /// let t = M4::translate(1.0, 2.0, 3.0);
    /// assert_eq!(t.mul_v4(V4::new(0.0, 0.0, 0.0, 1.0)), V4::new(1.0, 2.0, 3.0, 1.0));
    /// // directions ignore translation
    /// assert_eq!(t.mul_v4(V4::new(1.0, 0.0, 0.0, 0.0)), V4::new(1.0, 0.0, 0.0, 0.0));
    /// ```
    #[inline]
    pub fn mul_v4(&self, v: V4) -> V4 {
        V4::new(
            self.column(0).dot(v),
            self.column(1).dot(v),
            self.column(2).dot(v),
            self.column(3).dot(v),
        )
    }

    /// Transforms `p` as `(x, y, z, 1)` and drops the resulting `w`.
    /// No perspective divide is done.
    #[inline]
    pub fn transform_point(&self, p: P3) -> P3 {
        P3::from_homogeneous(self.mul_v4(V4::from_point(p)))
    }

    /// `self · b`: apply `self`, then `b`.
    #[inline]
    pub fn compose(&self, b: &Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * b.m[0][j]
                    + self.m[i][1] * b.m[1][j]
                    + self.m[i][2] * b.m[2][j]
                    + self.m[i][3] * b.m[3][j];
            }
        }
        Self::from_rows(out)
    }

    #[inline]
    pub const fn transpose(&self) -> Self {
        let m = &self.m;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    /// The rotation/scale block, translation discarded.
    #[inline]
    pub const fn upper_left(&self) -> M3 {
        let m = &self.m;
        M3::from_rows([
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ])
    }

    /// First three components of the last row.
    #[inline]
    pub const fn translation(&self) -> V3 {
        V3::new(self.m[3][0], self.m[3][1], self.m[3][2])
    }

    /// Element-wise `|a - b| < epsilon`, so a difference of exactly `epsilon` fails.
    pub fn equivalent(&self, other: &Self, epsilon: Real) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (b - a).abs() < epsilon)
    }
}

impl Default for M4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for M4 {
    type Output = Real;
    fn index(&self, (row, col): (usize, usize)) -> &Real {
        &self.m[row][col]
    }
}

impl Mul for M4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<M4> for V4 {
    type Output = V4;
    fn mul(self, m: M4) -> V4 {
        m.mul_v4(self)
    }
}

impl TryFrom<&[Real]> for M4 {
    type Error = MathError;

    /// Row-major, 16 values.
    fn try_from(values: &[Real]) -> Result<Self, Self::Error> {
        expect_len(values, 16)?;
        let mut m = [[0.0; 4]; 4];
        for (row, chunk) in m.iter_mut().zip(values.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Ok(Self::from_rows(m))
    }
}

impl fmt::Display for M4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.m {
            writeln!(f, "{:.6} {:.6} {:.6} {:.6}", r[0], r[1], r[2], r[3])?;
        }
        Ok(())
    }
}

impl approx::AbsDiffEq for M4 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.equivalent(other, epsilon)
    }
}
