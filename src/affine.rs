//! Compact 4×3 affine transforms.
//!
//! An affine [`M4`] always has `(0, 0, 0, 1)` as its last column, so [`T3`]
//! keeps only the other twelve numbers: three linear rows and one
//! translation row. Points are treated as `(x, y, z, 1)` row vectors and the
//! missing column is implied everywhere, which also means a `T3` can never
//! hold a projective transform.

use crate::errors::{MathError, expect_len};
use crate::float_types::{Real, tolerance};
use crate::matrix3::M3;
use crate::matrix4::M4;
use crate::point::P3;
use crate::rotation::{Axis, rotation_rows};
use crate::vector::{V3, V4};
use core::fmt;
use core::ops::{Index, Mul};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct T3 {
    // rows 0..3 are the linear block, row 3 is the translation
    m: [[Real; 3]; 4],
}

impl T3 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, 0.0],
    ]);

    #[inline]
    pub const fn from_rows(rows: [[Real; 3]; 4]) -> Self {
        Self { m: rows }
    }

    #[inline]
    pub const fn from_parts(linear: &M3, translation: V3) -> Self {
        let l = linear.rows();
        Self::from_rows([l[0], l[1], l[2], translation.to_array()])
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn translate(x: Real, y: Real, z: Real) -> Self {
        Self::from_parts(&M3::IDENTITY, V3::new(x, y, z))
    }

    #[inline]
    pub const fn scale(x: Real, y: Real, z: Real) -> Self {
        Self::from_parts(&M3::scale(x, y, z), V3::ZERO)
    }

    #[inline]
    pub fn rotate(axis: Axis, radians: Real) -> Self {
        Self::from_parts(&M3::from_rows(rotation_rows(axis, radians)), V3::ZERO)
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
    pub const fn rows(&self) -> [[Real; 3]; 4] {
        self.m
    }

    /// Column `j` of the stored 4×3 block, as a 4-vector.
    #[inline]
    pub const fn column(&self, j: usize) -> V4 {
        V4::new(self.m[0][j], self.m[1][j], self.m[2][j], self.m[3][j])
    }

    /// Transforms a point: `(x, y, z, 1) · T`.
    ///
    /// ```
    /// # use gfxmath::{P3, T3, float_types::FRAC_PI_2};
    /// let t = T3::rotate_z(FRAC_PI_2).compose(&T3::translate(0.0, 0.0, 2.0));
    /// assert!(t.transform(P3::new(1.0, 0.0, 0.0)).equivalent(P3::new(0.0, 1.0, 2.0), 1e-4));
    /// ```
    #[inline]
    pub fn transform(&self, p: P3) -> P3 {
        let v = p.to_vector();
        let t = &self.m[3];
        P3::new(
            self.column(0).xyz().dot(v) + t[0],
            self.column(1).xyz().dot(v) + t[1],
            self.column(2).xyz().dot(v) + t[2],
        )
    }

    /// Matrix times column vector, `(4×3) · (3×1) = (4×1)`.
    ///
    /// Component `i` of the result is stored row `i` dotted with `v`, so the
    /// `w` it returns is `translation · v`. That is neither 0 (a direction)
    /// nor 1 (a point), and for a rotation the xyz part is the *transposed*
    /// rotation of `v`. Use [`V4::transform`] or [`T3::transform`] for the
    /// row-vector convention the rest of the crate follows.
    #[inline]
    pub fn mul_v3(&self, v: V3) -> V4 {
        let row = |i: usize| V3::from(self.m[i]);
        V4::new(row(0).dot(v), row(1).dot(v), row(2).dot(v), row(3).dot(v))
    }

    /// Affine composition, apply `self` then `b`.
    ///
    /// The linear block is `self.linear · b.linear`; the translation is
    /// `self.translation · b.linear + b.translation`.
    pub fn compose(&self, b: &Self) -> Self {
        let mut out = [[0.0; 3]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * b.m[0][j]
                    + self.m[i][1] * b.m[1][j]
                    + self.m[i][2] * b.m[2][j];
            }
        }
        for (cell, t) in out[3].iter_mut().zip(b.m[3]) {
            *cell += t;
        }
        Self::from_rows(out)
    }

    #[inline]
    pub const fn upper_left(&self) -> M3 {
        M3::from_rows([self.m[0], self.m[1], self.m[2]])
    }

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

impl Default for T3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for T3 {
    type Output = Real;
    fn index(&self, (row, col): (usize, usize)) -> &Real {
        &self.m[row][col]
    }
}

impl Mul for T3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<T3> for P3 {
    type Output = P3;
    fn mul(self, t: T3) -> P3 {
        t.transform(self)
    }
}

impl From<T3> for M4 {
    /// Restores the implied `(0, 0, 0, 1)` column.
    fn from(t: T3) -> Self {
        M4::from_linear_and_translation(&t.upper_left(), t.translation())
    }
}

impl TryFrom<M4> for T3 {
    type Error = MathError;

    /// Drops the last column, provided it is `(0, 0, 0, 1)` to within
    /// [`tolerance`].
    fn try_from(m: M4) -> Result<Self, Self::Error> {
        let column = m.column(3);
        if !column.equivalent(V4::new(0.0, 0.0, 0.0, 1.0), tolerance()) {
            return Err(MathError::NonAffine { column: column.to_array() });
        }
        Ok(Self::from_parts(&m.upper_left(), m.translation()))
    }
}

impl TryFrom<&[Real]> for T3 {
    type Error = MathError;

    /// Row-major, 12 values: three linear rows then the translation.
    fn try_from(values: &[Real]) -> Result<Self, Self::Error> {
        expect_len(values, 12)?;
        let mut m = [[0.0; 3]; 4];
        for (row, chunk) in m.iter_mut().zip(values.chunks_exact(3)) {
            row.copy_from_slice(chunk);
        }
        Ok(Self::from_rows(m))
    }
}

impl fmt::Display for T3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.m {
            writeln!(f, "{:.6} {:.6} {:.6}", r[0], r[1], r[2])?;
        }
        Ok(())
    }
}

impl approx::AbsDiffEq for T3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.equivalent(other, epsilon)
    }
}
