//! Conversions to and from `nalgebra`.
//!
//! nalgebra multiplies column vectors on the right (`M · v`), this crate
//! multiplies row vectors on the left (`v · M`). Matrix conversions therefore
//! transpose, so a converted matrix performs the *same transform*.
//!
//! Sign note: [`M3::rotate_x`] and [`M3::rotate_y`] by `θ` convert to
//! nalgebra's `Rotation3::from_axis_angle` about X or Y by `-θ`. Only
//! [`M3::rotate_z`] matches nalgebra's positive sense. See
//! [`rotation_rows`](crate::rotation::rotation_rows).
//!
//! ```
//! # use gfxmath::{M4, P3};
//! # use nalgebra::{Matrix4, Point3};
//! let m = M4::rotate_z(0.3).compose(&M4::translate(1.0, 2.0, 3.0));
//! let p = P3::new(1.0, 0.0, 0.0);
//! let na: Matrix4<f32> = m.into();
//! let q: P3 = na.transform_point(&Point3::from(p)).into();
//! assert!(q.equivalent(m.transform_point(p), 1e-5));
//! ```

use crate::affine::T3;
use crate::float_types::Real;
use crate::matrix3::M3;
use crate::matrix4::M4;
use crate::point::P3;
use crate::vector::{V3, V4};
use nalgebra::{Matrix3, Matrix4, Point3, Vector3, Vector4};

impl From<V3> for Vector3<Real> {
    fn from(v: V3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<Real>> for V3 {
    fn from(v: Vector3<Real>) -> Self {
        V3::new(v.x, v.y, v.z)
    }
}

impl From<V4> for Vector4<Real> {
    fn from(v: V4) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4<Real>> for V4 {
    fn from(v: Vector4<Real>) -> Self {
        V4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<P3> for Point3<Real> {
    fn from(p: P3) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl From<Point3<Real>> for P3 {
    fn from(p: Point3<Real>) -> Self {
        P3::new(p.x, p.y, p.z)
    }
}

impl From<M3> for Matrix3<Real> {
    fn from(m: M3) -> Self {
        Matrix3::from_fn(|i, j| m[(j, i)])
    }
}

impl From<Matrix3<Real>> for M3 {
    fn from(m: Matrix3<Real>) -> Self {
        M3::from_rows(core::array::from_fn(|i| core::array::from_fn(|j| m[(j, i)])))
    }
}

impl From<M4> for Matrix4<Real> {
    fn from(m: M4) -> Self {
        Matrix4::from_fn(|i, j| m[(j, i)])
    }
}

impl From<Matrix4<Real>> for M4 {
    fn from(m: Matrix4<Real>) -> Self {
        M4::from_rows(core::array::from_fn(|i| core::array::from_fn(|j| m[(j, i)])))
    }
}

impl From<T3> for Matrix4<Real> {
    fn from(t: T3) -> Self {
        M4::from(t).into()
    }
}
