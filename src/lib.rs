//! Small single-precision linear algebra for **3D graphics transforms**.
//!
//! Points, free vectors and three matrix shapes:
//!
//! | type  | what it is |
//! |-------|------------|
//! | [`V3`] | free 3-vector |
//! | [`V4`] | homogeneous 4-vector, `w` managed by the caller |
//! | [`P3`] | affine point |
//! | [`M3`] | 3×3 rotation / scale |
//! | [`M4`] | 4×4 homogeneous transform |
//! | [`T3`] | 4×3 affine transform (an [`M4`] without its constant last column) |
//!
//! All vectors are **row vectors** multiplied on the left of a matrix,
//! `v' = v · M`, so `a.compose(&b)` means "apply `a`, then `b`":
//!
//! ```
//! use gfxmath::{P3, T3, float_types::FRAC_PI_4};
//!
//! let eighth = T3::rotate_z(FRAC_PI_4);
//! let quarter = eighth.compose(&eighth);
//! let p = P3::new(1.0, 0.0, 0.0);
//! assert!(quarter.transform(p).equivalent(eighth.transform(eighth.transform(p)), 1e-4));
//! assert!(quarter.transform(p).equivalent(P3::new(0.0, 1.0, 0.0), 1e-4));
//! ```
//!
//! Every type is `Copy`; operations return new values and never touch their
//! operands. Arithmetic never fails, and NaN/Inf propagate the IEEE way.
//!
//! # Features
//! #### Optional
//! - **wasm**: `wasm-bindgen` wrappers for the vector, point and matrix types

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod affine;
pub mod errors;
pub mod float_types;
pub mod interop;
pub mod matrix3;
pub mod matrix4;
pub mod point;
pub mod rotation;
pub mod vector;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use affine::T3;
pub use errors::MathError;
pub use matrix3::M3;
pub use matrix4::M4;
pub use point::P3;
pub use rotation::Axis;
pub use vector::{V3, V4};
