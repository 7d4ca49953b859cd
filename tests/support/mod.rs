//! Test support library
//! Provides shared tolerances and sample inputs for the integration tests.

use gfxmath::{P3, V3, float_types::Real};

/// Tolerance used by every property test in this directory.
pub const EPS: Real = 1e-4;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A spread of angles, in radians, covering all four quadrants and a few
/// awkward values.
pub fn sample_angles() -> Vec<Real> {
    vec![0.0, 0.1, 0.5, 1.0, 1.5707964, 2.3, 3.1415927, -0.7, -2.9, 5.0]
}

/// Non-degenerate vectors of assorted lengths.
pub fn sample_vectors() -> Vec<V3> {
    vec![
        V3::new(1.0, 0.0, 0.0),
        V3::new(0.0, 1.0, 0.0),
        V3::new(0.0, 0.0, 1.0),
        V3::new(1.0, 2.0, 3.0),
        V3::new(-0.5, 0.25, 4.0),
        V3::new(3.0, -3.0, -3.0),
    ]
}

pub fn sample_points() -> Vec<P3> {
    sample_vectors().into_iter().map(P3::from_vector).collect()
}
