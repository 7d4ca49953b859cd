//! The one place the axis rotation matrices are written down.
//!
//! [`M3`](crate::M3), [`M4`](crate::M4) and [`T3`](crate::T3) all take their
//! rotation block from [`rotation_rows`], so the three representations of the
//! same angle agree exactly.

use crate::float_types::Real;

/// Coordinate axis to rotate about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Row-major 3×3 rotation block for row vectors (`v' = v · R`).
///
/// With row vectors, a positive angle turns Z counter-clockwise
/// (`X` toward `Y`) but X and Y clockwise: `rotate_x` takes `Y` toward
/// `-Z` and `rotate_y` takes `X` toward `+Z`. In right-handed
/// axis-angle terms X and Y rotate by `-radians`, Z by `+radians`.
///
/// ```text
/// X: [1  0  0]   Y: [ c  0  s]   Z: [ c  s  0]
///    [0  c -s]      [ 0  1  0]      [-s  c  0]
///    [0  s  c]      [-s  0  c]      [ 0  0  1]
/// ```
pub fn rotation_rows(axis: Axis, radians: Real) -> [[Real; 3]; 3] {
    let (s, c) = radians.sin_cos();
    match axis {
        Axis::X => [
            [1.0, 0.0, 0.0],
            [0.0, c, -s],
            [0.0, s, c],
        ],
        Axis::Y => [
            [c, 0.0, s],
            [0.0, 1.0, 0.0],
            [-s, 0.0, c],
        ],
        Axis::Z => [
            [c, s, 0.0],
            [-s, c, 0.0],
            [0.0, 0.0, 1.0],
        ],
    }
}
