//! Scalar type, angle constants and the crate-wide comparison tolerance.

use core::str::FromStr;
use std::sync::OnceLock;

/// Our Real scalar type. Everything in the crate is single precision.
pub type Real = f32;

/// Lazily-initialized tolerance used as the default epsilon across the crate.
/// Defaults to `1e-4`, but can be overridden:
///  1) **Build-time**: set env var `GFXMATH_TOLERANCE` (e.g. `GFXMATH_TOLERANCE=1e-5 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

const DEFAULT_TOLERANCE: Real = 1e-4;

/// Returns the current tolerance.
/// If not set yet, it tries `GFXMATH_TOLERANCE` (parsed as [`Real`]) and
/// falls back to `1e-4`.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("GFXMATH_TOLERANCE") {
            match Real::from_str(environment_variable) {
                Ok(value) => {
                    let value = value.max(Real::EPSILON);
                    log::debug!("tolerance {value} taken from GFXMATH_TOLERANCE");
                    return value;
                },
                Err(err) => {
                    log::warn!(
                        "ignoring GFXMATH_TOLERANCE={environment_variable:?}: {err}, using {DEFAULT_TOLERANCE}"
                    );
                },
            }
        }
        DEFAULT_TOLERANCE
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `gfxmath::float_types::set_tolerance(1e-5);`
///
/// Returns `true` if this call installed the value.
pub fn set_tolerance(value: Real) -> bool {
    let value = value.max(Real::EPSILON);
    match TOLERANCE_CELL.set(value) {
        Ok(()) => {
            log::debug!("tolerance set to {value}");
            true
        },
        Err(rejected) => {
            log::warn!(
                "tolerance already fixed at {}, ignoring {rejected}",
                tolerance()
            );
            false
        },
    }
}

/// Archimedes' constant (π)
pub const PI: Real = core::f32::consts::PI;

/// π/2
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;

/// π/4
pub const FRAC_PI_4: Real = core::f32::consts::FRAC_PI_4;

/// The full circle constant (τ)
pub const TAU: Real = core::f32::consts::TAU;
