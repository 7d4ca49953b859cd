//! Conversion errors

use crate::float_types::Real;

/// The ways building one of the crate's types from foreign data can fail.
///
/// The algebra itself never fails; these only come out of `TryFrom` impls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// (LengthMismatch) A flat slice had the wrong number of components
    #[error("(LengthMismatch) expected {expected} components, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    /// (NonAffine) A 4×4 matrix whose last column is not `(0, 0, 0, 1)`
    #[error("(NonAffine) last column {column:?} is not [0.0, 0.0, 0.0, 1.0]")]
    NonAffine { column: [Real; 4] },
}

/// Checks a flat slice length before a `TryFrom` copies out of it.
pub(crate) const fn expect_len(values: &[Real], expected: usize) -> Result<(), MathError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(MathError::LengthMismatch { expected, found: values.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = expect_len(&[1.0, 2.0], 3).unwrap_err();
        assert_eq!(err, MathError::LengthMismatch { expected: 3, found: 2 });
        assert_eq!(err.to_string(), "(LengthMismatch) expected 3 components, found 2");

        let err = MathError::NonAffine { column: [0.0, 0.0, 1.0, 1.0] };
        assert_eq!(err.to_string(), "(NonAffine) last column [0.0, 0.0, 1.0, 1.0] is not [0.0, 0.0, 0.0, 1.0]");
    }
}
