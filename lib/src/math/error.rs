use thiserror::Error;

use crate::utils::Float;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VectorError {
    /// Coordinate is NaN or infinite
    #[error("expected finite coordinates, got ({x}, {y})")]
    NonFinite { x: Float, y: Float },
    #[error("attempt to divide a vector by zero")]
    DivisionByZero,
}

pub(crate) fn ensure_finite(x: Float, y: Float) -> Result<(), VectorError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(VectorError::NonFinite { x, y })
    }
}

pub(crate) fn ensure_nonzero(scalar: Float) -> Result<Float, VectorError> {
    if scalar == 0. {
        Err(VectorError::DivisionByZero)
    } else {
        Ok(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::{ensure_finite, ensure_nonzero, VectorError};
    use crate::utils::Float;

    #[test]
    fn finite() {
        assert_eq!(ensure_finite(1., -2.), Ok(()));
        assert_eq!(
            ensure_finite(Float::INFINITY, 0.),
            Err(VectorError::NonFinite {
                x: Float::INFINITY,
                y: 0.
            })
        );
        assert!(ensure_finite(0., Float::NAN).is_err());
    }

    #[test]
    fn nonzero() {
        assert_eq!(ensure_nonzero(2.), Ok(2.));
        assert_eq!(ensure_nonzero(0.), Err(VectorError::DivisionByZero));
        assert_eq!(ensure_nonzero(-0.), Err(VectorError::DivisionByZero));
    }

    #[test]
    fn message() {
        assert_eq!(
            VectorError::NonFinite { x: 1., y: Float::NEG_INFINITY }.to_string(),
            "expected finite coordinates, got (1, -inf)"
        );
        assert_eq!(
            VectorError::DivisionByZero.to_string(),
            "attempt to divide a vector by zero"
        );
    }
}
