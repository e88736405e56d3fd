//! Error types for erfc

use thiserror::Error;

/// Result type alias using erfc's Error
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when building polynomial evaluators
///
/// The special functions themselves are total over `f64` and never fail.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Coefficient table has no entries
    #[error("Polynomial coefficient table cannot be empty")]
    EmptyCoefficients,

    /// Coefficient table contains NaN or an infinity
    #[error("Non-finite polynomial coefficient {value} at index {index}")]
    NonFiniteCoefficient {
        /// Position of the offending coefficient
        index: usize,
        /// The offending value
        value: f64,
    },
}

impl Error {
    /// Create a non-finite coefficient error
    pub fn non_finite_coefficient(index: usize, value: f64) -> Self {
        Self::NonFiniteCoefficient { index, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::EmptyCoefficients.to_string(),
            "Polynomial coefficient table cannot be empty"
        );
        assert_eq!(
            Error::non_finite_coefficient(2, f64::INFINITY).to_string(),
            "Non-finite polynomial coefficient inf at index 2"
        );
    }
}
