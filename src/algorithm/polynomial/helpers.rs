//! Helper functions for polynomial operations

use crate::error::{Error, Result};

/// Validate a polynomial coefficient table
///
/// Requirements:
/// - Must have at least one element (degree >= 0)
/// - Every coefficient must be finite
///
/// Returns the number of coefficients.
pub fn validate_polynomial_coeffs(coeffs: &[f64]) -> Result<usize> {
    if coeffs.is_empty() {
        return Err(Error::EmptyCoefficients);
    }

    if let Some((index, &value)) = coeffs.iter().enumerate().find(|(_, c)| !c.is_finite()) {
        return Err(Error::non_finite_coefficient(index, value));
    }

    Ok(coeffs.len())
}
