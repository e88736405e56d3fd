//! Polynomial evaluation over fixed coefficient tables
//!
//! The special functions in this crate are rational approximations whose
//! numerator and denominator are polynomials with compile-time coefficients.
//! [`Polynomial`] closes over one such table so the table is bound once and
//! evaluated many times without allocation.
//!
//! # Coefficient Convention
//!
//! Coefficients are stored in ascending order:
//! - `coeffs[0]` = constant term (c₀)
//! - `coeffs[n]` = leading coefficient (cₙ)
//! - Polynomial: p(z) = c₀ + c₁z + c₂z² + ... + cₙzⁿ
//!
//! # Rounding
//!
//! Evaluation uses Horner's scheme with separate multiply and add. A fused
//! multiply-add rounds differently, and the approximations built on top of
//! this module are only reproducible with the unfused sequence.

pub mod helpers;

pub use helpers::validate_polynomial_coeffs;

use crate::error::Result;

/// Evaluate Σ coeffs\[i\]·zⁱ with Horner's method.
///
/// An empty table evaluates to `0.0`. NaN and infinities propagate under
/// ordinary IEEE-754 arithmetic.
#[inline]
pub fn eval_poly(coeffs: &[f64], z: f64) -> f64 {
    let Some((&leading, rest)) = coeffs.split_last() else {
        return 0.0;
    };
    rest.iter().rev().fold(leading, |acc, &c| acc * z + c)
}

/// A polynomial bound to a fixed coefficient table.
///
/// # Example
///
/// ```
/// use erfc::Polynomial;
///
/// // 1 + 2z + 3z²
/// const P: Polynomial<'static> = Polynomial::new(&[1.0, 2.0, 3.0]);
/// assert_eq!(P.eval(2.0), 17.0);
/// assert_eq!(P.degree(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial<'a> {
    coeffs: &'a [f64],
}

impl<'a> Polynomial<'a> {
    /// Bind a coefficient table.
    ///
    /// # Panics
    ///
    /// Panics if `coeffs` is empty. In a `const` item this is a compile error.
    pub const fn new(coeffs: &'a [f64]) -> Self {
        assert!(
            !coeffs.is_empty(),
            "Polynomial coefficient table cannot be empty"
        );
        Self { coeffs }
    }

    /// Bind a coefficient table supplied at runtime, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCoefficients`](crate::Error::EmptyCoefficients)
    /// for an empty slice and
    /// [`Error::NonFiniteCoefficient`](crate::Error::NonFiniteCoefficient)
    /// for a NaN or infinite coefficient.
    ///
    /// # Example
    ///
    /// ```
    /// use erfc::{Error, Polynomial};
    ///
    /// let coeffs = vec![1.0, -3.0, 2.0];
    /// let p = Polynomial::try_new(&coeffs)?;
    /// assert_eq!(p.degree(), 2);
    /// assert_eq!(p.eval(2.0), 3.0);
    ///
    /// assert_eq!(Polynomial::try_new(&[]), Err(Error::EmptyCoefficients));
    /// assert!(matches!(
    ///     Polynomial::try_new(&[1.0, f64::NAN]),
    ///     Err(Error::NonFiniteCoefficient { index: 1, .. })
    /// ));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_new(coeffs: &'a [f64]) -> Result<Self> {
        validate_polynomial_coeffs(coeffs)?;
        Ok(Self { coeffs })
    }

    /// Coefficients in ascending order of degree
    pub const fn coefficients(&self) -> &'a [f64] {
        self.coeffs
    }

    /// Degree of the polynomial (number of coefficients minus one)
    pub const fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Evaluate the polynomial at `z`.
    #[inline]
    pub fn eval(&self, z: f64) -> f64 {
        eval_poly(self.coeffs, z)
    }
}
