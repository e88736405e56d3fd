//! Special mathematical functions for statistical computing
//!
//! # Functions Provided
//!
//! ## Error Functions (for the normal distribution)
//! - [`erfc`] - Complementary error function (1 - erf(x))
//! - [`erf`] - Error function
//!
//! ```text
//! erf(x)  = (2/√π) ∫₀ˣ e^(-t²) dt
//! erfc(x) = 1 - erf(x) = (2/√π) ∫ₓ^∞ e^(-t²) dt
//! ```
//!
//! # Properties
//! - erfc(-x) = 2 - erfc(x)
//! - erf(-x) = -erf(x) (odd function)
//! - erfc is monotonically non-increasing, with range [0, 2]
//!
//! For large x, erf(x) ≈ 1 and computing 1 - erf(x) loses every significant
//! digit. [`erfc`] evaluates the tail directly, so Gaussian tail probabilities
//! such as `0.5 * erfc(z / √2)` keep full relative precision.
//!
//! # Algorithm Source
//!
//! SunPro rational approximations (FreeBSD `msun/src/s_erf.c`), reproduced
//! operation for operation. Coefficients live in [`erf_coefficients`].

pub mod erf_coefficients;
pub mod scalar;

pub use scalar::*;

/// Standard normal upper tail probability Q(z) = P(Z > z) = erfc(z/√2)/2
///
/// # Example
///
/// ```
/// use erfc::algorithm::special::normal_sf;
///
/// assert_eq!(normal_sf(0.0), 0.5);
/// assert!((normal_sf(1.959963984540054) - 0.025).abs() < 1e-15);
/// ```
pub fn normal_sf(z: f64) -> f64 {
    0.5 * erfc(z * core::f64::consts::FRAC_1_SQRT_2)
}

/// Standard normal CDF Φ(z) = erfc(-z/√2)/2
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z * core::f64::consts::FRAC_1_SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_tails() {
        assert_eq!(normal_cdf(0.0), 0.5);
        assert!((normal_cdf(1.0) - 0.8413447460685429).abs() < 1e-15);
        assert!((normal_sf(3.0) - 0.0013498980316300946).abs() < 1e-17);
        // Deep tail keeps relative precision
        let q = normal_sf(10.0);
        assert!(((q - 7.619853024160527e-24) / 7.619853024160527e-24).abs() < 1e-14);
        assert!(normal_cdf(f64::NAN).is_nan());
        assert_eq!(normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(normal_sf(f64::INFINITY), 0.0);
    }
}
