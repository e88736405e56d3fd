//! # erfc
//!
//! **The complementary error function for `f64`, accurate to the SunPro reference.**
//!
//! erfc(x) = 1 - erf(x) is the workhorse behind Gaussian tail probabilities.
//! This crate evaluates it with the FreeBSD/SunPro piecewise rational
//! approximations, reproducing the reference arithmetic operation for
//! operation, including its special cases.
//!
//! ## Features
//!
//! - **Total**: every `f64` maps to a defined result (NaN, ±∞, subnormals)
//! - **Pure**: no global state, safe to call from any number of threads
//! - **Tail-accurate**: full relative precision down to the underflow point
//! - **`no_std`**: with the `libm` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use erfc::{erf, erfc};
//!
//! assert_eq!(erfc(0.0), 1.0);
//! assert_eq!(erfc(1.0), 0.15729920705028513);
//! assert_eq!(erfc(f64::NEG_INFINITY), 2.0);
//! assert!((erf(1.0) + erfc(1.0) - 1.0).abs() < 1e-16);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): exponential from the standard library
//! - `libm`: exponential from the `libm` crate, for `no_std` targets

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("erfc requires either the `std` or `libm` feature");

// Both features enabled: std wins, libm stays linked but unused
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

pub mod algorithm;
pub mod error;

pub use algorithm::polynomial::{Polynomial, eval_poly};
pub use algorithm::special::{erf, erfc};
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::polynomial::{Polynomial, eval_poly};
    pub use crate::algorithm::special::{erf, erfc, normal_cdf, normal_sf};
    pub use crate::error::{Error, Result};
}
