//! Scalar implementations of the error functions
//!
//! # Algorithms
//!
//! - **erf/erfc**: SunPro rational approximations on four |x| regimes, with an
//!   asymptotic exp(-x²)/x form for the tail (error below 1 ulp)
//! - **truncate_low_word**: IEEE-754 bit masking used to split x² exactly

mod error_functions;
mod float_ops;


pub use error_functions::*;
pub use float_ops::*;
