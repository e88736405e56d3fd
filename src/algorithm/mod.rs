//! Numerical algorithms
//!
//! - [`polynomial`] - Horner evaluation over fixed coefficient tables
//! - [`special`] - Error functions built from rational approximations

pub mod polynomial;
pub mod special;
