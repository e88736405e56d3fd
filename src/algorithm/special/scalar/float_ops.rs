//! IEEE-754 primitives used by the scalar kernels

/// Mask keeping the sign, exponent and upper 20 mantissa bits of an `f64`
const HIGH_WORD_MASK: u64 = 0xFFFF_FFFF_0000_0000;

/// Zero the low 32 bits of the IEEE-754 representation of `x`.
///
/// The result keeps the sign, the exponent and the upper 20 bits of the
/// mantissa, so `x - truncate_low_word(x)` and `x + truncate_low_word(x)`
/// are exact and their product carries no cancellation error.
#[inline]
pub fn truncate_low_word(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & HIGH_WORD_MASK)
}

/// Natural exponential.
#[cfg(feature = "std")]
#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Natural exponential.
#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}
