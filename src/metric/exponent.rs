//! Binary exponent extraction.

use crate::model::bits::{magnitude_bits, EXP_BIAS, SIGNIFICAND_BITS};

/// Returned by [`log2`] and [`log_ulp`](super::log_ulp) for Inf and NaN.
/// `2^1024` overflows to `+Inf`.
pub const LOG2_NON_FINITE: i32 = 1024;

/// Returned by [`log2`] for both zeros: one below the smallest subnormal's
/// exponent.
pub const LOG2_ZERO: i32 = -1075;

/// Base 2 logarithm of `|x|`, rounded toward negative infinity.
///
/// If `log2(x) == n` then `2^n <= |x| < 2^(n+1)`. For normal values this is
/// the unbiased IEEE exponent; subnormals are resolved from the bit length
/// of the significand.
///
/// Special cases:
/// - `log2(±Inf) == log2(NaN) == 1024`
/// - `log2(±0) == -1075`
/// - `log2(-x) == log2(x)`
pub fn log2(x: f64) -> i32 {
    let u = magnitude_bits(x);
    let exp = (u >> SIGNIFICAND_BITS) as i32;
    if exp == 0 {
        // bit length of 2^n is n + 1
        return (u64::BITS - u.leading_zeros()) as i32 - 1075;
    }
    exp - EXP_BIAS
}
