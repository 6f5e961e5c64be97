//! # ULP magnitude and ULP distance
//!
//! Reading the sign-cleared bit pattern as an unsigned integer orders all
//! non-NaN magnitudes, and consecutive integers are consecutive floats.
//! Both the step size at `x` and the step count between two values fall
//! out of that ordering without any floating point arithmetic.
//!
//! | Operation       | Result                         | Degenerate input     |
//! |-----------------|--------------------------------|----------------------|
//! | `ulp`           | step away from zero, `f64`     | Inf → Inf, NaN → NaN |
//! | `log_ulp`       | `log2(ulp(x))`, `i32`          | Inf/NaN → 1024       |
//! | `ulps_between`  | steps between, `u64`           | NaN → `u64::MAX`     |

use crate::model::bits::{magnitude_bits, EXP_MASK, EXP_RESERVED, SIGNIFICAND_BITS, SIGN_MASK};
use crate::neighbor::next_toward_zero_fp;

use super::exponent::LOG2_NON_FINITE;

/// Distance reported whenever either operand of [`ulps_between`] is NaN.
pub const MAX_DISTANCE: u64 = u64::MAX;

/// Log2 of the smallest subnormal, `2^-1074`.
pub const LOG_MIN_SUBNORMAL: i32 = -1074;

/// The ulp of `x`: distance to the next double away from zero, always a
/// positive power of two.
///
/// When `x` is itself a power of two the step toward zero is half of this.
/// The result is assembled directly in the exponent field, so it is exact
/// across the whole range including the subnormals.
///
/// Special cases:
/// - `ulp(±Inf) == +Inf`
/// - `ulp(NaN)` is NaN (payload kept, sign cleared)
/// - `ulp(±0) == ulp(2^-1074) == 2^-1074`
pub fn ulp(x: f64) -> f64 {
    let u = magnitude_bits(x);
    let exp = u >> SIGNIFICAND_BITS;
    let step = match exp {
        e if e == EXP_RESERVED as u64 => u,
        e if e > 52 => (e - 52) << SIGNIFICAND_BITS,
        e if e > 1 => 1 << (e - 1),
        // exponent fields 0 and 1 share the subnormal spacing
        _ => 1,
    };
    f64::from_bits(step)
}

/// `log2(ulp(x))` computed from the exponent field alone.
///
/// `ulp(x) == 2^log_ulp(x)` for every finite `x`.
///
/// Special cases:
/// - `log_ulp(±Inf) == log_ulp(NaN) == 1024`
/// - `log_ulp(±0) == -1074`
pub fn log_ulp(x: f64) -> i32 {
    let exp = (magnitude_bits(x) >> SIGNIFICAND_BITS) as i32;
    match exp {
        e if e == EXP_RESERVED as i32 => LOG2_NON_FINITE,
        e if e > 0 => e - (1023 + 52),
        _ => LOG_MIN_SUBNORMAL,
    }
}

/// Gap between `x` and its neighbour toward zero, from float arithmetic
/// alone.
///
/// Valid for `|x| > 2^-1022`; smaller magnitudes return 0. For powers of two
/// the result is `ulp(x) / 2`, otherwise it equals [`ulp`].
///
/// Special cases:
/// - `ulp_fp(±Inf)` is NaN
/// - `ulp_fp(NaN)` is NaN
pub fn ulp_fp(x: f64) -> f64 {
    let y = x - next_toward_zero_fp(x);
    if y < 0.0 { -y } else { y }
}

/// Number of representable steps between `x` and `y`.
///
/// Equivalently, the count of doubles strictly between them plus one. The
/// walk follows the sign-magnitude order, so `-0` and `+0` collapse to one
/// point: they are zero steps apart, and the smallest subnormals of both
/// signs are each one step from either zero.
///
/// Special cases:
/// - `ulps_between(±Inf, ±MAX) == 1`
/// - `ulps_between(±Inf, ±Inf) == 0`
/// - `ulps_between(-Inf, +Inf) == u64::MAX - 2^53 + 1`
/// - `ulps_between(x, NaN) == u64::MAX`
/// - `ulps_between(-0, 0) == 0`
pub fn ulps_between(x: f64, y: f64) -> u64 {
    let k = x.to_bits();
    let n = y.to_bits();
    let sign_differs = (k ^ n) >= SIGN_MASK;
    let k = k & !SIGN_MASK;
    let n = n & !SIGN_MASK;
    if k > EXP_MASK || n > EXP_MASK {
        MAX_DISTANCE
    } else if sign_differs {
        // both at most EXP_MASK, the sum cannot overflow
        k + n
    } else {
        k.abs_diff(n)
    }
}
