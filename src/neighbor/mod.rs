//! # Neighbor Navigation
//!
//! Step to the adjacent double toward or away from zero.
//!
//! Two flavours per direction:
//!
//! | Function                  | How                    | Exact for           |
//! |---------------------------|------------------------|---------------------|
//! | `next_toward_zero`        | magnitude bits − 1     | every input         |
//! | `next_toward_zero_fp`     | `x * (1 − 2^-53)`      | `|x| > 2^-1022`     |
//! | `next_away_from_zero`     | magnitude bits + 1     | every input         |
//! | `next_away_from_zero_fp`  | `x + x * 0x1.25p-53`   | `|x| >= 2^-1019`    |
//!
//! The `_fp` forms silently return `x` unchanged below their threshold, and
//! their handling of infinities differs from the exact forms. Both are kept
//! as they are; callers pick the trade-off.

pub mod adjacent;

pub use adjacent::{adjacent, adjacent_fp};

use crate::model::bits::{EXP_MASK, SIGN_MASK};

/// `1 - 2^-53`, the largest double below one. Multiplying by it rounds to
/// the neighbour toward zero for every normal input above the smallest
/// normal.
const TOWARD_ZERO_FACTOR: f64 = 1.0 - f64::EPSILON / 2.0;

/// `0x1.25p-53`. The plain `2^-52` nudge fails at the top of each binade;
/// this factor keeps the increment between one half and one and a half ulps.
const AWAY_FROM_ZERO_NUDGE: f64 = f64::from_bits(0x3ca2_5000_0000_0000);

/// Smallest magnitude `next_away_from_zero_fp` is exact for, `2^-1019`.
pub const AWAY_FROM_ZERO_FP_MIN: f64 = f64::from_bits(4 << 52);

/// The next double after `x` toward zero.
///
/// Equivalent to C `nextafter(x, 0)` for finite `x`.
///
/// Special cases:
/// - `next_toward_zero(±Inf) == ±MAX`
/// - `next_toward_zero(NaN)` is the same NaN
/// - `next_toward_zero(±0) == ±0`
/// - `next_toward_zero(±2^-1074) == ±0`
pub fn next_toward_zero(x: f64) -> f64 {
    let u = x.to_bits();
    let m = u & !SIGN_MASK;
    if m == 0 || m > EXP_MASK {
        return x;
    }
    f64::from_bits(u - 1)
}

/// Fast form of [`next_toward_zero`], exact for `|x| > 2^-1022`.
///
/// In `(0, 2^-1022]` the product rounds back to `x`. Infinities are a fixed
/// point here, where the exact form steps down to `±MAX`.
#[inline(always)]
pub fn next_toward_zero_fp(x: f64) -> f64 {
    x * TOWARD_ZERO_FACTOR
}

/// The next double after `x` away from zero.
///
/// For finite `x` this is `nextafter(x, copysign(Inf, x))`.
///
/// Special cases:
/// - `next_away_from_zero(±Inf) == ±Inf`
/// - `next_away_from_zero(±MAX) == ±Inf`
/// - `next_away_from_zero(0) == 2^-1074`
/// - `next_away_from_zero(-0) == -2^-1074`
/// - `next_away_from_zero(NaN)` is the same NaN
pub fn next_away_from_zero(x: f64) -> f64 {
    let u = x.to_bits();
    if u & !SIGN_MASK >= EXP_MASK {
        return x;
    }
    f64::from_bits(u + 1)
}

/// Fast form of [`next_away_from_zero`], exact for `|x| >= 2^-1019`.
///
/// Below that the increment rounds away and `x` comes back unchanged.
#[inline(always)]
pub fn next_away_from_zero_fp(x: f64) -> f64 {
    x + x * AWAY_FROM_ZERO_NUDGE
}
