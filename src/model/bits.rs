//! # BitView: binary64 as a raw 64-bit pattern
//!
//! ```text
//! f64 layout:  [ sign (1b) | exponent (11b) | significand (52b) ]
//!                bit 63      bits 62..52      bits 51..0
//! ```
//!
//! Every operation in this crate reads a double through this view. The
//! conversions are exact in both directions over all 2^64 patterns: NaN
//! payloads and the sign of zero survive a round trip untouched.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// The sign bit.
pub const SIGN_MASK: u64 = 1 << 63;

/// Exponent field, all ones. Also the bit pattern of `+Inf`, and the
/// threshold every magnitude is compared against: below is finite, equal is
/// infinite, above is NaN.
pub const EXP_MASK: u64 = 0x7ff0_0000_0000_0000;

/// The 52 stored significand bits.
pub const SIGNIFICAND_MASK: u64 = (1 << 52) - 1;

/// Width of the stored significand.
pub const SIGNIFICAND_BITS: u32 = 52;

/// Raw exponent value reserved for Inf and NaN.
pub const EXP_RESERVED: u16 = 0x7ff;

/// Exponent bias.
pub const EXP_BIAS: i32 = 1023;

// ============================================================================
// Raw reinterpretation
// ============================================================================

/// Bit pattern of `x`.
#[inline(always)]
pub fn bits(x: f64) -> u64 {
    x.to_bits()
}

/// The double whose bit pattern is `u`.
#[inline(always)]
pub fn from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}

/// Bit pattern of `x` with the sign cleared: exponent and significand only.
///
/// Read as an unsigned integer this is the position of `|x|` in the
/// sign-magnitude order. It equals [`EXP_MASK`] for both infinities and is
/// strictly greater than it for every NaN.
#[inline(always)]
pub fn magnitude_bits(x: f64) -> u64 {
    x.to_bits() & !SIGN_MASK
}

/// Raw (biased) exponent field, 0..=2047.
#[inline(always)]
pub fn exponent_field(x: f64) -> u16 {
    (magnitude_bits(x) >> SIGNIFICAND_BITS) as u16
}

/// Stored significand, without the implicit leading bit.
#[inline(always)]
pub fn significand_field(x: f64) -> u64 {
    x.to_bits() & SIGNIFICAND_MASK
}

// ============================================================================
// Decomposed form
// ============================================================================

/// A double split into its three fields.
///
/// `exponent` holds the raw biased field (11 bits) and `significand` the
/// stored 52 bits. Reassembly masks both, so out-of-range field values are
/// truncated rather than bleeding into neighbouring fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloatBits {
    pub sign: bool,
    pub exponent: u16,
    pub significand: u64,
}

impl FloatBits {
    pub fn from_bits(u: u64) -> Self {
        Self {
            sign: u & SIGN_MASK != 0,
            exponent: ((u & EXP_MASK) >> SIGNIFICAND_BITS) as u16,
            significand: u & SIGNIFICAND_MASK,
        }
    }

    pub fn from_f64(x: f64) -> Self {
        Self::from_bits(x.to_bits())
    }

    pub fn to_bits(self) -> u64 {
        let sign = if self.sign { SIGN_MASK } else { 0 };
        let exponent = ((self.exponent as u64) << SIGNIFICAND_BITS) & EXP_MASK;
        sign | exponent | (self.significand & SIGNIFICAND_MASK)
    }

    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.to_bits())
    }

    /// Unbiased exponent for normal values. Subnormals and zeros report
    /// `-1022`, the exponent they share with the smallest normal binade.
    /// Inf and NaN (field `0x7ff`) report `1024`, the same sentinel as
    /// [`log2`](crate::metric::log2).
    pub fn unbiased_exponent(self) -> i32 {
        if self.exponent == 0 {
            1 - EXP_BIAS
        } else {
            self.exponent as i32 - EXP_BIAS
        }
    }
}

impl From<f64> for FloatBits {
    fn from(x: f64) -> Self {
        Self::from_f64(x)
    }
}

impl From<FloatBits> for f64 {
    fn from(b: FloatBits) -> Self {
        b.to_f64()
    }
}

impl std::fmt::Display for FloatBits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{:03x}|{:013x}",
            if self.sign { '-' } else { '+' },
            self.exponent,
            self.significand
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
