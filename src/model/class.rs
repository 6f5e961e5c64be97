//! Value classification over the sign-cleared bit pattern.

use serde::{Deserialize, Serialize};

use super::bits::{magnitude_bits, EXP_MASK};

/// Returns true if `x` is `+Inf` or `-Inf`.
#[inline(always)]
pub fn is_inf(x: f64) -> bool {
    magnitude_bits(x) == EXP_MASK
}

/// Returns true if `x` is neither infinite nor NaN.
#[inline(always)]
pub fn is_finite(x: f64) -> bool {
    magnitude_bits(x) < EXP_MASK
}

/// Returns true if `x` is any NaN, quiet or signalling, either sign.
///
/// Same answer as `x != x`.
#[inline(always)]
pub fn is_nan(x: f64) -> bool {
    magnitude_bits(x) > EXP_MASK
}

/// Coarse category of a double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatClass {
    Zero,
    Subnormal,
    Normal,
    Infinite,
    Nan,
}

/// Classify `x` from its bit pattern. Sign is ignored.
pub fn classify(x: f64) -> FloatClass {
    let m = magnitude_bits(x);
    match m {
        0 => FloatClass::Zero,
        m if m < (1 << 52) => FloatClass::Subnormal,
        m if m < EXP_MASK => FloatClass::Normal,
        m if m == EXP_MASK => FloatClass::Infinite,
        _ => FloatClass::Nan,
    }
}

impl FloatClass {
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Zero | Self::Subnormal | Self::Normal)
    }
}
