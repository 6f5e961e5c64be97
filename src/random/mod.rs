//! # Uniform Finite Floats
//!
//! Draw doubles uniformly over *bit patterns*, not over the real line: every
//! finite double, from `-MAX` to `MAX` including both zeros and all
//! subnormals, is equally likely. Roughly half of all draws land in
//! `(-1, 1)`, which is what makes this useful for fuzzing numeric code.
//!
//! The generator is splitmix64 over a single `u64` the caller owns. Only
//! 1/2048 of raw 64-bit words decode to Inf or NaN; two strategies deal with
//! them:
//!
//! | Strategy   | Draws per float | Distribution                          |
//! |------------|-----------------|---------------------------------------|
//! | `Remap`    | exactly one     | tiny bias on the remapped 1/2048      |
//! | `Resample` | 2048/2047 mean  | exactly uniform over finite patterns  |
//!
//! Not cryptographically secure.

pub mod sampler;

pub use sampler::{FloatSampler, SamplerConfig};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::bits::{EXP_MASK, EXP_RESERVED, SIGNIFICAND_BITS, SIGN_MASK};
use crate::{Error, Result};

// ============================================================================
// splitmix64
// ============================================================================

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;
const MIX_1: u64 = 0xbf58_476d_1ce4_e5b9;
const MIX_2: u64 = 0x94d0_49bb_1331_11eb;

/// Advance `state` and return the next 64-bit output.
///
/// The splitmix64 generator of Steele, Lea and Flood: full period 2^64, any
/// starting state is valid, deterministic for a given seed.
#[inline]
pub fn splitmix_step(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GOLDEN_GAMMA);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
    z ^ (z >> 31)
}

// ============================================================================
// Finite decoding
// ============================================================================

/// `f64::from_bits(u)`, except that Inf and NaN patterns get their exponent
/// replaced by `u mod 0x7ff` (0..=2046). Sign and significand are kept.
#[inline]
pub fn finite_from_bits(u: u64) -> f64 {
    let u = if u & !SIGN_MASK >= EXP_MASK {
        (u & !EXP_MASK) | ((u % EXP_RESERVED as u64) << SIGNIFICAND_BITS)
    } else {
        u
    };
    f64::from_bits(u)
}

/// A random finite double, uniform over bit patterns, from one draw.
///
/// Inf/NaN words are folded back with [`finite_from_bits`]; the modulo
/// makes the folded outcomes very slightly uneven.
#[inline]
pub fn random_finite(state: &mut u64) -> f64 {
    finite_from_bits(splitmix_step(state))
}

/// A random finite double, exactly uniform over finite bit patterns.
///
/// Words with the reserved exponent are discarded and redrawn. There is no
/// cap on redraws; the loop ends with probability one.
pub fn random_finite_resample(state: &mut u64) -> f64 {
    loop {
        let u = splitmix_step(state);
        if u & EXP_MASK != EXP_MASK {
            return f64::from_bits(u);
        }
        tracing::trace!(word = u, "reserved exponent, redrawing");
    }
}

// ============================================================================
// Strategy
// ============================================================================

/// How a sampler turns reserved-exponent words into finite doubles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One draw, fold the exponent ([`random_finite`]).
    #[default]
    Remap,
    /// Redraw until finite ([`random_finite_resample`]).
    Resample,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remap => "remap",
            Self::Resample => "resample",
        }
    }

    /// Draw one finite double from `state`.
    #[inline]
    pub fn draw(self, state: &mut u64) -> f64 {
        match self {
            Self::Remap => random_finite(state),
            Self::Resample => random_finite_resample(state),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remap" => Ok(Self::Remap),
            "resample" => Ok(Self::Resample),
            other => Err(Error::Config(format!(
                "unknown sampling strategy '{other}', expected 'remap' or 'resample'"
            ))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
