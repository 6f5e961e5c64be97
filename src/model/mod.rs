//! # Float Model
//!
//! The binary64 bit view and the predicates built directly on it.
//! Everything else in the crate is expressed in terms of these fields.
//!
//! Design rule: pure functions over `f64` / `u64` values, no state, no I/O.

pub mod bits;
pub mod class;

pub use bits::{
    FloatBits,
    bits, from_bits, magnitude_bits, exponent_field, significand_field,
    SIGN_MASK, EXP_MASK, SIGNIFICAND_MASK, SIGNIFICAND_BITS, EXP_RESERVED, EXP_BIAS,
};
pub use class::{FloatClass, classify, is_inf, is_finite, is_nan};
