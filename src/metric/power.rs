//! Exact power-of-two test over the decomposed fields.

use crate::model::bits::{EXP_RESERVED, SIGNIFICAND_BITS};

/// Returns true if `x` is an integer power of two, `2^n` for some `n` in
/// `-1074..=1023`.
///
/// `x` qualifies exactly when all three hold:
/// - the significand is zero or a single set bit
/// - exactly one of significand and exponent is nonzero
/// - sign and exponent together denote a finite non-negative value
///
/// A normal power of two has an empty significand; a subnormal one has a
/// zero exponent and one significand bit. The sign bit sits above the
/// exponent, so every negative input fails the last check.
///
/// Special cases:
/// - `is_power_of_two(1) == true`
/// - `is_power_of_two(±0) == false`
/// - `is_power_of_two(x) == false` for `x < 0`
/// - `is_power_of_two(±Inf) == false`
/// - `is_power_of_two(NaN) == false`
pub fn is_power_of_two(x: f64) -> bool {
    let u = x.to_bits();
    let e = u >> SIGNIFICAND_BITS; // sign + exponent
    let s = u << (64 - SIGNIFICAND_BITS); // significand, high-aligned

    s & s.wrapping_sub(1) == 0 && (s > 0) != (e > 0) && e < EXP_RESERVED as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_two() {
        for x in [1.0, 2.0, 0.5, 1024.0, 2f64.powi(50), 2f64.powi(-50), 2f64.powi(1023)] {
            assert!(is_power_of_two(x), "{x:e}");
        }
        assert!(is_power_of_two(f64::MIN_POSITIVE));
        assert!(is_power_of_two(5e-324));
        assert!(is_power_of_two(f64::from_bits(1 << 51)));
    }

    #[test]
    fn non_powers() {
        for x in [0.0, -0.0, -1.0, 3.0, 0.75, 2f64.powi(50) - 1.0, f64::MAX, -5e-324] {
            assert!(!is_power_of_two(x), "{x:e}");
        }
        assert!(!is_power_of_two(f64::from_bits(3)));
        assert!(!is_power_of_two(f64::MIN_POSITIVE + 5e-324));
    }

    #[test]
    fn non_finite_are_not_powers() {
        assert!(!is_power_of_two(f64::INFINITY));
        assert!(!is_power_of_two(f64::NEG_INFINITY));
        assert!(!is_power_of_two(f64::NAN));
        // exponent all ones, single significand bit: still NaN
        assert!(!is_power_of_two(f64::from_bits(0x7ff0_0000_0000_0001)));
    }
}
