//! Property tests over the whole bit-pattern space.
//!
//! Finite inputs are drawn uniformly over bit patterns (`finite_from_bits`
//! of a random word), so every binade, the subnormals, and both zeros are
//! equally represented, with the usual edge values mixed in.

use floatbits::neighbor::AWAY_FROM_ZERO_FP_MIN;
use floatbits::{
    FloatBits, adjacent, adjacent_fp, bits, classify, finite_from_bits, from_bits, is_finite,
    is_inf, is_nan, is_power_of_two, log2, log_ulp, magnitude_bits, min, next_away_from_zero,
    next_away_from_zero_fp, next_toward_zero, next_toward_zero_fp, random_finite,
    random_finite_resample, ulp, ulp_fp, ulps_between,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

const EDGES: [f64; 10] = [
    0.0,
    -0.0,
    5e-324,
    -5e-324,
    f64::MIN_POSITIVE,
    -f64::MIN_POSITIVE,
    1.0,
    -1.0,
    f64::MAX,
    f64::MIN,
];

fn finite() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => any::<u64>().prop_map(finite_from_bits),
        1 => proptest::sample::select(EDGES.to_vec()),
    ]
}

fn finite_nonzero() -> impl Strategy<Value = f64> {
    finite().prop_filter("nonzero", |x| *x != 0.0)
}

fn non_nan() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => finite(),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

/// NaN patterns at the ends of the unsigned pattern space, one step from
/// the zeros of the opposite sign if the space wrapped around.
const NAN_ENDS: [u64; 2] = [0x7fff_ffff_ffff_ffff, u64::MAX];

fn nan() -> impl Strategy<Value = f64> {
    prop_oneof![
        // exponent all ones, significand nonzero, either sign
        8 => (any::<bool>(), 1u64..(1 << 52)).prop_map(|(neg, s)| {
            let sign = if neg { 1u64 << 63 } else { 0 };
            f64::from_bits(sign | 0x7ff0_0000_0000_0000 | s)
        }),
        1 => proptest::sample::select(NAN_ENDS.to_vec()).prop_map(f64::from_bits),
    ]
}

/// Exact `2^n` for `n` in `-1074..=1024` (`2^1024` is `+Inf`).
fn pow2(n: i32) -> f64 {
    match n {
        1024 => f64::INFINITY,
        n if n >= -1022 => f64::from_bits(((n + 1023) as u64) << 52),
        n => f64::from_bits(1 << (n + 1074)),
    }
}

// ============================================================================
// BitView
// ============================================================================

proptest! {
    #[test]
    fn test_bits_round_trip_every_pattern(u in any::<u64>()) {
        prop_assert_eq!(bits(from_bits(u)), u);
        prop_assert_eq!(FloatBits::from_bits(u).to_bits(), u);
    }

    #[test]
    fn test_classifier_agrees_with_std(u in any::<u64>()) {
        let x = from_bits(u);
        prop_assert_eq!(is_nan(x), x.is_nan());
        prop_assert_eq!(is_inf(x), x.is_infinite());
        prop_assert_eq!(is_finite(x), x.is_finite());
        prop_assert_eq!(classify(x).is_finite(), x.is_finite());
    }
}

// ============================================================================
// Ulp and exponents
// ============================================================================

proptest! {
    #[test]
    fn test_ulp_is_a_power_of_two(x in finite()) {
        prop_assert!(is_power_of_two(ulp(x)), "ulp({:e}) = {:e}", x, ulp(x));
    }

    #[test]
    fn test_ulp_is_two_to_the_log_ulp(x in finite()) {
        prop_assert_eq!(ulp(x), pow2(log_ulp(x)));
        prop_assert_eq!(log_ulp(x), log2(ulp(x)));
    }

    #[test]
    fn test_adding_ulp_reaches_the_neighbor(x in finite_nonzero()) {
        let y = x + ulp(x).copysign(x);
        prop_assert!(adjacent(x, y));
        prop_assert_eq!(ulps_between(x, y), 1);
        prop_assert_eq!(y.to_bits(), next_away_from_zero(x).to_bits());
    }

    #[test]
    fn test_adding_ulp_to_positive(x in finite_nonzero().prop_map(f64::abs)) {
        let y = x + ulp(x);
        prop_assert!(adjacent(x, y));
        prop_assert_eq!(ulps_between(x, y), 1);
    }

    #[test]
    fn test_log2_brackets_the_magnitude(x in finite_nonzero()) {
        let n = log2(x);
        let a = x.abs();
        prop_assert!(pow2(n) <= a && a < pow2(n + 1), "log2({:e}) = {}", x, n);
    }

    #[test]
    fn test_power_of_two_iff_exact_pow2(n in -1074i32..=1023, k in 2u64..1024) {
        let p = pow2(n);
        prop_assert!(is_power_of_two(p));
        prop_assert!(!is_power_of_two(-p));
        // k * 2^-1074 is a power of two iff k is
        let sub = from_bits(k);
        prop_assert_eq!(is_power_of_two(sub), k.is_power_of_two());
    }
}

// ============================================================================
// Distance
// ============================================================================

proptest! {
    #[test]
    fn test_distance_is_symmetric(x in non_nan(), y in non_nan()) {
        prop_assert_eq!(ulps_between(x, y), ulps_between(y, x));
        prop_assert_eq!(ulps_between(x, x), 0);
    }

    #[test]
    fn test_distance_to_nan_saturates(x in any::<u64>().prop_map(from_bits), n in nan()) {
        prop_assert_eq!(ulps_between(n, x), u64::MAX);
        prop_assert_eq!(ulps_between(x, n), u64::MAX);
    }

    #[test]
    fn test_distance_adds_along_a_line(x in finite(), k in 0u64..1000) {
        // walk k steps away from zero, staying inside the finite range
        let mut y = x;
        for _ in 0..k {
            if !is_finite(next_away_from_zero(y)) { break; }
            y = next_away_from_zero(y);
        }
        let walked = ulps_between(x, y);
        prop_assert!(walked <= k);
        prop_assert_eq!(walked, magnitude_bits(y) - magnitude_bits(x));
    }

    #[test]
    fn test_nan_is_never_adjacent(x in non_nan(), n in nan()) {
        prop_assert!(!adjacent_fp(x, n));
        prop_assert!(!adjacent_fp(n, x));
        if is_finite(x) {
            prop_assert!(!adjacent(x, n));
            prop_assert!(!adjacent(n, x));
        }
    }
}

#[test]
fn test_nan_at_pattern_ends_is_never_adjacent_to_zero() {
    for n in NAN_ENDS.map(from_bits) {
        for z in [0.0, -0.0] {
            assert!(!adjacent(z, n), "adjacent({z:e}, {:016x})", n.to_bits());
            assert!(!adjacent(n, z), "adjacent({:016x}, {z:e})", n.to_bits());
            assert!(!adjacent_fp(z, n));
        }
    }
}

// ============================================================================
// Neighbors and adjacency
// ============================================================================

proptest! {
    #[test]
    fn test_toward_then_away_round_trips(x in finite_nonzero()) {
        prop_assert_eq!(next_toward_zero(next_away_from_zero(x)).to_bits(), x.to_bits());
        prop_assert_eq!(next_away_from_zero(next_toward_zero(x)).to_bits(), x.to_bits());
    }

    #[test]
    fn test_neighbors_are_one_step(x in finite()) {
        let away = next_away_from_zero(x);
        prop_assert_eq!(ulps_between(x, away), 1);
        if x != 0.0 {
            prop_assert_eq!(ulps_between(x, next_toward_zero(x)), 1);
            prop_assert!(next_toward_zero(x).abs() < x.abs());
        }
        prop_assert!(away.abs() > x.abs());
    }

    #[test]
    fn test_adjacent_matches_distance_on_same_sign(x in finite(), double in any::<bool>()) {
        let mut y = next_toward_zero(x);
        if double {
            y *= 2.0;
        }
        let one_step = ulps_between(x, y) == 1;
        prop_assert_eq!(adjacent(x, y), one_step, "x = {:e}, y = {:e}", x, y);
        // adjacent_fp rejects (±MAX, ±Inf), which doubling can produce
        if is_finite(y) {
            prop_assert_eq!(adjacent_fp(x, y), one_step, "x = {:e}, y = {:e}", x, y);
        }
    }

    #[test]
    fn test_fast_toward_zero_exact_above_min_normal(x in finite()) {
        prop_assume!(x.abs() > f64::MIN_POSITIVE);
        prop_assert_eq!(next_toward_zero_fp(x), next_toward_zero(x));
        prop_assert_eq!(ulp_fp(x), (x - next_toward_zero(x)).abs());
    }

    #[test]
    fn test_fast_away_from_zero_exact_above_threshold(x in finite()) {
        prop_assume!(x.abs() >= AWAY_FROM_ZERO_FP_MIN);
        prop_assert_eq!(next_away_from_zero_fp(x), next_away_from_zero(x));
    }
}

// ============================================================================
// Random and ordering
// ============================================================================

proptest! {
    #[test]
    fn test_draws_are_finite(seed in any::<u64>()) {
        let mut a = seed;
        let mut b = seed;
        for _ in 0..64 {
            prop_assert!(is_finite(random_finite(&mut a)));
            prop_assert!(is_finite(random_finite_resample(&mut b)));
        }
    }

    #[test]
    fn test_remap_keeps_finite_words(u in any::<u64>()) {
        let x = finite_from_bits(u);
        prop_assert!(is_finite(x));
        if is_finite(from_bits(u)) {
            prop_assert_eq!(x.to_bits(), u);
        }
    }

    #[test]
    fn test_min_is_a_lower_bound(x in non_nan(), y in non_nan()) {
        let m = min(x, y);
        prop_assert!(m <= x && m <= y);
        prop_assert!(m.to_bits() == x.to_bits() || m.to_bits() == y.to_bits());
        prop_assert_eq!(min(x, y).to_bits(), min(y, x).to_bits());
    }
}
