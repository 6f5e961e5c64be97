//! Minimum of two doubles with explicit signed-zero and NaN handling.

/// The smaller of `x` and `y`.
///
/// Special cases:
/// - `min(x, -Inf) == min(-Inf, x) == -Inf`, even when `x` is NaN
/// - `min(x, NaN) == min(NaN, x) == NaN` otherwise
/// - `min(-0, ±0) == min(±0, -0) == -0`
///
/// A NaN result is one of the inputs, first argument preferred, so its
/// payload is propagated rather than replaced.
pub fn min(x: f64, y: f64) -> f64 {
    if x < y {
        x
    } else if y < x {
        y
    } else if x == y {
        // only zeros compare equal with different bits
        if x == 0.0 && x.is_sign_negative() { x } else { y }
    } else if x < -f64::MAX {
        // unordered from here on: at least one NaN
        x
    } else if y < -f64::MAX {
        y
    } else if x.is_nan() {
        x
    } else {
        y
    }
}
