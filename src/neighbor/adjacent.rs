//! O(1) adjacency predicates.
//!
//! Both answer "is `ulps_between(x, y) == 1`?" without computing the
//! distance. They disagree with that definition, and with each other, at
//! signed zero and at the infinities:
//!
//! | Inputs              | `adjacent` | `adjacent_fp` | `ulps_between` |
//! |---------------------|------------|---------------|----------------|
//! | `(0, 2^-1074)`      | true       | true          | 1              |
//! | `(-0, -2^-1074)`    | true       | true          | 1              |
//! | `(0, -2^-1074)`     | **false**  | true          | 1              |
//! | `(-0, 2^-1074)`     | **false**  | true          | 1              |
//! | `(-0, 0)`           | false      | false         | 0              |
//! | `(MAX, Inf)`        | true       | **false**     | 1              |
//! | `(x, NaN)`          | false¹     | false         | `u64::MAX`     |
//!
//! ¹ `adjacent` is purely bitwise: a NaN whose payload is one pattern away
//! from an infinity is "adjacent" to it.

/// Returns true if `x` and `y` are neighbouring doubles.
///
/// The bit patterns, read as unsigned integers, must differ by exactly one.
/// There is no wrap-around, so the ends of the pattern space (`±0` and the
/// all-ones NaNs) are never neighbours. For `0 < x < y`, `adjacent(x, y)` is
/// `nextafter(x, y) == y`. The two zero-crossing pairs in the module table
/// are the only finite mismatches with `ulps_between(x, y) == 1`.
#[inline]
pub fn adjacent(x: f64, y: f64) -> bool {
    x.to_bits().abs_diff(y.to_bits()) == 1
}

/// Returns true if `x` and `y` are finite neighbouring doubles, using only
/// floating point operations.
///
/// Two distinct doubles are neighbours exactly when their midpoint rounds
/// onto one of them. Halving before adding keeps the midpoint of two large
/// values from overflowing. A NaN operand makes every comparison fail, and
/// a pair reaching into the infinities leaves a non-finite midpoint.
pub fn adjacent_fp(x: f64, y: f64) -> bool {
    if x == y {
        return false;
    }
    let mean = x / 2.0 + y / 2.0;
    if mean != x && mean != y {
        return false;
    }
    (-f64::MAX..=f64::MAX).contains(&mean)
}
