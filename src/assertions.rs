//! ULP-based assertions for test suites.
//!
//! ```rust
//! use floatbits::{assert_adjacent, assert_ulps_eq};
//!
//! assert_ulps_eq!(0.1 + 0.2, 0.3, 1);
//! assert_adjacent!(1.0, 1.0 + f64::EPSILON);
//! ```

/// Assert that two `f64` values are at most `max_ulps` representable steps
/// apart (see [`ulps_between`](crate::ulps_between)).
///
/// NaN on either side always fails. `-0.0` and `0.0` are equal.
#[macro_export]
macro_rules! assert_ulps_eq {
    ($left:expr, $right:expr, $max_ulps:expr $(,)?) => {{
        let left: f64 = $left;
        let right: f64 = $right;
        let max_ulps: u64 = $max_ulps;
        let dist = $crate::ulps_between(left, right);
        if dist > max_ulps {
            panic!(
                "assertion `left ≈ right` failed: {} ulps apart, at most {} allowed\n  left: {:e} ({:#018x})\n right: {:e} ({:#018x})",
                dist,
                max_ulps,
                left,
                left.to_bits(),
                right,
                right.to_bits(),
            );
        }
    }};
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_ulps_eq!($left, $right, 0)
    };
}

/// Assert that two `f64` values are neighbouring doubles, bit patterns one
/// apart (see [`adjacent`](crate::adjacent)).
#[macro_export]
macro_rules! assert_adjacent {
    ($left:expr, $right:expr $(,)?) => {{
        let left: f64 = $left;
        let right: f64 = $right;
        if !$crate::adjacent(left, right) {
            panic!(
                "assertion `left` adjacent to `right` failed\n  left: {:e} ({:#018x})\n right: {:e} ({:#018x})",
                left,
                left.to_bits(),
                right,
                right.to_bits(),
            );
        }
    }};
}
