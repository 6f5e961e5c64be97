//! # Metrics
//!
//! Magnitude of a step, distance in steps, and exponent extraction. All
//! total: degenerate inputs map to documented sentinels instead of errors.

pub mod exponent;
pub mod power;
pub mod ulp;

pub use exponent::{log2, LOG2_NON_FINITE, LOG2_ZERO};
pub use power::is_power_of_two;
pub use ulp::{log_ulp, ulp, ulp_fp, ulps_between, LOG_MIN_SUBNORMAL, MAX_DISTANCE};
