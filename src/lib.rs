//! # floatbits: IEEE 754 binary64 at the bit level
//!
//! Distance between doubles in units of the last place, stepping to the
//! neighbouring double, classification, exponent extraction, and uniform
//! sampling over finite bit patterns.
//!
//! ## Design Principles
//!
//! 1. **Total functions**: every operation accepts all 2^64 patterns and
//!    answers degenerate inputs with a documented sentinel, never an error
//! 2. **Bits first**: the canonical form of each operation works on the raw
//!    pattern; `_fp` variants trade range for pure float arithmetic
//! 3. **Caller-owned state**: the only mutable state is a `u64` PRNG word
//!    passed by `&mut`
//!
//! ## Quick Start
//!
//! ```rust
//! use floatbits::{adjacent, next_away_from_zero, ulp, ulps_between, random_finite};
//!
//! assert_eq!(ulps_between(1.0, 1.0 + 4.0 * f64::EPSILON), 4);
//! assert_eq!(ulps_between(-0.0, 0.0), 0);
//!
//! let x = 0.1;
//! assert!(adjacent(x, next_away_from_zero(x)));
//! assert_eq!(next_away_from_zero(x) - x, ulp(x));
//!
//! let mut state = 1u64;
//! let y = random_finite(&mut state);
//! assert!(y.is_finite());
//! ```
//!
//! ## Exact vs Fast
//!
//! | Operation       | Exact                 | Fast (float arithmetic)  |
//! |-----------------|-----------------------|--------------------------|
//! | step toward 0   | `next_toward_zero`    | `next_toward_zero_fp`    |
//! | step away from 0| `next_away_from_zero` | `next_away_from_zero_fp` |
//! | neighbours?     | `adjacent`            | `adjacent_fp`            |
//! | ulp             | `ulp`                 | `ulp_fp`                 |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod metric;
pub mod neighbor;
pub mod random;
pub mod order;
mod assertions;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    FloatBits, FloatClass,
    bits, from_bits, magnitude_bits, exponent_field, significand_field,
    classify, is_inf, is_finite, is_nan,
};

// ============================================================================
// Re-exports: Metrics
// ============================================================================

pub use metric::{is_power_of_two, log2, log_ulp, ulp, ulp_fp, ulps_between};

// ============================================================================
// Re-exports: Neighbors
// ============================================================================

pub use neighbor::{
    adjacent, adjacent_fp,
    next_toward_zero, next_toward_zero_fp,
    next_away_from_zero, next_away_from_zero_fp,
};

// ============================================================================
// Re-exports: Random
// ============================================================================

pub use random::{
    FloatSampler, SamplerConfig, Strategy,
    finite_from_bits, random_finite, random_finite_resample, splitmix_step,
};

pub use order::min;

// ============================================================================
// Error Types
// ============================================================================

/// Errors from the configuration surface. The numeric core is total and
/// never returns these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
