//! # Polyfit: Least-Squares Polynomial Regression for Rust
//!
//! Fits a polynomial of arbitrary degree to a scatter of `(x, y)` samples by
//! least squares, evaluates it, and reports goodness-of-fit statistics.
//!
//! ## How it works
//!
//! For a degree `d` the crate builds the `(d + 1) x (d + 2)` augmented
//! normal-equations matrix directly from power sums of the samples, reduces
//! it with Gauss-Jordan elimination, and reads the coefficient vector off
//! the last column. The coefficient vector can then be evaluated, rendered,
//! or scored against the samples.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyfit::prelude::*;
//!
//! let x = vec![-1.0, 0.0, 1.0, 2.0, 3.0, 5.0, 7.0, 9.0];
//! let y = vec![-1.0, 3.0, 2.5, 5.0, 4.0, 2.0, 5.0, 4.0];
//!
//! let fit = Polyfit::new(&x, &y)?;
//!
//! // Coefficients, lowest power first
//! let terms = fit.compute_coefficients(6)?;
//! assert_eq!(terms.len(), 7);
//!
//! // Evaluate anywhere
//! let at_two = Polyfit::evaluate(&terms, 2.0);
//!
//! // Or keep a callable around
//! let f = fit.evaluator(6)?;
//! assert_eq!(f(2.0), at_two);
//!
//! // Goodness of fit
//! let r2 = fit.correlation_coefficient(&terms);
//! let se = fit.standard_error(&terms);
//! assert!(r2 > 0.9 && se < 1.0);
//!
//! println!("{}", fit.to_expression(6)?);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ```text
//! 2.6937037085228717 + 0.9585108884477604x^1 + -1.150528829693737x^2 + ...
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operations return `Result<_, PolyfitError>`:
//!
//! - **`InvalidShape`**: an input could not be viewed as a contiguous numeric
//!   sequence (e.g. a strided `ndarray` view, or a missing input).
//! - **`MismatchedInputs`**: `x` and `y` differ in length.
//! - **`InvalidDegree`**: the degree is negative, fractional, not finite, or
//!   above [`MAX_DEGREE`].
//!
//! ```rust
//! use polyfit::prelude::*;
//!
//! let x = vec![1.0];
//! let y = vec![2.0, 3.0];
//!
//! match Polyfit::new(&x, &y) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => eprintln!("Fitting failed: {}", e),
//! }
//!
//! let x = vec![1.0, 2.0, 3.0];
//! let fit = Polyfit::new(&x, &x)?;
//! assert!(fit.compute_coefficients(-1).is_err());
//! assert!(fit.compute_coefficients(1.5).is_err());
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ## Numeric degeneracy
//!
//! Numeric problems are never reported as errors:
//!
//! - A singular normal-equations matrix (e.g. a degree at or above the number
//!   of distinct `x` values) is reduced as far as possible; columns without a
//!   pivot are skipped and the corresponding coefficients are whatever the
//!   elimination left behind.
//! - The correlation coefficient is `0` when the predicted or the observed
//!   values are constant.
//! - The standard error is `0` for two or fewer samples.
//!
//! ## Features
//!
//! - `std` (default): standard library support; disable for `no_std` + `alloc`.
//! - `parallel`: fit several degrees concurrently with `rayon`.
//! - `ndarray`: accept contiguous one-dimensional `ndarray` arrays as input.
//! - `dev`: expose internal layers under [`internals`] for testing.
//!
//! ## Logging
//!
//! Diagnostic events (skipped pivot columns, matrix dimensions) are emitted
//! through the [`log`](https://docs.rs/log) facade. No logger is installed by
//! the crate.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure numeric routines.
mod math;

// Layer 3: Algorithms - normal equations and least-squares solving.
mod algorithms;

// Layer 4: Evaluation - fit statistics.
mod evaluation;

// Layer 5: Engine - validation and orchestration.
mod engine;

// High-level fit context API.
mod api;

pub use crate::api::{
    FitStatistics, IntoDegree, Polyfit, PolyfitError, PolyfitInput, Polynomial, MAX_DEGREE,
};

// Standard polyfit prelude.
pub mod prelude {
    pub use crate::api::{
        FitStatistics, IntoDegree, Polyfit, PolyfitError, PolyfitInput, Polynomial,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
