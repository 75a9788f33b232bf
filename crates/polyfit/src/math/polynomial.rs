//! Polynomial evaluation from a coefficient vector.
//!
//! ## Purpose
//!
//! This module evaluates `sum(terms[i] * x^i)` for a coefficient vector in
//! ascending order of exponent. It is the single evaluation routine used for
//! prediction, fitted-value computation and the fit statistics.
//!
//! ## Invariants
//!
//! * Pure: no state, no allocation, no failure modes.
//! * An empty coefficient vector evaluates to zero.
//! * NaN and infinities propagate through ordinary floating-point arithmetic.

// External dependencies
use num_traits::Float;

/// Evaluate the polynomial with coefficients `terms` at `x`.
///
/// `terms[i]` is the coefficient of `x^i`. Terms are summed lowest exponent
/// first, each power computed independently.
#[inline]
pub fn regress<T: Float>(x: T, terms: &[T]) -> T {
    let mut acc = T::zero();
    let mut exp = 0i32;

    for &term in terms {
        acc = acc + term * x.powi(exp);
        exp += 1;
    }

    acc
}
