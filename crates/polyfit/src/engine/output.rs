//! Fitted polynomial output type.
//!
//! ## Purpose
//!
//! This module defines [`Polynomial`], the value returned for a fitted
//! degree. It owns its coefficient vector, evaluates at query points, and
//! renders itself as a human-readable expression.
//!
//! ## Design notes
//!
//! * **No back-references**: A polynomial holds only its coefficients, not
//!   the samples or the matrix that produced it.
//! * **Closures**: [`Polynomial::into_fn`] moves the coefficients into a
//!   closure, so a callable evaluator never depends on generated source text.
//! * **Rendering**: `Display` produces `c0 + c1x^1 + c2x^2 + ...` with each
//!   coefficient in its shortest round-trip decimal form; negative
//!   coefficients keep their sign (`+ -0.5x^2`).
//!
//! ## Invariants
//!
//! * `terms[i]` is the coefficient of `x^i`.
//!
//! ## Non-goals
//!
//! * No symbolic simplification or rounding in the rendered expression.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::polynomial::regress;

// ============================================================================
// Polynomial
// ============================================================================

/// A polynomial in ascending coefficient order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    terms: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    /// Wrap a coefficient vector, `terms[i]` multiplying `x^i`.
    pub fn from_terms(terms: Vec<T>) -> Self {
        Self { terms }
    }

    /// Coefficients in ascending order of exponent.
    #[inline]
    pub fn terms(&self) -> &[T] {
        &self.terms
    }

    /// Give back the coefficient vector.
    pub fn into_terms(self) -> Vec<T> {
        self.terms
    }

    /// Highest exponent represented (`terms.len() - 1`).
    #[inline]
    pub fn degree(&self) -> usize {
        self.terms.len().saturating_sub(1)
    }

    /// Evaluate at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        regress(x, &self.terms)
    }

    /// Evaluate at each point of `xs`.
    pub fn evaluate_all(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Borrowing evaluator closure.
    pub fn as_fn(&self) -> impl Fn(T) -> T + '_ {
        move |x| regress(x, &self.terms)
    }

    /// Owning evaluator closure; the coefficients move into it.
    pub fn into_fn(self) -> impl Fn(T) -> T {
        let terms = self.terms;
        move |x| regress(x, &terms)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Polynomial<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, term) in self.terms.iter().enumerate() {
            match i {
                0 => write!(f, "{term}")?,
                _ => write!(f, " + {term}x^{i}")?,
            }
        }
        Ok(())
    }
}
