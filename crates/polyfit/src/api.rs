//! High-level API for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point, [`Polyfit`], a
//! fit context over one read-only sample store. Every operation on it is a
//! stateless computation: coefficients are recomputed per call and returned
//! as caller-owned values.
//!
//! ## Design notes
//!
//! * **Borrowing**: The context borrows the caller's `x`/`y` buffers.
//! * **Flexible inputs**: Anything implementing [`PolyfitInput`] is accepted.
//! * **Flexible degrees**: Anything implementing [`IntoDegree`] is accepted;
//!   negative, fractional, non-finite, or oversized degrees are rejected.
//! * **Type-Safe**: Generic over `Float` types, so `f32` and `f64` samples
//!   share one implementation.
//!
//! ## Key concepts
//!
//! 1. Create a context with [`Polyfit::new`].
//! 2. Request coefficients, a [`Polynomial`], an evaluator closure, or an
//!    expression for a degree.
//! 3. Score a coefficient vector with [`Polyfit::correlation_coefficient`],
//!    [`Polyfit::standard_error`], or [`Polyfit::statistics`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{
    string::{String, ToString},
    vec::Vec,
};

// External dependencies
use core::fmt::Display;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::FitExecutor;
use crate::engine::validator::Validator;
use crate::math::polynomial::regress;
use crate::primitives::samples::Samples;

// Publicly re-exported types
pub use crate::engine::output::Polynomial;
pub use crate::engine::validator::{IntoDegree, MAX_DEGREE};
pub use crate::evaluation::statistics::FitStatistics;
pub use crate::primitives::errors::PolyfitError;
pub use crate::primitives::input::PolyfitInput;

// ============================================================================
// Fit Context
// ============================================================================

/// Least-squares polynomial fit context over a fixed set of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polyfit<'a, T> {
    samples: Samples<'a, T>,
}

impl<'a, T: Float> Polyfit<'a, T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fit context from paired `x` and `y` sequences.
    ///
    /// Fails with [`PolyfitError::InvalidShape`] if either input cannot be
    /// viewed as a contiguous slice, and with
    /// [`PolyfitError::MismatchedInputs`] if the lengths differ.
    pub fn new<X, Y>(x: &'a X, y: &'a Y) -> Result<Self, PolyfitError>
    where
        X: PolyfitInput<T> + ?Sized,
        Y: PolyfitInput<T> + ?Sized,
    {
        let samples = Validator::validate_inputs(x, y)?;
        Ok(Self { samples })
    }

    /// Create a fit context from inputs that may be absent.
    ///
    /// A missing input is a shape error, the same as an unusable container.
    pub fn from_options<X, Y>(x: Option<&'a X>, y: Option<&'a Y>) -> Result<Self, PolyfitError>
    where
        X: PolyfitInput<T> + ?Sized,
        Y: PolyfitInput<T> + ?Sized,
    {
        match (x, y) {
            (Some(x), Some(y)) => Self::new(x, y),
            (None, _) => Err(PolyfitError::InvalidShape("x is missing".to_string())),
            (_, None) => Err(PolyfitError::InvalidShape("y is missing".to_string())),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Independent values.
    #[inline]
    pub fn x(&self) -> &'a [T] {
        self.samples.x()
    }

    /// Dependent values.
    #[inline]
    pub fn y(&self) -> &'a [T] {
        self.samples.y()
    }

    /// The `i`-th `(x, y)` sample.
    #[inline]
    pub fn sample(&self, i: usize) -> Option<(T, T)> {
        self.samples.get(i)
    }

    /// The underlying sample store.
    #[inline]
    pub fn samples(&self) -> Samples<'a, T> {
        self.samples
    }

    // ========================================================================
    // Fitting
    // ========================================================================

    /// Least-squares coefficients for a polynomial of `degree`.
    ///
    /// Returns `degree + 1` values, `terms[i]` multiplying `x^i`. Singular
    /// systems do not fail; see the crate documentation.
    pub fn compute_coefficients<D: IntoDegree>(&self, degree: D) -> Result<Vec<T>, PolyfitError> {
        Ok(self.polynomial(degree)?.into_terms())
    }

    /// Fitted [`Polynomial`] of `degree`.
    pub fn polynomial<D: IntoDegree>(&self, degree: D) -> Result<Polynomial<T>, PolyfitError> {
        let degree = Validator::validate_degree(degree)?;
        Ok(FitExecutor::fit(&self.samples, degree))
    }

    /// Evaluator closure for the fit of `degree`.
    ///
    /// The closure owns a copy of the coefficients and is independent of
    /// this context.
    pub fn evaluator<D: IntoDegree>(&self, degree: D) -> Result<impl Fn(T) -> T, PolyfitError> {
        Ok(self.polynomial(degree)?.into_fn())
    }

    /// Human-readable expression `c0 + c1x^1 + c2x^2 + ...` for `degree`.
    pub fn to_expression<D: IntoDegree>(&self, degree: D) -> Result<String, PolyfitError>
    where
        T: Display,
    {
        Ok(self.polynomial(degree)?.to_string())
    }

    /// Coefficients for several degrees, in request order.
    pub fn compute_coefficients_for<D: IntoDegree + Copy>(
        &self,
        degrees: &[D],
    ) -> Result<Vec<Vec<T>>, PolyfitError> {
        let degrees = Self::validate_degrees(degrees)?;
        Ok(FitExecutor::fit_many(&self.samples, &degrees)
            .into_iter()
            .map(Polynomial::into_terms)
            .collect())
    }

    /// Coefficients for several degrees fitted concurrently, in request order.
    #[cfg(feature = "parallel")]
    pub fn par_compute_coefficients_for<D: IntoDegree + Copy>(
        &self,
        degrees: &[D],
    ) -> Result<Vec<Vec<T>>, PolyfitError>
    where
        T: Send + Sync,
    {
        let degrees = Self::validate_degrees(degrees)?;
        Ok(FitExecutor::fit_many_parallel(&self.samples, &degrees)
            .into_iter()
            .map(Polynomial::into_terms)
            .collect())
    }

    fn validate_degrees<D: IntoDegree + Copy>(degrees: &[D]) -> Result<Vec<usize>, PolyfitError> {
        degrees
            .iter()
            .map(|&d| Validator::validate_degree(d))
            .collect()
    }

    // ========================================================================
    // Evaluation and Statistics
    // ========================================================================

    /// Evaluate the polynomial with coefficients `terms` at `x`.
    #[inline]
    pub fn evaluate(terms: &[T], x: T) -> T {
        regress(x, terms)
    }

    /// Squared correlation between `terms` evaluated at each `x` and the observed `y`.
    pub fn correlation_coefficient(&self, terms: &[T]) -> T {
        FitStatistics::calculate_correlation_coefficient(&self.samples, terms)
    }

    /// Standard error of the estimate for `terms`.
    pub fn standard_error(&self, terms: &[T]) -> T {
        FitStatistics::calculate_standard_error(&self.samples, terms)
    }

    /// All fit statistics for `terms`.
    pub fn statistics(&self, terms: &[T]) -> FitStatistics<T> {
        FitStatistics::compute(&self.samples, terms)
    }
}
