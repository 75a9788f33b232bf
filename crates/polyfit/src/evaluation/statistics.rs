//! Goodness-of-fit statistics for polynomial fits.
//!
//! ## Purpose
//!
//! This module measures how well a coefficient vector describes a sample
//! store: the squared correlation between predicted and observed values,
//! and the standard error of the estimate.
//!
//! ## Design notes
//!
//! * **Prediction-based**: Both metrics evaluate the polynomial at every
//!   sample's `x` and compare against its `y`.
//! * **Defined fallbacks**: Degenerate inputs produce `0` rather than errors
//!   or NaN (constant predictions or observations for the correlation,
//!   fewer than three samples for the standard error).
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Correlation coefficient**: Squared Pearson correlation between
//!   `ŷ_i = p(x_i)` and `y_i`, in `[0, 1]` for finite inputs.
//! * **Standard error**: `sqrt(Σ (ŷ_i - y_i)^2 / (n - 2))`.
//!
//! ## Invariants
//!
//! * Both metrics are non-negative for finite inputs.
//! * Neither metric mutates the samples or the coefficients.
//!
//! ## Non-goals
//!
//! * This module does not perform the fit.
//! * No p-values, confidence bands, or weighted metrics.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::polynomial::regress;
use crate::primitives::samples::Samples;

// ============================================================================
// Statistics Structure
// ============================================================================

/// Goodness-of-fit metrics for one coefficient vector over one sample store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitStatistics<T> {
    /// Number of samples the metrics were computed over.
    pub n: usize,

    /// Degree of the evaluated polynomial (`terms.len() - 1`, or 0 when empty).
    pub degree: usize,

    /// Squared correlation between predicted and observed values.
    pub correlation_coefficient: T,

    /// Standard error of the estimate.
    pub standard_error: T,
}

impl<T: Float> FitStatistics<T> {
    /// Compute every metric for `terms` over `samples`.
    pub fn compute(samples: &Samples<'_, T>, terms: &[T]) -> Self {
        Self {
            n: samples.len(),
            degree: terms.len().saturating_sub(1),
            correlation_coefficient: Self::calculate_correlation_coefficient(samples, terms),
            standard_error: Self::calculate_standard_error(samples, terms),
        }
    }

    // ========================================================================
    // Correlation
    // ========================================================================

    /// Squared correlation coefficient between `p(x_i)` and `y_i`.
    ///
    /// Returns zero when the denominator vanishes, i.e. when the predicted or
    /// the observed values are constant, and for an empty store.
    pub fn calculate_correlation_coefficient(samples: &Samples<'_, T>, terms: &[T]) -> T {
        let n = samples.len();
        if n == 0 {
            return T::zero();
        }
        let n_t = T::from(n).unwrap_or_else(T::nan);

        let mut sx = T::zero();
        let mut sy = T::zero();
        let mut sxy = T::zero();
        let mut sx2 = T::zero();
        let mut sy2 = T::zero();

        for (xi, yi) in samples.iter() {
            let predicted = regress(xi, terms);
            sx = sx + predicted;
            sy = sy + yi;
            sxy = sxy + predicted * yi;
            sx2 = sx2 + predicted * predicted;
            sy2 = sy2 + yi * yi;
        }

        let div = ((sx2 - (sx * sx) / n_t) * (sy2 - (sy * sy) / n_t)).sqrt();
        if div == T::zero() {
            return T::zero();
        }

        let r = (sxy - (sx * sy) / n_t) / div;
        r * r
    }

    // ========================================================================
    // Standard Error
    // ========================================================================

    /// Standard error of the estimate, `sqrt(Σ (p(x_i) - y_i)^2 / (n - 2))`.
    ///
    /// Returns zero for two or fewer samples.
    pub fn calculate_standard_error(samples: &Samples<'_, T>, terms: &[T]) -> T {
        let n = samples.len();
        if n <= 2 {
            return T::zero();
        }

        let rss = samples.iter().fold(T::zero(), |acc, (xi, yi)| {
            let residual = regress(xi, terms) - yi;
            acc + residual * residual
        });

        (rss / T::from(n - 2).unwrap_or_else(T::nan)).sqrt()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitStatistics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Statistics:")?;
        writeln!(f, "  Data points:     {}", self.n)?;
        writeln!(f, "  Degree:          {}", self.degree)?;
        writeln!(f, "  Correlation R²:  {:.6}", self.correlation_coefficient)?;
        writeln!(f, "  Standard error:  {:.6}", self.standard_error)?;
        Ok(())
    }
}
