//! Normal-equation construction and least-squares coefficient solving.
//!
//! ## Purpose
//!
//! This module turns a sample store and a target degree into the augmented
//! normal-equations matrix of the least-squares problem, and solves it for
//! the coefficient vector.
//!
//! ## Design notes
//!
//! * **Hankel structure**: Cell `(r, c)` of the square block depends only on
//!   `r + c`, so the `2p - 1` power sums `Σ x^k` are accumulated once and
//!   reused across the anti-diagonals.
//! * **Single pass**: Power sums and the right-hand side `Σ x^r * y` are
//!   accumulated in the same sweep over the samples.
//! * **Fresh buffer**: Every solve allocates its own matrix, so concurrent
//!   solves over one sample store share nothing mutable.
//!
//! ## Key concepts
//!
//! * With `p = degree + 1` the matrix is `p x (p + 1)`.
//! * `m[r][c] = Σ x^(r+c)` for `c < p`, and `m[r][p] = Σ x^r * y`.
//! * Degree 0 yields `[[n, Σ y]]`, whose solution is the mean of `y`.
//!
//! ## Invariants
//!
//! * The coefficient vector always has exactly `degree + 1` entries.
//! * Singular systems are not rejected; see [`crate::math::gauss_jordan`].
//!
//! ## Non-goals
//!
//! * No overflow guarding: large degrees with large `|x|` overflow to infinity.
//! * No weighting, regularization, or orthogonal-basis conditioning.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::math::gauss_jordan::echelonize;
use crate::primitives::matrix::AugmentedMatrix;
use crate::primitives::samples::Samples;

// ============================================================================
// Accumulation
// ============================================================================

/// Power sums and right-hand side accumulated in one sweep over the samples.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalSums<T> {
    /// `power_sums[k] = Σ x^k` for `k = 0 .. 2p - 2`.
    pub power_sums: Vec<T>,

    /// `rhs[r] = Σ x^r * y` for `r = 0 .. p - 1`.
    pub rhs: Vec<T>,
}

impl<T: Float> NormalSums<T> {
    /// Accumulate the sums needed for a fit of the given degree.
    pub fn accumulate(samples: &Samples<'_, T>, degree: usize) -> Self {
        let p = degree + 1;
        let rs = 2 * p - 1;

        let mut power_sums = vec![T::zero(); rs];
        let mut rhs = vec![T::zero(); p];

        power_sums[0] = T::from(samples.len()).unwrap_or_else(T::nan);

        for (x, y) in samples.iter() {
            for (k, sum) in power_sums.iter_mut().enumerate().skip(1) {
                *sum = *sum + x.powi(k as i32);
            }

            rhs[0] = rhs[0] + y;
            for (r, sum) in rhs.iter_mut().enumerate().skip(1) {
                *sum = *sum + x.powi(r as i32) * y;
            }
        }

        Self { power_sums, rhs }
    }

    /// Number of unknowns `p` these sums describe.
    #[inline]
    pub fn order(&self) -> usize {
        self.rhs.len()
    }

    /// Lay the sums out as a `p x (p + 1)` augmented matrix.
    pub fn into_matrix(self) -> AugmentedMatrix<T> {
        let p = self.order();
        let mut matrix = AugmentedMatrix::zeros(p, p + 1);

        for r in 0..p {
            for c in 0..p {
                matrix[(r, c)] = self.power_sums[r + c];
            }
            matrix[(r, p)] = self.rhs[r];
        }

        matrix
    }
}

// ============================================================================
// Matrix Construction and Solving
// ============================================================================

/// Build the augmented normal-equations matrix for a polynomial of `degree`.
pub fn build_normal_equations<T: Float>(
    samples: &Samples<'_, T>,
    degree: usize,
) -> AugmentedMatrix<T> {
    let matrix = NormalSums::accumulate(samples, degree).into_matrix();
    trace!(
        "normal equations: {} samples, degree {}, {}x{} matrix",
        samples.len(),
        degree,
        matrix.rows(),
        matrix.cols()
    );
    matrix
}

/// Solve for the least-squares coefficients of a polynomial of `degree`.
///
/// Returns `degree + 1` coefficients, `terms[i]` multiplying `x^i`.
pub fn solve_coefficients<T: Float>(samples: &Samples<'_, T>, degree: usize) -> Vec<T> {
    let mut matrix = build_normal_equations(samples, degree);
    let p = matrix.rows();

    let rank = echelonize(&mut matrix);
    if rank < p {
        trace!("normal equations for degree {degree} are rank deficient ({rank} of {p})");
    }

    matrix.column(p)
}
