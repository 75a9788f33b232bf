//! Execution engine for polynomial fits.
//!
//! ## Purpose
//!
//! This module runs the fitting pipeline for one or several degrees over a
//! sample store: build the normal equations, reduce them, extract the
//! coefficients, and wrap them in a [`Polynomial`].
//!
//! ## Design notes
//!
//! * **Per-degree buffers**: Each degree gets its own freshly allocated
//!   matrix; the sample store is only ever read.
//! * **Parallelism**: With the `parallel` feature, several degrees are fitted
//!   concurrently with `rayon`, one matrix per task.
//! * **Order**: Results are returned in the order the degrees were requested.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs or degrees (handled by `validator`).
//! * No caching of coefficients between calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::normal_equations::solve_coefficients;
use crate::engine::output::Polynomial;
use crate::primitives::samples::Samples;

// ============================================================================
// Executor
// ============================================================================

/// Stateless driver for the fitting pipeline.
pub struct FitExecutor;

impl FitExecutor {
    /// Fit a single degree.
    pub fn fit<T: Float>(samples: &Samples<'_, T>, degree: usize) -> Polynomial<T> {
        Polynomial::from_terms(solve_coefficients(samples, degree))
    }

    /// Fit each requested degree in turn.
    pub fn fit_many<T: Float>(samples: &Samples<'_, T>, degrees: &[usize]) -> Vec<Polynomial<T>> {
        debug!(
            "fitting {} degree(s) over {} samples",
            degrees.len(),
            samples.len()
        );
        degrees.iter().map(|&d| Self::fit(samples, d)).collect()
    }

    /// Fit each requested degree concurrently.
    #[cfg(feature = "parallel")]
    pub fn fit_many_parallel<T>(samples: &Samples<'_, T>, degrees: &[usize]) -> Vec<Polynomial<T>>
    where
        T: Float + Send + Sync,
    {
        debug!(
            "fitting {} degree(s) over {} samples on {} threads",
            degrees.len(),
            samples.len(),
            rayon::current_num_threads()
        );
        degrees
            .par_iter()
            .map(|&d| Self::fit(samples, d))
            .collect()
    }
}
