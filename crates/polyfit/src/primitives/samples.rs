//! Read-only storage for paired observations.
//!
//! ## Purpose
//!
//! This module defines [`Samples`], the store of `(x, y)` observations a fit
//! is computed from. It borrows the caller's buffers and never mutates them.
//!
//! ## Invariants
//!
//! * `x.len() == y.len()`.
//! * Order is preserved; only index correspondence between `x` and `y` matters.
//! * NaN and infinite values are accepted and propagate numerically.

// External dependencies
use core::iter::Zip;
use core::slice::Iter;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Sample Store
// ============================================================================

/// Borrowed, immutable sequence of `(x, y)` samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Samples<'a, T> {
    x: &'a [T],
    y: &'a [T],
}

impl<'a, T: Float> Samples<'a, T> {
    /// Pair two equal-length slices into a sample store.
    pub fn new(x: &'a [T], y: &'a [T]) -> Result<Self, PolyfitError> {
        if x.len() != y.len() {
            return Err(PolyfitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the store holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Independent values.
    #[inline]
    pub fn x(&self) -> &'a [T] {
        self.x
    }

    /// Dependent values.
    #[inline]
    pub fn y(&self) -> &'a [T] {
        self.y
    }

    /// The `i`-th sample, if in range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<(T, T)> {
        Some((*self.x.get(i)?, *self.y.get(i)?))
    }

    /// Iterate over `(x, y)` pairs in storage order.
    #[inline]
    pub fn iter(&self) -> SampleIter<'a, T> {
        SampleIter {
            inner: self.x.iter().zip(self.y.iter()),
        }
    }
}

impl<'a, T: Float> IntoIterator for Samples<'a, T> {
    type Item = (T, T);
    type IntoIter = SampleIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pairs of a [`Samples`] store.
#[derive(Debug, Clone)]
pub struct SampleIter<'a, T> {
    inner: Zip<Iter<'a, T>, Iter<'a, T>>,
}

impl<T: Copy> Iterator for SampleIter<'_, T> {
    type Item = (T, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&x, &y)| (x, y))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Copy> ExactSizeIterator for SampleIter<'_, T> {}
