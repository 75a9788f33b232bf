//! Input abstractions for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides a unified view over the containers a caller may hold
//! samples in (slices, vectors, fixed-size arrays and, with the `ndarray`
//! feature, one-dimensional arrays), so construction accepts all of them
//! through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every implementation hands out a borrowed slice.
//! * **Single precision per call**: `x` and `y` share one element type `T`,
//!   so mixing `f32` and `f64` buffers is rejected at compile time.
//! * **Fail-fast**: Containers that cannot be viewed as a contiguous slice
//!   return [`PolyfitError::InvalidShape`].
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the container, in order.
//!
//! ## Non-goals
//!
//! * This module does not clean, filter, or reshape data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Ix1};
#[cfg(feature = "ndarray")]
use std::string::ToString;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyfitError;

/// Trait for containers that can be used as a sample sequence.
pub trait PolyfitInput<T: Float> {
    /// View the container as a contiguous slice.
    fn as_polyfit_slice(&self) -> Result<&[T], PolyfitError>;
}

impl<T: Float> PolyfitInput<T> for [T] {
    fn as_polyfit_slice(&self) -> Result<&[T], PolyfitError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> PolyfitInput<T> for [T; N] {
    fn as_polyfit_slice(&self) -> Result<&[T], PolyfitError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> PolyfitInput<T> for Vec<T> {
    fn as_polyfit_slice(&self) -> Result<&[T], PolyfitError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "ndarray")]
impl<T: Float, S> PolyfitInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_polyfit_slice(&self) -> Result<&[T], PolyfitError> {
        self.as_slice().ok_or_else(|| {
            PolyfitError::InvalidShape("ndarray input must be contiguous in memory".to_string())
        })
    }
}
