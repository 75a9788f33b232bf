//! Error types for polynomial fitting.
//!
//! ## Purpose
//!
//! This module defines the error conditions raised at the boundary of the
//! fitting pipeline: unusable input containers, mismatched sample lengths,
//! and invalid polynomial degrees.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, degree).
//! * **Synchronous**: Errors are raised at the offending call and never retried.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * Numeric degeneracies (singular systems, zero variance) are never errors;
//!   they resolve to defined fallback values in the numeric layers.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for polynomial fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyfitError {
    /// An input could not be viewed as a contiguous numeric sequence.
    InvalidShape(String),

    /// `x` and `y` must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` sequence.
        x_len: usize,
        /// Number of elements in the `y` sequence.
        y_len: usize,
    },

    /// Degree must be a finite, non-negative integer.
    InvalidDegree(f64),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PolyfitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidShape(msg) => write!(f, "x and y must be arrays: {msg}"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(
                    f,
                    "x and y must have the same length: x has {x_len} points, y has {y_len}"
                )
            }
            Self::InvalidDegree(degree) => {
                write!(
                    f,
                    "Invalid degree: {degree} (must be a non-negative integer)"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PolyfitError {}
