//! Input validation for polynomial fitting.
//!
//! ## Purpose
//!
//! This module checks the preconditions at the boundary of the fitting
//! pipeline: that both inputs can be viewed as numeric slices, that they
//! have equal lengths, and that a requested degree is a non-negative
//! integer.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Boundary only**: Values themselves are not inspected; NaN and
//!   infinities are accepted and propagate through the numeric layers.
//! * **Degree conversion**: [`IntoDegree`] lets integer and floating-point
//!   degrees share one validation path.
//!
//! ## Invariants
//!
//! * A validated degree `d` satisfies `d <= MAX_DEGREE`, so `2 * d` is a
//!   valid `powi` exponent and the matrix dimensions cannot overflow.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not reject degrees that underdetermine the fit.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyfitError;
use crate::primitives::input::PolyfitInput;
use crate::primitives::samples::Samples;

// ============================================================================
// Degree Conversion
// ============================================================================

/// Largest accepted degree; the power sums need exponents up to `2 * degree`.
pub const MAX_DEGREE: usize = (i32::MAX / 2) as usize;

/// Conversion of a caller-supplied degree into a validated `usize`.
pub trait IntoDegree {
    /// Convert to a degree, failing with [`PolyfitError::InvalidDegree`].
    fn into_degree(self) -> Result<usize, PolyfitError>;
}

macro_rules! impl_into_degree_unsigned {
    ($($t:ty),*) => {$(
        impl IntoDegree for $t {
            #[inline]
            fn into_degree(self) -> Result<usize, PolyfitError> {
                usize::try_from(self).map_err(|_| PolyfitError::InvalidDegree(self as f64))
            }
        }
    )*};
}

macro_rules! impl_into_degree_signed {
    ($($t:ty),*) => {$(
        impl IntoDegree for $t {
            #[inline]
            fn into_degree(self) -> Result<usize, PolyfitError> {
                if self < 0 {
                    return Err(PolyfitError::InvalidDegree(self as f64));
                }
                usize::try_from(self).map_err(|_| PolyfitError::InvalidDegree(self as f64))
            }
        }
    )*};
}

macro_rules! impl_into_degree_float {
    ($($t:ty),*) => {$(
        impl IntoDegree for $t {
            #[inline]
            fn into_degree(self) -> Result<usize, PolyfitError> {
                let integral = self.is_finite()
                    && self >= 0.0
                    && Float::fract(self) == 0.0
                    && (self as f64) <= usize::MAX as f64;
                if !integral {
                    return Err(PolyfitError::InvalidDegree(self as f64));
                }
                Ok(self as usize)
            }
        }
    )*};
}

impl_into_degree_unsigned!(u8, u16, u32, u64, usize);
impl_into_degree_signed!(i8, i16, i32, i64, isize);
impl_into_degree_float!(f32, f64);

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fitting inputs and parameters.
///
/// Provides static methods that fail fast on the first violation.
pub struct Validator;

impl Validator {
    /// View both inputs as slices and pair them into a sample store.
    pub fn validate_inputs<'a, T, X, Y>(x: &'a X, y: &'a Y) -> Result<Samples<'a, T>, PolyfitError>
    where
        T: Float,
        X: PolyfitInput<T> + ?Sized,
        Y: PolyfitInput<T> + ?Sized,
    {
        // Check 1: Both inputs are contiguous numeric sequences
        let x = x.as_polyfit_slice()?;
        let y = y.as_polyfit_slice()?;

        // Check 2: Matching lengths
        Samples::new(x, y)
    }

    /// Validate a requested polynomial degree.
    #[inline]
    pub fn validate_degree<D: IntoDegree>(degree: D) -> Result<usize, PolyfitError> {
        let degree = degree.into_degree()?;
        if degree > MAX_DEGREE {
            return Err(PolyfitError::InvalidDegree(degree as f64));
        }
        Ok(degree)
    }
}
