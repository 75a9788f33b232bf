#![cfg(feature = "dev")]
//! Tests for input and degree validation.
//!
//! These tests verify the boundary checks of the fitting pipeline:
//! - Input shape and length validation
//! - Degree conversion from integer and floating-point types
//!
//! ## Test Organization
//!
//! 1. **Input Validation** - Shapes and lengths
//! 2. **Degree Validation** - Accepted and rejected degrees

use polyfit::internals::engine::validator::{IntoDegree, Validator, MAX_DEGREE};
use polyfit::internals::primitives::errors::PolyfitError;

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test validation accepts equal-length inputs of different container types.
#[test]
fn test_validate_inputs_mixed_containers() {
    let x = vec![0.0, 1.0, 2.0];
    let y = [1.0, 2.0, 3.0];

    let samples = Validator::validate_inputs(&x, &y).unwrap();

    assert_eq!(samples.len(), 3);
    assert_eq!(samples.get(2), Some((2.0, 3.0)));
}

/// Test validation rejects length mismatch.
#[test]
fn test_validate_inputs_length_mismatch() {
    let x = vec![1.0];
    let y = vec![2.0, 3.0];
    let res = Validator::validate_inputs(&x, &y);

    assert!(
        matches!(
            res,
            Err(PolyfitError::MismatchedInputs { x_len: 1, y_len: 2 })
        ),
        "Length mismatch should error"
    );
}

/// Test validation accepts empty inputs.
///
/// Emptiness is not rejected at the boundary; downstream computations
/// produce their documented fallbacks.
#[test]
fn test_validate_inputs_empty() {
    let x: Vec<f64> = vec![];
    let y: Vec<f64> = vec![];

    assert!(Validator::validate_inputs(&x, &y).unwrap().is_empty());
}

/// Test validation accepts non-finite values.
#[test]
fn test_validate_inputs_non_finite_accepted() {
    let x = vec![0.0, f64::NAN];
    let y = vec![f64::INFINITY, 1.0];

    assert!(Validator::validate_inputs(&x, &y).is_ok());
}

/// Test a strided ndarray view is a shape error.
#[cfg(feature = "ndarray")]
#[test]
fn test_validate_inputs_non_contiguous_ndarray() {
    use ndarray::{s, Array1};

    let full = Array1::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    let strided = full.slice(s![..;2]);
    let y = vec![1.0, 2.0, 3.0];

    let res = Validator::validate_inputs(&strided, &y);

    assert!(matches!(res, Err(PolyfitError::InvalidShape(_))));
}

// ============================================================================
// Degree Validation Tests
// ============================================================================

/// Test integer degrees of every width are accepted.
#[test]
fn test_validate_degree_integers() {
    assert_eq!(Validator::validate_degree(0u8), Ok(0));
    assert_eq!(Validator::validate_degree(3u32), Ok(3));
    assert_eq!(Validator::validate_degree(6usize), Ok(6));
    assert_eq!(Validator::validate_degree(2i32), Ok(2));
    assert_eq!(Validator::validate_degree(9i64), Ok(9));
}

/// Test negative integers are rejected.
#[test]
fn test_validate_degree_negative() {
    assert_eq!(
        Validator::validate_degree(-1i32),
        Err(PolyfitError::InvalidDegree(-1.0))
    );
    assert_eq!((-7isize).into_degree(), Err(PolyfitError::InvalidDegree(-7.0)));
}

/// Test integral floats are accepted.
#[test]
fn test_validate_degree_integral_float() {
    assert_eq!(Validator::validate_degree(4.0f64), Ok(4));
    assert_eq!(Validator::validate_degree(0.0f32), Ok(0));
}

/// Test fractional, negative, and non-finite floats are rejected.
#[test]
fn test_validate_degree_bad_floats() {
    assert_eq!(
        Validator::validate_degree(2.5f64),
        Err(PolyfitError::InvalidDegree(2.5))
    );
    assert_eq!(
        Validator::validate_degree(-3.0f64),
        Err(PolyfitError::InvalidDegree(-3.0))
    );
    assert!(matches!(
        Validator::validate_degree(f64::NAN),
        Err(PolyfitError::InvalidDegree(d)) if d.is_nan()
    ));
    assert!(Validator::validate_degree(f32::INFINITY).is_err());
}

/// Test degrees beyond the supported range are rejected.
///
/// The power sums need exponents up to `2 * degree`, so the largest
/// accepted degree keeps that within `i32`.
#[test]
fn test_validate_degree_too_large() {
    assert_eq!(Validator::validate_degree(MAX_DEGREE), Ok(MAX_DEGREE));
    assert_eq!(
        Validator::validate_degree(MAX_DEGREE + 1),
        Err(PolyfitError::InvalidDegree((MAX_DEGREE + 1) as f64))
    );
    assert_eq!(
        Validator::validate_degree(usize::MAX),
        Err(PolyfitError::InvalidDegree(usize::MAX as f64))
    );
    assert_eq!(
        Validator::validate_degree(u64::MAX),
        Err(PolyfitError::InvalidDegree(u64::MAX as f64))
    );
    assert!(Validator::validate_degree(i64::MAX).is_err());
    assert!(Validator::validate_degree(1e12f64).is_err());

    // The conversion alone only checks the integer shape
    assert_eq!(usize::MAX.into_degree(), Ok(usize::MAX));
}
