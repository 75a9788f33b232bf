#![cfg(feature = "dev")]
//! Tests for Gauss-Jordan elimination.
//!
//! These tests verify the in-place solver used for the normal equations:
//! - Divide and eliminate row operations
//! - Full reduction of non-singular systems
//! - Row swapping on zero pivots
//! - Multiple right-hand-side columns
//! - Silent handling of columns without a pivot
//!
//! ## Test Organization
//!
//! 1. **Row Operations** - divide_row, eliminate
//! 2. **Non-singular Systems** - Unique solutions
//! 3. **Degenerate Systems** - Skipped columns and rank

use approx::assert_abs_diff_eq;

use polyfit::internals::math::gauss_jordan::{divide_row, echelonize, eliminate};
use polyfit::internals::primitives::matrix::AugmentedMatrix;

// ============================================================================
// Helper Functions
// ============================================================================

fn assert_identity_block(m: &AugmentedMatrix<f64>, n: usize) {
    for r in 0..n {
        for c in 0..n {
            let expected = if r == c { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(m[(r, c)], expected, epsilon = 1e-12);
        }
    }
}

// ============================================================================
// Row Operation Tests
// ============================================================================

/// Test dividing a row by its pivot.
///
/// Verifies the pivot cell becomes exactly 1 and cells to its right are scaled.
#[test]
fn test_divide_row() {
    let mut m = AugmentedMatrix::from_rows(&[[0.0, 4.0, 2.0, 8.0], [1.0, 1.0, 1.0, 1.0]]).unwrap();

    divide_row(&mut m, 0, 1);

    assert_eq!(m.row(0), &[0.0, 1.0, 0.5, 2.0]);
    assert_eq!(m.row(1), &[1.0, 1.0, 1.0, 1.0]);
}

/// Test eliminating a column from every other row.
///
/// Verifies rows above and below the pivot are cleared, and rows that are
/// already zero in the column are untouched.
#[test]
fn test_eliminate_all_rows() {
    let mut m = AugmentedMatrix::from_rows(&[
        [2.0, 1.0, 5.0],
        [1.0, 3.0, 7.0],
        [0.0, 2.0, 9.0],
    ])
    .unwrap();

    eliminate(&mut m, 1, 0);

    assert_eq!(m.row(0), &[0.0, -5.0, -9.0]);
    assert_eq!(m.row(1), &[1.0, 3.0, 7.0]);
    assert_eq!(m.row(2), &[0.0, 2.0, 9.0]);
}

// ============================================================================
// Non-singular System Tests
// ============================================================================

/// Test a classic 3x3 system.
///
/// 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3 has x = 2, y = 3, z = -1.
#[test]
fn test_echelonize_3x3() {
    let mut m = AugmentedMatrix::from_rows(&[
        [2.0, 1.0, -1.0, 8.0],
        [-3.0, -1.0, 2.0, -11.0],
        [-2.0, 1.0, 2.0, -3.0],
    ])
    .unwrap();

    let rank = echelonize(&mut m);

    assert_eq!(rank, 3);
    assert_identity_block(&m, 3);
    assert_abs_diff_eq!(m[(0, 3)], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(m[(1, 3)], 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(m[(2, 3)], -1.0, epsilon = 1e-12);
}

/// Test that a zero leading entry triggers a row swap.
#[test]
fn test_echelonize_swaps_zero_pivot() {
    // y = 3, x + y = 5  =>  x = 2, y = 3
    let mut m = AugmentedMatrix::from_rows(&[[0.0, 1.0, 3.0], [1.0, 1.0, 5.0]]).unwrap();

    let rank = echelonize(&mut m);

    assert_eq!(rank, 2);
    assert_eq!(m.row(0), &[1.0, 0.0, 2.0]);
    assert_eq!(m.row(1), &[0.0, 1.0, 3.0]);
}

/// Test a unit pivot is not divided.
///
/// Verifies a system already in reduced form passes through unchanged.
#[test]
fn test_echelonize_identity_is_fixed_point() {
    let rows = [[1.0, 0.0, 7.0], [0.0, 1.0, -4.0]];
    let mut m = AugmentedMatrix::from_rows(&rows).unwrap();

    echelonize(&mut m);

    assert_eq!(m, AugmentedMatrix::from_rows(&rows).unwrap());
}

/// Test multiple right-hand-side columns.
///
/// Reducing [A | I] leaves A^-1 in the trailing block.
#[test]
fn test_echelonize_inverse() {
    let mut m = AugmentedMatrix::from_rows(&[[4.0, 7.0, 1.0, 0.0], [2.0, 6.0, 0.0, 1.0]]).unwrap();

    echelonize(&mut m);

    assert_identity_block(&m, 2);
    assert_abs_diff_eq!(m[(0, 2)], 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(m[(0, 3)], -0.7, epsilon = 1e-12);
    assert_abs_diff_eq!(m[(1, 2)], -0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(m[(1, 3)], 0.4, epsilon = 1e-12);
}

/// Test single precision shares the algorithm.
#[test]
fn test_echelonize_f32() {
    let mut m = AugmentedMatrix::from_rows(&[[2.0f32, 0.0, 4.0], [0.0, 4.0, 2.0]]).unwrap();

    echelonize(&mut m);

    assert_eq!(m.column(2), vec![2.0f32, 0.5]);
}

// ============================================================================
// Degenerate System Tests
// ============================================================================

/// Test an all-zero column is skipped without advancing the pivot row.
///
/// The solver then pivots on the trailing column, so the reported solution
/// cells no longer mean "coefficient values". This mirrors the documented
/// behavior for singular systems: no error, no explicit marker.
#[test]
fn test_echelonize_skips_zero_column() {
    let mut m = AugmentedMatrix::from_rows(&[[0.0, 1.0, 2.0], [0.0, 3.0, 4.0]]).unwrap();

    let rank = echelonize(&mut m);

    assert_eq!(rank, 2);
    assert_eq!(m.row(0), &[0.0, 1.0, 0.0]);
    assert_eq!(m.row(1), &[0.0, 0.0, 1.0]);
}

/// Test a rank-deficient but consistent system.
///
/// The dependent row collapses to zeros and the rank reports the deficiency.
#[test]
fn test_echelonize_rank_deficient() {
    let mut m = AugmentedMatrix::from_rows(&[[3.0, 3.0, 6.0], [3.0, 3.0, 6.0]]).unwrap();

    let rank = echelonize(&mut m);

    assert_eq!(rank, 1);
    assert_eq!(m.row(0), &[1.0, 1.0, 2.0]);
    assert_eq!(m.row(1), &[0.0, 0.0, 0.0]);
}

/// Test an empty matrix is a no-op.
#[test]
fn test_echelonize_empty() {
    let mut m: AugmentedMatrix<f64> = AugmentedMatrix::zeros(0, 0);

    assert_eq!(echelonize(&mut m), 0);
}
