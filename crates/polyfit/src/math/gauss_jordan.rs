//! Gauss-Jordan elimination on dense augmented matrices.
//!
//! ## Purpose
//!
//! This module reduces an augmented matrix `[A | B]` in place to reduced
//! row-echelon form. When `A` is non-singular the leading square block
//! becomes the identity and the trailing column(s) hold the solution(s).
//! The routines know nothing about polynomials.
//!
//! ## Design notes
//!
//! * **Stateless**: Free functions taking the matrix by mutable reference.
//! * **Pivot choice**: The first non-zero entry at or below the current pivot
//!   row is used, not the largest in magnitude. Ill-conditioned systems
//!   (high degrees, widely spread x) lose precision accordingly.
//! * **Full elimination**: Every other row is cleared, above and below the
//!   pivot, so no back-substitution pass is needed.
//!
//! ## Key concepts
//!
//! * **Divide**: Scale the pivot row so the pivot cell is exactly 1.
//! * **Eliminate**: Subtract multiples of the pivot row from all other rows.
//! * **Skipped columns**: A column with no non-zero candidate is left as-is
//!   and the pivot row does not advance. No error is raised; the affected
//!   solution cells keep whatever value elimination left there.
//!
//! ## Invariants
//!
//! * Only the matrix argument is mutated.
//! * The returned rank never exceeds `min(rows, cols)`.
//!
//! ## Non-goals
//!
//! * No singularity detection beyond exact-zero pivots.
//! * No sparse or blocked elimination.

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::AugmentedMatrix;

// ============================================================================
// Row Operations
// ============================================================================

/// Divide row `row` by its entry in column `col`, leaving that entry at exactly 1.
///
/// Only cells right of `col` are divided; cells left of it are assumed to be
/// zero already.
pub fn divide_row<T: Float>(matrix: &mut AugmentedMatrix<T>, row: usize, col: usize) {
    let r = matrix.row_mut(row);
    let pivot = r[col];
    for cell in &mut r[col + 1..] {
        *cell = *cell / pivot;
    }
    r[col] = T::one();
}

/// Clear column `col` in every row except `row`, using `row` as the pivot row.
pub fn eliminate<T: Float>(matrix: &mut AugmentedMatrix<T>, row: usize, col: usize) {
    for i in 0..matrix.rows() {
        if i == row || matrix[(i, col)] == T::zero() {
            continue;
        }

        let (pivot, target) = matrix.pivot_and_row_mut(row, i);
        let factor = target[col];
        for (t, &p) in target[col + 1..].iter_mut().zip(&pivot[col + 1..]) {
            *t = *t - factor * p;
        }
        target[col] = T::zero();
    }
}

// ============================================================================
// Echelon Reduction
// ============================================================================

/// Reduce `matrix` to reduced row-echelon form in place.
///
/// Returns the number of pivots found. A rank below the row count means at
/// least one column had no usable pivot and was skipped.
pub fn echelonize<T: Float>(matrix: &mut AugmentedMatrix<T>) -> usize {
    let rows = matrix.rows();
    let cols = matrix.cols();

    let mut i = 0;
    let mut j = 0;

    while i < rows && j < cols {
        // First non-zero entry in column j at or below row i
        let mut k = i;
        while k < rows && matrix[(k, j)] == T::zero() {
            k += 1;
        }

        if k < rows {
            if k != i {
                matrix.swap_rows(i, k);
            }
            if matrix[(i, j)] != T::one() {
                divide_row(matrix, i, j);
            }
            eliminate(matrix, i, j);
            i += 1;
        } else {
            debug!("gauss-jordan: no pivot in column {j} at or below row {i}, skipping");
        }

        j += 1;
    }

    i
}
