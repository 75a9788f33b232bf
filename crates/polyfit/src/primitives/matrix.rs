//! Dense row-major matrix storage for the normal equations.
//!
//! ## Purpose
//!
//! This module provides [`AugmentedMatrix`], the transient working structure
//! the normal-equation builder fills and the Gauss-Jordan solver reduces in
//! place. One matrix is allocated per coefficient computation and dropped
//! once the solution column has been extracted.
//!
//! ## Design notes
//!
//! * **Single allocation**: All cells live in one contiguous `Vec<T>`, rows
//!   are slices into it.
//! * **Row operations**: Swapping and split borrows are provided so the
//!   solver can read a pivot row while updating another row.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols`.
//!
//! ## Non-goals
//!
//! * No sparse storage or blocked layouts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

#[cfg(all(feature = "dev", not(feature = "std")))]
use alloc::format;
#[cfg(all(feature = "dev", feature = "std"))]
use std::format;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::{Index, IndexMut};
use num_traits::Zero;

// Internal dependencies
#[cfg(feature = "dev")]
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Augmented Matrix
// ============================================================================

/// Dense `rows x cols` matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy + Zero> AugmentedMatrix<T> {
    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Build a matrix from row-major data.
    #[cfg(feature = "dev")]
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, PolyfitError> {
        if data.len() != rows * cols {
            return Err(PolyfitError::InvalidShape(format!(
                "expected {} cells for a {}x{} matrix, got {}",
                rows * cols,
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from a slice of equally sized rows.
    #[cfg(feature = "dev")]
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, PolyfitError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(PolyfitError::InvalidShape(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }
}

impl<T: Copy> AugmentedMatrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow row `r`.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Mutably borrow row `r`.
    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        let start = r * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Borrow row `pivot` immutably and row `other` mutably at the same time.
    ///
    /// # Panics
    ///
    /// Panics if `pivot == other`.
    pub fn pivot_and_row_mut(&mut self, pivot: usize, other: usize) -> (&[T], &mut [T]) {
        assert_ne!(pivot, other, "pivot and target rows must differ");
        let cols = self.cols;
        if pivot < other {
            let (head, tail) = self.data.split_at_mut(other * cols);
            (&head[pivot * cols..(pivot + 1) * cols], &mut tail[..cols])
        } else {
            let (head, tail) = self.data.split_at_mut(pivot * cols);
            (&tail[..cols], &mut head[other * cols..(other + 1) * cols])
        }
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Copy column `c` out, top to bottom.
    pub fn column(&self, c: usize) -> Vec<T> {
        (0..self.rows).map(|r| self.data[r * self.cols + c]).collect()
    }

    /// Row-major view of every cell.
    #[cfg(feature = "dev")]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(usize, usize)> for AugmentedMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for AugmentedMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        &mut self.data[r * self.cols + c]
    }
}

impl<T: Copy + Display> Display for AugmentedMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for r in 0..self.rows {
            write!(f, "[")?;
            for (c, v) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                if c + 1 == self.cols && self.cols > 1 {
                    write!(f, "| ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
