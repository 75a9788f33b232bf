//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric building blocks of the fit:
//! - Gauss-Jordan elimination on augmented matrices
//! - Polynomial evaluation from a coefficient vector
//!
//! Neither has any knowledge of samples or fitting.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-place Gauss-Jordan elimination.
pub mod gauss_jordan;

/// Polynomial evaluation.
pub mod polynomial;
