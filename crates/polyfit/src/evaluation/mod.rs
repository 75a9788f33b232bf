//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer computes statistical metrics for a fitted coefficient vector:
//! - Squared correlation between predicted and observed values
//! - Standard error of the estimate
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness-of-fit statistics.
pub mod statistics;
