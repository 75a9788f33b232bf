//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer validates boundary inputs and drives the fitting pipeline,
//! producing [`output::Polynomial`] values.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fitting pipeline driver.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Fitted polynomial output type.
pub mod output;
