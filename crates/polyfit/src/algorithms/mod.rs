//! Layer 3: Algorithms
//!
//! This layer implements the least-squares fit itself: building the normal
//! equations from the samples and solving them for the coefficient vector.
//! It is orchestrated by the engine layer.

// Normal-equation construction and coefficient solving.
pub mod normal_equations;
