//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the fits:
//! - Descriptive statistics over slices
//! - Memoized aggregate sums over a sample pair
//! - Coefficient and equation formatting
//!
//! These are reusable building blocks with no fit-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
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

/// Descriptive statistics (sum, mean, variance, extremes, rounding).
pub mod stats;

/// Lazily cached sums over `(x, y)` samples.
pub mod calculator;

/// Coefficient and equation text formatting.
pub mod format;
