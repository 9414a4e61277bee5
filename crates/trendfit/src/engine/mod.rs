//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer turns a validated configuration into a fit: it checks the
//! inputs, dispatches to the algorithm for the chosen fit type and packages
//! the coefficients into an immutable result.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
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

/// Fit type dispatch and execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for trend fits and derived series.
pub mod output;
