//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides the models the builders produce, one per derived
//! series kind:
//!
//! - **Trend**: Regression and simple lines over an `(x, y)` series
//! - **Average**: Moving averages over a raw series
//! - **Function**: Guarded sampling of user-supplied functions
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Trend line model.
pub mod trend;

/// Moving average model.
pub mod average;

/// Function series sampler.
pub mod function;
