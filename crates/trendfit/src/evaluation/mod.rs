//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates goodness-of-fit metrics for fitted trend lines.
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;
