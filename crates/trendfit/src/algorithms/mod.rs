//! Layer 3: Algorithms
//!
//! This layer implements the fitting and smoothing logic: closed-form
//! regressions, basis least squares with a Gaussian solver, degenerate
//! single-statistic lines, moving-average recurrences and guarded function
//! sampling. It is orchestrated by the engine layer.

// Closed-form linear, logarithmic, exponential and power regressions.
pub mod regression;

// Normal equations and Gaussian elimination for polynomial and Fourier bases.
pub mod least_squares;

// Min/max/average lines.
pub mod simple;

// Simple, weighted, exponential and triangular moving averages.
pub mod moving_average;

// Per-sample guarded evaluation of user functions.
pub mod sampling;
