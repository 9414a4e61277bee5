//! Function series adapter.
//!
//! ## Purpose
//!
//! This module provides [`FunctionSampler`], which evaluates user-supplied
//! functions over an evenly spaced parameter grid.
//!
//! ## Design notes
//!
//! * **Per-sample recovery**: Each call is guarded; a failing or non-finite
//!   sample becomes NaN and the remaining samples are still evaluated.
//! * **Return types**: Functions may return a float, an `Option` or a
//!   `Result` (see [`IntoSample`]).
//!
//! ## Key concepts
//!
//! * **Y function**: `y = f(t)` with `x = t`.
//! * **Parametric**: `x = fx(t)` and `y = fy(t)`, evaluated independently.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::sampling::{guarded, IntoSample};
use crate::engine::output::SeriesResult;
use crate::primitives::series::evenly_spaced;

// ============================================================================
// Function Sampler
// ============================================================================

/// Validated function series configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionSampler<T> {
    min: T,
    max: T,
    sample_count: usize,
}

impl<T: Float> FunctionSampler<T> {
    pub(crate) fn new(min: T, max: T, sample_count: usize) -> Self {
        Self {
            min,
            max,
            sample_count,
        }
    }

    /// `(min, max)` of the parameter grid.
    pub fn range(&self) -> (T, T) {
        (self.min, self.max)
    }

    /// Number of samples.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Parameter values the functions are evaluated at.
    pub fn grid(&self) -> Vec<T> {
        evenly_spaced(self.min, self.max, self.sample_count)
    }

    /// Sample `y = f(x)` over the grid.
    pub fn sample_y<R, F>(&self, f: F) -> SeriesResult<T>
    where
        R: IntoSample<T>,
        F: Fn(T) -> R,
    {
        let x = self.grid();
        let y = x.iter().map(|&t| evaluate(&f, t, "y")).collect();
        SeriesResult { x, y }
    }

    /// Sample `x = fx(t)`, `y = fy(t)` over the grid.
    pub fn sample_parametric<Rx, Ry, Fx, Fy>(&self, fx: Fx, fy: Fy) -> SeriesResult<T>
    where
        Rx: IntoSample<T>,
        Ry: IntoSample<T>,
        Fx: Fn(T) -> Rx,
        Fy: Fn(T) -> Ry,
    {
        let grid = self.grid();
        let x = grid.iter().map(|&t| evaluate(&fx, t, "x")).collect();
        let y = grid.iter().map(|&t| evaluate(&fy, t, "y")).collect();
        SeriesResult { x, y }
    }
}

fn evaluate<T, R, F>(f: &F, t: T, output: &'static str) -> T
where
    T: Float,
    R: IntoSample<T>,
    F: Fn(T) -> R,
{
    let sample = guarded(f, t);
    if !sample.is_valid() {
        tracing::trace!(
            output = output,
            t = t.to_f64().unwrap_or(f64::NAN),
            "function sample replaced with NaN"
        );
    }
    sample.value_or_nan()
}
