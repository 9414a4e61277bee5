//! Moving average adapter.
//!
//! ## Purpose
//!
//! This module provides [`MovingAverageModel`], which smooths the y-values of
//! a raw series and pairs each average with the x-value of the last sample in
//! its window.
//!
//! ## Design notes
//!
//! * **No regression**: Averages are computed from the raw samples directly.
//! * **Index fallback**: A series without x-values is averaged against its
//!   sample indices.
//!
//! ## Invariants
//!
//! * `1 < period < len`.
//! * The output has `len - period + 1` points starting at `x[period - 1]`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::moving_average::AverageKind;
use crate::engine::output::SeriesResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::TrendError;
use crate::primitives::series::{index_series, Dimension, SeriesSource};

// ============================================================================
// Moving Average Model
// ============================================================================

/// Validated moving average configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverageModel {
    kind: AverageKind,
    period: usize,
}

impl MovingAverageModel {
    pub(crate) fn new(kind: AverageKind, period: usize) -> Self {
        Self { kind, period }
    }

    /// Averaging algorithm.
    pub fn kind(&self) -> AverageKind {
        self.kind
    }

    /// Window length.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Average `y`, aligning the output with `x`.
    pub fn compute<T: Float>(&self, x: &[T], y: &[T]) -> Result<SeriesResult<T>, TrendError> {
        Validator::validate_inputs(x, y, 1)?;

        let values = self.kind.compute(y, self.period)?;
        let start = self.kind.first_index(self.period);
        let xs: Vec<T> = x[start..start + values.len()].to_vec();

        tracing::debug!(
            kind = self.kind.name(),
            period = self.period,
            points = values.len(),
            "moving average computed"
        );

        Ok(SeriesResult { x: xs, y: values })
    }

    /// Average `y` against its sample indices.
    pub fn compute_indexed<T: Float>(&self, y: &[T]) -> Result<SeriesResult<T>, TrendError> {
        let x = index_series(y.len());
        self.compute(&x, y)
    }

    /// Average a bound series; x falls back to sample indices when unbound.
    pub fn compute_source<T, S>(&self, source: &S) -> Result<SeriesResult<T>, TrendError>
    where
        T: Float,
        S: SeriesSource<T> + ?Sized,
    {
        let y = source
            .raw_series(Dimension::Y)
            .ok_or(TrendError::SeriesNotBound {
                dimension: Dimension::Y,
            })?;

        match source.raw_series(Dimension::X) {
            Some(x) => self.compute(x, y),
            None => self.compute_indexed(y),
        }
    }
}
