//! Trend line adapter.
//!
//! ## Purpose
//!
//! This module provides [`TrendLineModel`], the validated trend configuration
//! returned by the builder. It fits samples passed directly or fetched from a
//! bound [`SeriesSource`].
//!
//! ## Design notes
//!
//! * **Reusable**: A model can be fitted to any number of series.
//! * **Delegation**: Computation is delegated to the execution engine.
//!
//! ## Invariants
//!
//! * Both dimensions must be bound when fitting from a source.

// Internal dependencies
use crate::engine::executor::{FitType, TrendConfig, TrendExecutor};
use crate::engine::output::TrendFit;
use crate::primitives::accumulate::Accumulate;
use crate::primitives::errors::TrendError;
use crate::primitives::series::{Dimension, SeriesSource};

// ============================================================================
// Trend Line Model
// ============================================================================

/// Validated trend line configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendLineModel<T> {
    config: TrendConfig<T>,
}

impl<T: Accumulate> TrendLineModel<T> {
    pub(crate) fn new(config: TrendConfig<T>) -> Self {
        Self { config }
    }

    /// Configuration the model was built with.
    pub fn config(&self) -> &TrendConfig<T> {
        &self.config
    }

    /// Model to fit.
    pub fn fit_type(&self) -> FitType {
        self.config.fit_type
    }

    /// Fit the trend line to the samples.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<TrendFit<T>, TrendError> {
        TrendExecutor::fit(&self.config, x, y)
    }

    /// Fit the trend line to a bound series.
    pub fn fit_source<S>(&self, source: &S) -> Result<TrendFit<T>, TrendError>
    where
        S: SeriesSource<T> + ?Sized,
    {
        let y = bound(source, Dimension::Y)?;
        let x = bound(source, Dimension::X)?;
        self.fit(x, y)
    }
}

fn bound<T, S>(source: &S, dimension: Dimension) -> Result<&[T], TrendError>
where
    S: SeriesSource<T> + ?Sized,
{
    source
        .raw_series(dimension)
        .ok_or(TrendError::SeriesNotBound { dimension })
}
