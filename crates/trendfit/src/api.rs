//! High-level API for trend lines, moving averages and function series.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. Each derived series
//! kind has a fluent builder that records parameters, validates them in
//! `build()` and returns an immutable model from the adapters layer.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all optional
//!   parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; data
//!   is validated when the model is applied.
//! * **Strict**: Setting a parameter twice, or setting one the chosen fit does
//!   not use, is an error rather than a silent override.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Trend line**: [`TrendLineBuilder`] → [`TrendLineModel`] → [`TrendFit`].
//! * **Moving average**: [`MovingAverageBuilder`] → [`MovingAverageModel`] →
//!   [`SeriesResult`].
//! * **Function series**: [`FunctionSeriesBuilder`] → [`FunctionSampler`] →
//!   [`SeriesResult`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::moving_average::check_period;
use crate::engine::executor::{TrendConfig, DEFAULT_SAMPLE_COUNT};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::average::MovingAverageModel;
pub use crate::adapters::function::FunctionSampler;
pub use crate::adapters::trend::TrendLineModel;
pub use crate::algorithms::moving_average::AverageKind;
pub use crate::algorithms::sampling::{IntoSample, Sample};
pub use crate::engine::executor::FitType;
pub use crate::engine::output::{SeriesResult, TrendFit};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::calculator::{Calculator, Column};
pub use crate::math::format::format_coefficient;
pub use crate::math::stats;
pub use crate::primitives::accumulate::Accumulate;
pub use crate::primitives::errors::{ErrorKind, TrendError};
pub use crate::primitives::series::{Axis, Dimension, RawSeries, SeriesSource};

// ============================================================================
// Trend Line Builder
// ============================================================================

/// Fluent builder for trend line models.
#[derive(Debug, Clone)]
pub struct TrendLineBuilder<T> {
    /// Model to fit (default: Linear).
    pub fit_type: Option<FitType>,

    /// Least-squares order (Polynomial and Fourier only).
    pub order: Option<usize>,

    /// Number of output samples (default: 100).
    pub sample_count: Option<usize>,

    /// Fixed intercept (Linear only).
    pub y_offset: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for TrendLineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> TrendLineBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fit_type: None,
            order: None,
            sample_count: None,
            y_offset: None,
            duplicate_param: None,
        }
    }

    /// Set the model to fit.
    pub fn fit_type(mut self, fit_type: FitType) -> Self {
        if self.fit_type.is_some() {
            self.duplicate_param = Some("fit_type");
        }
        self.fit_type = Some(fit_type);
        self
    }

    /// Set the polynomial degree or the number of Fourier terms.
    pub fn order(mut self, order: usize) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    /// Set the number of points sampled along fitted curves.
    pub fn sample_count(mut self, count: usize) -> Self {
        if self.sample_count.is_some() {
            self.duplicate_param = Some("sample_count");
        }
        self.sample_count = Some(count);
        self
    }

    /// Force the Linear fit through `(0, offset)`.
    pub fn y_offset(mut self, offset: T) -> Self {
        if self.y_offset.is_some() {
            self.duplicate_param = Some("y_offset");
        }
        self.y_offset = Some(offset);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<TrendLineModel<T>, TrendError>
    where
        T: Accumulate,
    {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let fit_type = self.fit_type.unwrap_or_default();

        // Validate order
        if let Some(order) = self.order {
            if !fit_type.uses_order() {
                return Err(TrendError::UnsupportedParameter {
                    parameter: "order",
                    fit: fit_type.name(),
                });
            }
            if order < 1 {
                return Err(TrendError::InvalidOrder { order, points: 0 });
            }
        }

        // Validate y offset
        if let Some(offset) = self.y_offset {
            if fit_type != FitType::Linear {
                return Err(TrendError::UnsupportedParameter {
                    parameter: "y_offset",
                    fit: fit_type.name(),
                });
            }
            Validator::validate_scalar(offset, "y_offset")?;
        }

        // Validate sample count
        let sample_count = self.sample_count.unwrap_or(DEFAULT_SAMPLE_COUNT);
        Validator::validate_sample_count(sample_count)?;

        Ok(TrendLineModel::new(TrendConfig {
            fit_type,
            order: self.order,
            sample_count,
            y_offset: self.y_offset,
        }))
    }
}

// ============================================================================
// Moving Average Builder
// ============================================================================

/// Fluent builder for moving average models.
#[derive(Debug, Clone, Default)]
pub struct MovingAverageBuilder {
    /// Averaging algorithm (default: Simple).
    pub kind: Option<AverageKind>,

    /// Window length (required).
    pub period: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl MovingAverageBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            kind: None,
            period: None,
            duplicate_param: None,
        }
    }

    /// Set the averaging algorithm.
    pub fn kind(mut self, kind: AverageKind) -> Self {
        if self.kind.is_some() {
            self.duplicate_param = Some("kind");
        }
        self.kind = Some(kind);
        self
    }

    /// Set the window length.
    pub fn period(mut self, period: usize) -> Self {
        if self.period.is_some() {
            self.duplicate_param = Some("period");
        }
        self.period = Some(period);
        self
    }

    /// Validate the configuration and build the model.
    ///
    /// The period is checked against the series length again when the model
    /// is applied.
    pub fn build(self) -> Result<MovingAverageModel, TrendError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let period = self.period.ok_or(TrendError::MissingParameter {
            parameter: "period",
        })?;
        check_period(period, None)?;

        Ok(MovingAverageModel::new(self.kind.unwrap_or_default(), period))
    }
}

// ============================================================================
// Function Series Builder
// ============================================================================

/// Fluent builder for function series samplers.
#[derive(Debug, Clone)]
pub struct FunctionSeriesBuilder<T> {
    /// Parameter range `(min, max)` (required).
    pub range: Option<(T, T)>,

    /// Number of samples (default: 100).
    pub sample_count: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for FunctionSeriesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FunctionSeriesBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            range: None,
            sample_count: None,
            duplicate_param: None,
        }
    }

    /// Set the parameter range, both ends included.
    pub fn range(mut self, min: T, max: T) -> Self {
        if self.range.is_some() {
            self.duplicate_param = Some("range");
        }
        self.range = Some((min, max));
        self
    }

    /// Set the number of samples.
    pub fn sample_count(mut self, count: usize) -> Self {
        if self.sample_count.is_some() {
            self.duplicate_param = Some("sample_count");
        }
        self.sample_count = Some(count);
        self
    }

    /// Validate the configuration and build the sampler.
    pub fn build(self) -> Result<FunctionSampler<T>, TrendError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let (min, max) = self.range.ok_or(TrendError::MissingParameter {
            parameter: "range",
        })?;
        Validator::validate_range(min, max)?;

        let sample_count = self.sample_count.unwrap_or(DEFAULT_SAMPLE_COUNT);
        Validator::validate_sample_count(sample_count)?;

        Ok(FunctionSampler::new(min, max, sample_count))
    }
}
