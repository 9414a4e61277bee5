//! Output types for trend fits and derived series.
//!
//! ## Purpose
//!
//! This module defines [`TrendFit`], the immutable result of a trend line
//! fit, and [`SeriesResult`], the plain `(x, y)` output of moving averages and
//! function series.
//!
//! ## Design notes
//!
//! * **Immutable**: A [`TrendFit`] holds the coefficient vector produced by one
//!   fit; evaluation and formatting only read it.
//! * **Pair order**: Sequences are handed to renderers as `(y, x)`.
//! * **Ergonomics**: Both types implement `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Coefficient layout**: `[slope, intercept]` for Linear and Logarithmic,
//!   `[a, b]` for Exponential and Power, highest degree first for Polynomial,
//!   basis order for Fourier, the single statistic for simple lines.
//! * **Sampling**: Curves are sampled at `sample_count` evenly spaced x-values
//!   across the fitted x-range; simple lines yield their two endpoints.
//!
//! ## Non-goals
//!
//! * This module does not fit models; see the executor.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::least_squares::{
    evaluate_basis, fourier_equation, polynomial_equation, Basis,
};
use crate::engine::executor::{FitModel, FitType};
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::format::{format_coefficient, CoefficientFormat};
use crate::primitives::errors::TrendError;
use crate::primitives::series::{evenly_spaced, Axis};

// ============================================================================
// Trend Fit
// ============================================================================

/// A fitted trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendFit<T> {
    fit_type: FitType,
    coefficients: Vec<T>,
    x_range: (T, T),
    y_range: (T, T),
    sample_count: usize,
}

impl<T: Float> TrendFit<T> {
    /// Package a coefficient vector with the extents of the fitted samples.
    pub(crate) fn new(
        fit_type: FitType,
        coefficients: Vec<T>,
        x_range: (T, T),
        y_range: (T, T),
        sample_count: usize,
    ) -> Self {
        Self {
            fit_type,
            coefficients,
            x_range,
            y_range,
            sample_count,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Model that was fitted.
    pub fn fit_type(&self) -> FitType {
        self.fit_type
    }

    /// Coefficient vector.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// `(min, max)` of the fitted x-values.
    pub fn x_range(&self) -> (T, T) {
        self.x_range
    }

    /// `(min, max)` of the fitted y-values.
    pub fn y_range(&self) -> (T, T) {
        self.y_range
    }

    /// Number of points produced by [`calculate_values`](Self::calculate_values)
    /// for curve fits.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the fitted function at `x`.
    ///
    /// Simple lines return their statistic for every `x`.
    pub fn approximate(&self, x: T) -> T {
        let c = &self.coefficients;
        match self.fit_type.model() {
            FitModel::ClosedForm(form) => form.evaluate(c, x),
            FitModel::LeastSquares(Basis::Polynomial) => {
                c.iter().fold(T::zero(), |acc, &coeff| acc * x + coeff)
            }
            FitModel::LeastSquares(Basis::Fourier) => evaluate_basis(Basis::Fourier, c, x),
            FitModel::Simple(_) => c.first().copied().unwrap_or_else(T::nan),
        }
    }

    /// Sample the fitted line for plotting, returned as `(y, x)`.
    pub fn calculate_values(&self) -> (Vec<T>, Vec<T>) {
        if let FitModel::Simple(line) = self.fit_type.model() {
            let span = match line.axis() {
                Axis::X => self.y_range,
                Axis::Y => self.x_range,
            };
            return line.line(self.approximate(T::zero()), span);
        }

        let xs = evenly_spaced(self.x_range.0, self.x_range.1, self.sample_count);
        let ys = xs.iter().map(|&x| self.approximate(x)).collect();
        (ys, xs)
    }

    /// Sample the fitted line as a [`SeriesResult`].
    pub fn to_series(&self) -> SeriesResult<T> {
        let (y, x) = self.calculate_values();
        SeriesResult { x, y }
    }

    // ========================================================================
    // Equation
    // ========================================================================

    /// Equation text using the default coefficient format.
    pub fn equation(&self) -> String {
        self.equation_with(&format_coefficient::<T>)
    }

    /// Equation text with a caller-supplied coefficient format.
    pub fn equation_with(&self, fmt: CoefficientFormat<'_, T>) -> String {
        let c = &self.coefficients;
        match self.fit_type.model() {
            FitModel::ClosedForm(form) => form.equation(c, fmt),
            FitModel::LeastSquares(Basis::Polynomial) => polynomial_equation(c, fmt),
            FitModel::LeastSquares(Basis::Fourier) => fourier_equation(c, fmt),
            FitModel::Simple(line) => {
                line.equation(c.first().copied().unwrap_or_else(T::nan), fmt)
            }
        }
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Score the fit against samples (usually the ones it was fitted on).
    pub fn diagnostics(&self, x: &[T], y: &[T]) -> core::result::Result<Diagnostics<T>, TrendError> {
        if x.len() != y.len() {
            return Err(TrendError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(TrendError::EmptyInput);
        }

        let y_fit: Vec<T> = x.iter().map(|&xi| self.approximate(xi)).collect();
        Ok(Diagnostics::compute(y, &y_fit))
    }
}

impl<T: Float + Display> Display for TrendFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Fit type:     {}", self.fit_type.name())?;
        writeln!(f, "  X range:      [{}, {}]", self.x_range.0, self.x_range.1)?;
        writeln!(f, "  Y range:      [{}, {}]", self.y_range.0, self.y_range.1)?;
        if !matches!(self.fit_type.model(), FitModel::Simple(_)) {
            writeln!(f, "  Samples:      {}", self.sample_count)?;
        }
        write!(f, "  Coefficients:")?;
        for c in &self.coefficients {
            write!(f, " {:.6}", c)?;
        }
        writeln!(f)?;
        writeln!(f, "  Equation:     {}", self.equation())
    }
}

// ============================================================================
// Series Result
// ============================================================================

/// Derived `(x, y)` sample sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesResult<T> {
    /// x-values.
    pub x: Vec<T>,

    /// y-values, aligned with `x`.
    pub y: Vec<T>,
}

impl<T> SeriesResult<T> {
    /// Split into the `(y, x)` pair handed to renderers.
    pub fn into_pair(self) -> (Vec<T>, Vec<T>) {
        (self.y, self.x)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl<T: Float + Display> Display for SeriesResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Series:")?;
        writeln!(f, "  Points: {}", self.len())?;
        writeln!(f)?;

        writeln!(f, "{:>8} {:>12}", "X", "Y")?;
        writeln!(f, "{:-<21}", "")?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;
            writeln!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;
        }

        Ok(())
    }
}
