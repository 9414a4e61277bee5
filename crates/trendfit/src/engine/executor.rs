//! Trend fitting execution.
//!
//! ## Purpose
//!
//! This module maps a [`FitType`] to the algorithm that computes it, runs the
//! validation that algorithm requires, and packages the coefficients into a
//! [`TrendFit`].
//!
//! ## Design notes
//!
//! * **Exhaustive dispatch**: [`FitType::model`] resolves every fit type to a
//!   [`FitModel`] by pattern match; there is no lookup by name.
//! * **Eager**: The fit is computed when [`TrendExecutor::fit`] is called; the
//!   returned [`TrendFit`] is immutable.
//! * **Call-scoped**: The [`Calculator`] lives only for one fit.
//!
//! ## Key concepts
//!
//! * **Closed form**: Linear, Logarithmic, Exponential, Power.
//! * **Basis least squares**: Polynomial, Fourier.
//! * **Simple lines**: MinX, MinY, MaxX, MaxY, AverageX, AverageY.
//!
//! ## Invariants
//!
//! * A fit that produces non-finite coefficients is reported as singular.

// Internal dependencies
use crate::algorithms::least_squares::{fit_basis, Basis};
use crate::algorithms::regression::ClosedForm;
use crate::algorithms::simple::SimpleLine;
use crate::engine::output::TrendFit;
use crate::engine::validator::Validator;
use crate::math::calculator::Calculator;
use crate::primitives::accumulate::Accumulate;
use crate::primitives::errors::TrendError;
use crate::primitives::series::Axis;

/// Default polynomial order.
pub const DEFAULT_ORDER: usize = 2;

/// Default number of output samples.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Fit Types
// ============================================================================

/// Trend line model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitType {
    /// `y = a·x + b`.
    #[default]
    Linear,

    /// `y = a·e^(b·x)`.
    Exponential,

    /// `y = a·ln(x) + b`.
    Logarithmic,

    /// `y = a·x^b`.
    Power,

    /// Least squares over `1, cos x, sin x, cos 2x, …`.
    Fourier,

    /// Least squares over `1, x, …, xⁿ`.
    Polynomial,

    /// Vertical line at the smallest x.
    MinX,

    /// Horizontal line at the smallest y.
    MinY,

    /// Vertical line at the largest x.
    MaxX,

    /// Horizontal line at the largest y.
    MaxY,

    /// Vertical line at the mean x.
    AverageX,

    /// Horizontal line at the mean y.
    AverageY,
}

/// Algorithm family backing a [`FitType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitModel {
    /// Two-parameter closed-form regression.
    ClosedForm(ClosedForm),

    /// Normal equations over a basis.
    LeastSquares(Basis),

    /// Single statistic drawn as a line.
    Simple(SimpleLine),
}

impl FitType {
    /// Every fit type, in declaration order.
    pub const ALL: [FitType; 12] = [
        Self::Linear,
        Self::Exponential,
        Self::Logarithmic,
        Self::Power,
        Self::Fourier,
        Self::Polynomial,
        Self::MinX,
        Self::MinY,
        Self::MaxX,
        Self::MaxY,
        Self::AverageX,
        Self::AverageY,
    ];

    /// Algorithm implementing this fit type.
    pub fn model(self) -> FitModel {
        match self {
            Self::Linear => FitModel::ClosedForm(ClosedForm::Linear),
            Self::Exponential => FitModel::ClosedForm(ClosedForm::Exponential),
            Self::Logarithmic => FitModel::ClosedForm(ClosedForm::Logarithmic),
            Self::Power => FitModel::ClosedForm(ClosedForm::Power),
            Self::Fourier => FitModel::LeastSquares(Basis::Fourier),
            Self::Polynomial => FitModel::LeastSquares(Basis::Polynomial),
            Self::MinX => FitModel::Simple(SimpleLine::MinX),
            Self::MinY => FitModel::Simple(SimpleLine::MinY),
            Self::MaxX => FitModel::Simple(SimpleLine::MaxX),
            Self::MaxY => FitModel::Simple(SimpleLine::MaxY),
            Self::AverageX => FitModel::Simple(SimpleLine::AverageX),
            Self::AverageY => FitModel::Simple(SimpleLine::AverageY),
        }
    }

    /// Fit type name.
    pub fn name(self) -> &'static str {
        match self.model() {
            FitModel::ClosedForm(m) => m.name(),
            FitModel::LeastSquares(Basis::Polynomial) => "Polynomial",
            FitModel::LeastSquares(Basis::Fourier) => "Fourier",
            FitModel::Simple(s) => s.name(),
        }
    }

    /// Parse a fit type name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Whether the fit type uses the `order` parameter.
    pub fn uses_order(self) -> bool {
        matches!(self.model(), FitModel::LeastSquares(_))
    }

    /// Minimum number of samples the fit needs.
    pub fn min_points(self) -> usize {
        match self.model() {
            FitModel::Simple(_) => 1,
            _ => 2,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Validated trend configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendConfig<T> {
    /// Model to fit.
    pub fit_type: FitType,

    /// Least-squares order; `None` selects the per-model default.
    pub order: Option<usize>,

    /// Number of output samples for curve fits.
    pub sample_count: usize,

    /// Fixed intercept (Linear only).
    pub y_offset: Option<T>,
}

impl<T> Default for TrendConfig<T> {
    fn default() -> Self {
        Self {
            fit_type: FitType::default(),
            order: None,
            sample_count: DEFAULT_SAMPLE_COUNT,
            y_offset: None,
        }
    }
}

impl<T> TrendConfig<T> {
    /// Order used for `points` samples: explicit, else 2 for polynomials and
    /// `points` for Fourier series.
    pub fn effective_order(&self, points: usize) -> usize {
        match (self.order, self.fit_type) {
            (Some(order), _) => order,
            (None, FitType::Fourier) => points,
            (None, _) => DEFAULT_ORDER,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a single trend fit.
pub struct TrendExecutor;

impl TrendExecutor {
    /// Fit `config` to the samples.
    pub fn fit<T: Accumulate>(
        config: &TrendConfig<T>,
        x: &[T],
        y: &[T],
    ) -> Result<TrendFit<T>, TrendError> {
        let fit_type = config.fit_type;
        Validator::validate_inputs(x, y, fit_type.min_points())?;
        Validator::validate_sample_count(config.sample_count)?;

        let model = fit_type.model();
        if let FitModel::ClosedForm(form) = model {
            if form.requires_positive_x() {
                Validator::validate_positive(x, Axis::X)?;
            }
            if form.requires_positive_y() {
                Validator::validate_positive(y, Axis::Y)?;
            }
        }

        let calc = Calculator::new(x, y)?;

        let coefficients = match model {
            FitModel::ClosedForm(form) => {
                match form.fit(&calc, config.y_offset) {
                    Some(c) if c.iter().all(|v| v.is_finite()) => c,
                    _ => {
                        tracing::warn!(fit = form.name(), "closed-form fit has no unique solution");
                        return Err(TrendError::SingularSystem { size: 2 });
                    }
                }
            }
            FitModel::LeastSquares(basis) => {
                let order = config.effective_order(x.len());
                Validator::validate_order(order, x.len())?;
                let mut c = fit_basis(x, y, basis, order)?;
                if basis == Basis::Polynomial {
                    c.reverse();
                }
                c
            }
            FitModel::Simple(line) => vec![line.value(&calc)],
        };

        tracing::debug!(
            fit = fit_type.name(),
            points = x.len(),
            coefficients = coefficients.len(),
            "trend fitted"
        );

        Ok(TrendFit::new(
            fit_type,
            coefficients,
            (calc.min_x(), calc.max_x()),
            (calc.min_y(), calc.max_y()),
            config.sample_count,
        ))
    }
}
