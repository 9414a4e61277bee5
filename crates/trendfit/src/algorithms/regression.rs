//! Closed-form two-parameter regressions.
//!
//! ## Purpose
//!
//! Linear, logarithmic, exponential and power trend lines all reduce to an
//! ordinary least-squares line fitted on transformed columns:
//!
//! | Model       | Equation        | Fitted on       | Coefficients       |
//! |-------------|-----------------|-----------------|--------------------|
//! | Linear      | `y = a·x + b`   | `(x, y)`        | `[a, b]`           |
//! | Logarithmic | `y = a·ln(x)+b` | `(ln x, y)`     | `[a, b]`           |
//! | Exponential | `y = a·e^(b·x)` | `(x, ln y)`     | `[e^b₀, b₁]`       |
//! | Power       | `y = a·x^b`     | `(ln x, ln y)`  | `[e^b₀, b₁]`       |
//!
//! ## Design notes
//!
//! * **Composition**: One OLS routine parameterized by the column transform;
//!   each model only supplies its transform, its evaluator and its equation.
//! * **Cached sums**: All sums come from the [`Calculator`].
//!
//! ## Invariants
//!
//! * Without a fixed intercept, the linear fit passes through `(mean x, mean y)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::calculator::{Calculator, Column};
use crate::math::format::{CoefficientFormat, EquationBuilder};
use crate::primitives::accumulate::Accumulate;

// ============================================================================
// Ordinary Least Squares on Columns
// ============================================================================

/// Slope and intercept of a straight-line fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit<T> {
    /// Slope.
    pub slope: T,

    /// Intercept.
    pub intercept: T,
}

/// Least-squares line through the `(u, v)` columns.
///
/// `b = (nΣuv − ΣuΣv) / (nΣu² − (Σu)²)`, `a = (Σv − bΣu) / n`.
///
/// Returns `None` when every `u` is equal. The denominator is then zero in
/// exact arithmetic, whatever it rounds to.
pub fn ols_line<T: Accumulate>(calc: &Calculator<'_, T>, u: Column, v: Column) -> Option<LineFit<T>> {
    let column = calc.column(u);
    let first = *column.first()?;
    if column.iter().all(|&value| value == first) {
        return None;
    }

    let n = calc.n();
    let su = calc.sum(u);
    let sv = calc.sum(v);
    let suv = calc.sum_product(u, v);
    let suu = calc.sum_of_squares(u);

    let slope = (n * suv - su * sv) / (n * suu - su * su);
    let intercept = (sv - slope * su) / n;

    Some(LineFit { slope, intercept })
}

/// Least-squares line through the `(u, v)` columns with the intercept fixed.
///
/// `b = (Σuv − a·Σu) / Σu²`. Returns `None` when every `u` is zero.
pub fn ols_line_fixed<T: Accumulate>(
    calc: &Calculator<'_, T>,
    u: Column,
    v: Column,
    intercept: T,
) -> Option<LineFit<T>> {
    let su = calc.sum(u);
    let suv = calc.sum_product(u, v);
    let suu = calc.sum_of_squares(u);
    if suu == T::zero() {
        return None;
    }

    Some(LineFit {
        slope: (suv - intercept * su) / suu,
        intercept,
    })
}

// ============================================================================
// Closed-Form Models
// ============================================================================

/// Two-parameter regression models solved in closed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedForm {
    /// `y = a·x + b`.
    Linear,

    /// `y = a·ln(x) + b`.
    Logarithmic,

    /// `y = a·e^(b·x)`.
    Exponential,

    /// `y = a·x^b`.
    Power,
}

impl ClosedForm {
    /// Columns the straight line is fitted on.
    pub fn transform(self) -> (Column, Column) {
        match self {
            Self::Linear => (Column::X, Column::Y),
            Self::Logarithmic => (Column::LogX, Column::Y),
            Self::Exponential => (Column::X, Column::LogY),
            Self::Power => (Column::LogX, Column::LogY),
        }
    }

    /// Whether x-values must be strictly positive.
    pub fn requires_positive_x(self) -> bool {
        matches!(self, Self::Logarithmic | Self::Power)
    }

    /// Whether y-values must be strictly positive.
    pub fn requires_positive_y(self) -> bool {
        matches!(self, Self::Exponential | Self::Power)
    }

    /// Fit the model and return its coefficient vector.
    ///
    /// `intercept` fixes the line's intercept in transformed space; only the
    /// linear model exposes it. Returns `None` when the line is not unique.
    pub fn fit<T: Accumulate>(
        self,
        calc: &Calculator<'_, T>,
        intercept: Option<T>,
    ) -> Option<Vec<T>> {
        let (u, v) = self.transform();
        let line = match intercept {
            Some(a) => ols_line_fixed(calc, u, v, a)?,
            None => ols_line(calc, u, v)?,
        };

        Some(match self {
            Self::Linear | Self::Logarithmic => vec![line.slope, line.intercept],
            Self::Exponential | Self::Power => vec![line.intercept.exp(), line.slope],
        })
    }

    /// Evaluate the fitted function at `x`.
    ///
    /// A missing coefficient evaluates to NaN.
    pub fn evaluate<T: Float>(self, c: &[T], x: T) -> T {
        let (a, b) = coefficient_pair(c);
        match self {
            Self::Linear => a * x + b,
            Self::Logarithmic => a * x.ln() + b,
            Self::Exponential => a * (b * x).exp(),
            Self::Power => a * x.powf(b),
        }
    }

    /// Equation text with each coefficient rendered by `fmt`.
    pub fn equation<T: Float>(self, c: &[T], fmt: CoefficientFormat<'_, T>) -> String {
        let (a, b) = coefficient_pair(c);
        let (a, b) = (fmt(a), fmt(b));
        match self {
            Self::Linear => EquationBuilder::new("y").term(&a, "x").term(&b, "").finish(),
            Self::Logarithmic => EquationBuilder::new("y")
                .term(&a, "ln(x)")
                .term(&b, "")
                .finish(),
            Self::Exponential => EquationBuilder::new("y")
                .term(&a, &["e^(", b.as_str(), "x)"].concat())
                .finish(),
            Self::Power => EquationBuilder::new("y")
                .term(&a, &["x^", b.as_str()].concat())
                .finish(),
        }
    }

    /// Model name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Logarithmic => "Logarithmic",
            Self::Exponential => "Exponential",
            Self::Power => "Power",
        }
    }
}

/// First two coefficients, NaN where absent.
fn coefficient_pair<T: Float>(c: &[T]) -> (T, T) {
    let at = |i: usize| c.get(i).copied().unwrap_or_else(T::nan);
    (at(0), at(1))
}
