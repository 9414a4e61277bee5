//! Goodness-of-fit metrics for trend lines.
//!
//! ## Purpose
//!
//! This module scores a fitted trend line against the samples it was fitted
//! on, so charts can annotate a trend with its R² next to the equation.
//!
//! ## Design notes
//!
//! * **Residual-based**: Metrics are computed from residuals `y - ŷ`.
//! * **Non-finite aware**: Samples whose prediction is not finite (e.g. a
//!   log fit evaluated outside its domain) are skipped and counted.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * RMSE, MAE and residual SD are non-negative.
//! * R² <= 1 (R² = 1 is a perfect fit).
//!
//! ## Non-goals
//!
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for a fitted trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R²).
    pub r_squared: T,

    /// Sample standard deviation of the residuals.
    pub residual_sd: T,

    /// Number of samples scored.
    pub scored: usize,

    /// Number of samples skipped because the prediction was not finite.
    pub skipped: usize,
}

impl<T: Float> Diagnostics<T> {
    /// Score the predictions `y_fit` against observations `y`.
    pub fn compute(y: &[T], y_fit: &[T]) -> Self {
        let mut n = 0usize;
        let mut skipped = 0usize;
        let mut sum_y = T::zero();
        let mut sum_y_sq = T::zero();
        let mut sum_r = T::zero();
        let mut sum_r_sq = T::zero();
        let mut sum_abs_r = T::zero();

        for (&yi, &fi) in y.iter().zip(y_fit.iter()) {
            if !fi.is_finite() {
                skipped += 1;
                continue;
            }
            let r = yi - fi;
            n += 1;
            sum_y = sum_y + yi;
            sum_y_sq = sum_y_sq + yi * yi;
            sum_r = sum_r + r;
            sum_r_sq = sum_r_sq + r * r;
            sum_abs_r = sum_abs_r + r.abs();
        }

        if n == 0 {
            return Self {
                rmse: T::nan(),
                mae: T::nan(),
                r_squared: T::nan(),
                residual_sd: T::nan(),
                scored: 0,
                skipped,
            };
        }

        let n_t = T::from(n).unwrap_or(T::one());
        let rmse = (sum_r_sq / n_t).sqrt();
        let mae = sum_abs_r / n_t;
        let r_squared = Self::r_squared_from_sums(n_t, sum_y, sum_y_sq, sum_r_sq);

        // Var(r) = (Σr² − (Σr)²/n) / (n − 1)
        let residual_sd = if n > 1 {
            let var_r = (sum_r_sq - (sum_r * sum_r) / n_t) / (n_t - T::one());
            var_r.max(T::zero()).sqrt()
        } else {
            rmse
        };

        Self {
            rmse,
            mae,
            r_squared,
            residual_sd,
            scored: n,
            skipped,
        }
    }

    /// R² = 1 − SS_res / SS_tot.
    fn r_squared_from_sums(n: T, sum_y: T, sum_y_sq: T, ss_res: T) -> T {
        let ss_tot = sum_y_sq - (sum_y * sum_y) / n;
        let tiny = T::from(1e-12).unwrap_or(T::epsilon()) * sum_y_sq.abs();

        if ss_tot > tiny {
            T::one() - ss_res / ss_tot
        } else if ss_res <= tiny {
            // All y values identical and reproduced exactly
            T::one()
        } else {
            T::zero()
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        writeln!(f, "  Residual SD:  {:.6}", self.residual_sd)?;
        if self.skipped > 0 {
            writeln!(f, "  Skipped:      {}", self.skipped)?;
        }
        Ok(())
    }
}
