#![cfg(feature = "dev")]
//! Tests for goodness-of-fit diagnostics.
//!
//! These tests verify the metrics reported for fitted trend lines:
//! - RMSE and MAE
//! - Coefficient of determination (R²)
//! - Residual standard deviation
//! - Handling of non-finite predictions
//!
//! ## Test Organization
//!
//! 1. **Basic Metrics** - RMSE, MAE, R²
//! 2. **Residual Statistics** - Residual SD
//! 3. **Edge Cases** - Constant data and non-finite predictions

use approx::{assert_abs_diff_eq, assert_relative_eq};

use trendfit::internals::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Basic Metrics Tests
// ============================================================================

/// Test a perfect fit.
#[test]
fn test_perfect_fit() {
    let y = vec![1.0, 2.0, 3.0];
    let d = Diagnostics::compute(&y, &y);

    assert_abs_diff_eq!(d.rmse, 0.0);
    assert_abs_diff_eq!(d.mae, 0.0);
    assert_relative_eq!(d.r_squared, 1.0);
    assert_eq!(d.scored, 3);
    assert_eq!(d.skipped, 0);
}

/// Test metrics with alternating residuals.
#[test]
fn test_typical_metrics() {
    let y = vec![1.0, 2.0, 3.0, 4.0];
    let fit = vec![1.5, 1.5, 3.5, 3.5];
    let d = Diagnostics::compute(&y, &fit);

    // Residuals: [-0.5, 0.5, -0.5, 0.5]
    // SS_res = 1, SS_tot = 5
    assert_relative_eq!(d.rmse, 0.5, epsilon = 1e-12);
    assert_relative_eq!(d.mae, 0.5, epsilon = 1e-12);
    assert_relative_eq!(d.r_squared, 0.8, epsilon = 1e-12);
}

// ============================================================================
// Residual Statistics Tests
// ============================================================================

/// Test the sample standard deviation of residuals.
#[test]
fn test_residual_sd() {
    let y = vec![1.0, 2.0, 3.0, 4.0];
    let fit = vec![1.5, 1.5, 3.5, 3.5];
    let d = Diagnostics::compute(&y, &fit);

    // Σr = 0, Σr² = 1, n - 1 = 3
    assert_relative_eq!(d.residual_sd, (1.0f64 / 3.0).sqrt(), epsilon = 1e-12);
}

/// Test that a constant offset has zero residual spread.
#[test]
fn test_residual_sd_constant_offset() {
    let y = vec![2.0, 4.0, 6.0];
    let fit = vec![1.0, 3.0, 5.0];
    let d = Diagnostics::compute(&y, &fit);

    assert_relative_eq!(d.rmse, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d.residual_sd, 0.0, epsilon = 1e-12);
}

// ============================================================================
// Edge Cases Tests
// ============================================================================

/// Test constant data reproduced exactly.
#[test]
fn test_constant_data() {
    let y = vec![3.0, 3.0, 3.0];
    let d = Diagnostics::compute(&y, &y);

    assert_relative_eq!(d.r_squared, 1.0);
}

/// Test that non-finite predictions are skipped and counted.
#[test]
fn test_non_finite_predictions_skipped() {
    let y = vec![1.0, 2.0, 3.0];
    let fit = vec![1.0, f64::NAN, 3.0];
    let d = Diagnostics::compute(&y, &fit);

    assert_eq!(d.scored, 2);
    assert_eq!(d.skipped, 1);
    assert_abs_diff_eq!(d.rmse, 0.0);
}

/// Test that nothing scored yields NaN metrics.
#[test]
fn test_nothing_scored() {
    let y = vec![1.0, 2.0];
    let fit = vec![f64::INFINITY, f64::NAN];
    let d = Diagnostics::compute(&y, &fit);

    assert_eq!(d.scored, 0);
    assert_eq!(d.skipped, 2);
    assert!(d.rmse.is_nan());
    assert!(d.r_squared.is_nan());
}

/// Test the Display output.
#[test]
fn test_display() {
    let d = Diagnostics::compute(&[1.0, 2.0], &[1.0, f64::NAN]);
    let text = format!("{}", d);

    assert!(text.contains("Fit Diagnostics:"));
    assert!(text.contains("RMSE:"));
    assert!(text.contains("Skipped:      1"));
}
