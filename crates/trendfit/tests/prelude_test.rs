#![cfg(feature = "dev")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed to fit trend
//! lines, compute moving averages and sample functions with a single import.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Types can be used without qualification

use trendfit::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that a basic trend fit works with prelude imports only.
#[test]
fn test_prelude_imports() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];

    let result = TrendLine::<f64>::new().fit_type(Linear).build().unwrap().fit(&x, &y);

    assert!(result.is_ok(), "Basic fit should work with prelude imports");
}

/// Test that every fit type variant is exported.
#[test]
fn test_prelude_fit_types() {
    let all = [
        Linear,
        Exponential,
        Logarithmic,
        Power,
        Fourier,
        Polynomial,
        MinX,
        MinY,
        MaxX,
        MaxY,
        AverageX,
        AverageY,
    ];
    assert_eq!(all, FitType::ALL);

    for fit_type in all {
        let _ = TrendLine::<f64>::new().fit_type(fit_type);
    }
}

/// Test that moving average and function series builders are exported.
#[test]
fn test_prelude_series_builders() {
    let _ = MovingAverage::new().kind(AverageKind::Weighted).period(3);
    let _ = FunctionSeries::<f64>::new().range(0.0, 1.0).sample_count(10);
}

// ============================================================================
// Type Usage Tests
// ============================================================================

/// Test that result and error types can be named.
#[test]
fn test_prelude_types() {
    let fit: Result<TrendFit<f64>, TrendError> = TrendLine::<f64>::new()
        .build()
        .and_then(|m: TrendLineModel<f64>| m.fit(&[1.0, 2.0], &[1.0, 2.0]));
    assert!(fit.is_ok());

    let series: SeriesResult<f64> = SeriesResult::default();
    assert!(series.is_empty());

    let err = TrendError::EmptyInput;
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

/// Test that the statistics helpers and formatter are exported.
#[test]
fn test_prelude_helpers() {
    assert_eq!(stats::sum(&[1.0, 2.0, 3.0]), 6.0);
    assert_eq!(format_coefficient(0.5), "0.5");

    let calc = Calculator::new(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
    assert_eq!(calc.sum(Column::Y), 7.0);
}
