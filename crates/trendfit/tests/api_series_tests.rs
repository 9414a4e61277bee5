#![cfg(feature = "dev")]
//! Tests for moving average and function series models.
//!
//! ## Test Organization
//!
//! 1. **Moving Average** - Builder, alignment and series sources
//! 2. **Function Series** - Builder, guarded sampling and parametric curves
//! 3. **Series Result** - Accessors and Display

use approx::assert_relative_eq;

use trendfit::prelude::*;

// ============================================================================
// Moving Average Tests
// ============================================================================

/// Test that outputs are aligned with x[period - 1..].
#[test]
fn test_moving_average_alignment() {
    let model = MovingAverage::new().period(2).build().unwrap();

    let series = model
        .compute(&[10.0, 20.0, 30.0, 40.0], &[2.0, 4.0, 6.0, 8.0])
        .unwrap();

    assert_eq!(series.x, vec![20.0, 30.0, 40.0]);
    assert_eq!(series.y, vec![3.0, 5.0, 7.0]);
}

/// Test the exponential kind through the model.
#[test]
fn test_moving_average_exponential() {
    let model = MovingAverage::new()
        .kind(AverageKind::Exponential)
        .period(3)
        .build()
        .unwrap();
    assert_eq!(model.kind(), AverageKind::Exponential);
    assert_eq!(model.period(), 3);

    let series = model.compute_indexed(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

    assert_eq!(series.x, vec![2.0, 3.0, 4.0]);
    assert_relative_eq!(series.y[0], 2.25);
    assert_relative_eq!(series.y[1], 3.125);
    assert_relative_eq!(series.y[2], 4.0625);
}

/// Test builder validation.
#[test]
fn test_moving_average_builder_errors() {
    assert_eq!(
        MovingAverage::new().build().unwrap_err(),
        TrendError::MissingParameter { parameter: "period" }
    );
    assert_eq!(
        MovingAverage::new().period(1).build().unwrap_err(),
        TrendError::InvalidPeriod { period: 1, len: None }
    );
    assert_eq!(
        MovingAverage::new().period(3).period(4).build().unwrap_err(),
        TrendError::DuplicateParameter { parameter: "period" }
    );
}

/// Test that the period is checked against the series length.
#[test]
fn test_moving_average_period_too_long() {
    let model = MovingAverage::new().period(4).build().unwrap();

    assert_eq!(
        model
            .compute(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0])
            .unwrap_err(),
        TrendError::InvalidPeriod { period: 4, len: Some(4) }
    );
    assert_eq!(
        model.compute(&[0.0, 1.0], &[1.0]).unwrap_err(),
        TrendError::MismatchedInputs { x_len: 2, y_len: 1 }
    );
}

/// Test series sources with and without x-values.
#[test]
fn test_moving_average_source() {
    let model = MovingAverage::new()
        .kind(AverageKind::Triangular)
        .period(2)
        .build()
        .unwrap();

    let indexed = model
        .compute_source(&RawSeries::y_only(vec![2.0, 4.0, 6.0, 8.0]))
        .unwrap();
    assert_eq!(indexed.x, vec![1.0, 2.0, 3.0]);
    assert_eq!(indexed.y, vec![2.5, 4.0, 6.0]);

    let missing_y = RawSeries {
        x: Some(vec![0.0, 1.0, 2.0]),
        y: None,
    };
    assert_eq!(
        model.compute_source(&missing_y).unwrap_err(),
        TrendError::SeriesNotBound {
            dimension: Dimension::Y
        }
    );
}

// ============================================================================
// Function Series Tests
// ============================================================================

/// Test sampling y = f(x).
#[test]
fn test_function_sample_y() {
    let sampler = FunctionSeries::<f64>::new().range(0.0, 2.0).sample_count(5).build().unwrap();
    let series = sampler.sample_y(|x: f64| x * x);

    assert_eq!(series.x, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    assert_eq!(series.y, vec![0.0, 0.25, 1.0, 2.25, 4.0]);
}

/// Test that failing samples become NaN without aborting the series.
#[test]
fn test_function_failures_become_nan() {
    let sampler = FunctionSeries::<f64>::new().range(-2.0, 2.0).sample_count(5).build().unwrap();

    let series = sampler.sample_y(|x: f64| x.sqrt());
    assert!(series.y[0].is_nan());
    assert!(series.y[1].is_nan());
    assert_eq!(series.y[2], 0.0);
    assert_eq!(series.y[4], 2.0f64.sqrt());

    let series = sampler.sample_y(|x: f64| if x < 0.0 { None } else { Some(x + 1.0) });
    assert!(series.y[0].is_nan());
    assert_eq!(series.y[3], 2.0);

    let series = sampler.sample_y(|x: f64| -> Result<f64, &'static str> {
        if x == 0.0 {
            Err("pole")
        } else {
            Ok(1.0 / x)
        }
    });
    assert!(series.y[2].is_nan());
    assert_eq!(series.y[4], 0.5);
}

/// Test that a panicking sample becomes NaN.
#[cfg(feature = "std")]
#[test]
fn test_function_panic_becomes_nan() {
    let sampler = FunctionSeries::<f64>::new().range(0.0, 3.0).sample_count(4).build().unwrap();

    let series = sampler.sample_y(|x: f64| {
        if x > 2.5 {
            panic!("out of domain");
        }
        x
    });

    assert_eq!(&series.y[..3], &[0.0, 1.0, 2.0]);
    assert!(series.y[3].is_nan());
}

/// Test a parametric curve.
#[test]
fn test_function_parametric() {
    let sampler = FunctionSeries::<f64>::new()
        .range(0.0, std::f64::consts::PI)
        .sample_count(3)
        .build()
        .unwrap();

    let series = sampler.sample_parametric(f64::cos, f64::sin);

    assert_relative_eq!(series.x[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(series.x[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(series.x[2], -1.0, epsilon = 1e-12);
    assert_relative_eq!(series.y[1], 1.0, epsilon = 1e-12);
    assert_relative_eq!(series.y[2], 0.0, epsilon = 1e-12);
}

/// Test builder validation.
#[test]
fn test_function_builder_errors() {
    assert_eq!(
        FunctionSeries::<f64>::new().build().unwrap_err(),
        TrendError::MissingParameter { parameter: "range" }
    );
    assert_eq!(
        FunctionSeries::<f64>::new().range(2.0, 1.0).build().unwrap_err(),
        TrendError::InvalidRange { min: 2.0, max: 1.0 }
    );
    assert_eq!(
        FunctionSeries::<f64>::new().range(0.0, 1.0).sample_count(1).build().unwrap_err(),
        TrendError::InvalidSampleCount(1)
    );
    assert_eq!(
        FunctionSeries::<f64>::new().range(0.0, 1.0).range(0.0, 2.0).build().unwrap_err(),
        TrendError::DuplicateParameter { parameter: "range" }
    );
}

/// Test the default sample count.
#[test]
fn test_function_default_sample_count() {
    let sampler = FunctionSeries::<f64>::new().range(0.0, 1.0).build().unwrap();

    assert_eq!(sampler.sample_count(), 100);
    assert_eq!(sampler.range(), (0.0, 1.0));
    assert_eq!(sampler.sample_y(|x: f64| x).len(), 100);
}

// ============================================================================
// Series Result Tests
// ============================================================================

/// Test accessors and the (y, x) pair order.
#[test]
fn test_series_result_pair() {
    let series = SeriesResult {
        x: vec![1.0, 2.0],
        y: vec![3.0, 4.0],
    };
    assert_eq!(series.len(), 2);
    assert!(!series.is_empty());

    let (y, x) = series.into_pair();
    assert_eq!(y, vec![3.0, 4.0]);
    assert_eq!(x, vec![1.0, 2.0]);
    assert!(SeriesResult::<f64>::default().is_empty());
}

/// Test that long series are elided in Display.
#[test]
fn test_series_result_display() {
    let sampler = FunctionSeries::<f64>::new().range(0.0, 29.0).sample_count(30).build().unwrap();
    let text = format!("{}", sampler.sample_y(|x: f64| 2.0 * x));

    assert!(text.contains("Points: 30"));
    assert!(text.contains("..."));

    // First 10 and last 10 rows
    let rows = text
        .lines()
        .filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .count();
    assert_eq!(rows, 20);
}
