#![cfg(feature = "dev")]
//! Tests for the trend line builder and model.
//!
//! ## Test Organization
//!
//! 1. **Builder Validation** - Parameter checks in build()
//! 2. **Fitting** - Direct samples and series sources
//! 3. **Results** - Diagnostics and Display

use approx::assert_relative_eq;

use trendfit::prelude::*;

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test the default configuration.
#[test]
fn test_builder_defaults() {
    let model = TrendLine::<f64>::new().build().unwrap();

    assert_eq!(model.fit_type(), Linear);
    assert_eq!(model.config().sample_count, 100);
    assert_eq!(model.config().order, None);
    assert_eq!(model.config().y_offset, None);
}

/// Test that setting a parameter twice is rejected.
#[test]
fn test_builder_duplicate_parameter() {
    let err = TrendLine::<f64>::new()
        .fit_type(Linear)
        .fit_type(Power)
        .build()
        .unwrap_err();

    assert_eq!(err, TrendError::DuplicateParameter { parameter: "fit_type" });
}

/// Test that parameters unused by the chosen fit are rejected.
#[test]
fn test_builder_unsupported_parameters() {
    let err = TrendLine::<f64>::new()
        .fit_type(Polynomial)
        .y_offset(1.0)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        TrendError::UnsupportedParameter {
            parameter: "y_offset",
            fit: "Polynomial"
        }
    );

    let err = TrendLine::<f64>::new().order(2).build().unwrap_err();
    assert_eq!(
        err,
        TrendError::UnsupportedParameter {
            parameter: "order",
            fit: "Linear"
        }
    );
}

/// Test numeric parameter checks.
#[test]
fn test_builder_invalid_values() {
    assert_eq!(
        TrendLine::<f64>::new()
            .fit_type(Polynomial)
            .order(0)
            .build()
            .unwrap_err(),
        TrendError::InvalidOrder { order: 0, points: 0 }
    );
    assert_eq!(
        TrendLine::<f64>::new().sample_count(1).build().unwrap_err(),
        TrendError::InvalidSampleCount(1)
    );
    assert!(matches!(
        TrendLine::<f64>::new().y_offset(f64::NAN).build(),
        Err(TrendError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Fitting Tests
// ============================================================================

/// Test a fit through the builder.
#[test]
fn test_fit_through_builder() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let y = vec![2.0, 4.1, 5.9, 8.0];

    let fit = TrendLine::<f64>::new()
        .fit_type(Linear)
        .sample_count(10)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(fit.fit_type(), Linear);
    assert_eq!(fit.sample_count(), 10);
    assert_eq!(fit.x_range(), (1.0, 4.0));
    assert_eq!(fit.y_range(), (2.0, 8.0));
    assert_relative_eq!(fit.coefficients()[0], 1.98, epsilon = 1e-12);
}

/// Test that a model can be reused for several series.
#[test]
fn test_model_reuse() {
    let model = TrendLine::<f64>::new().fit_type(Polynomial).order(1).build().unwrap();

    let a = model.fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
    let b = model.fit(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();

    assert_relative_eq!(a.coefficients()[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(b.coefficients()[0], 2.0, epsilon = 1e-12);
}

/// Test fitting from a bound series source.
#[test]
fn test_fit_source() {
    let model = TrendLine::<f64>::new().build().unwrap();

    let source = RawSeries::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]);
    let fit = model.fit_source(&source).unwrap();
    assert_relative_eq!(fit.approximate(3.0), 7.0, epsilon = 1e-12);

    let unbound = RawSeries::y_only(vec![1.0, 3.0, 5.0]);
    assert_eq!(
        model.fit_source(&unbound).unwrap_err(),
        TrendError::SeriesNotBound {
            dimension: Dimension::X
        }
    );
}

/// Test a custom series source implementation.
#[test]
fn test_custom_series_source() {
    struct Columns {
        data: [Vec<f64>; 2],
    }

    impl SeriesSource<f64> for Columns {
        fn raw_series(&self, dimension: Dimension) -> Option<&[f64]> {
            Some(&self.data[dimension as usize])
        }
    }

    // Dimension 0 is y, dimension 1 is x
    let source = Columns {
        data: [vec![10.0, 20.0, 30.0], vec![1.0, 2.0, 3.0]],
    };
    let fit = TrendLine::<f64>::new().build().unwrap().fit_source(&source).unwrap();

    assert_relative_eq!(fit.coefficients()[0], 10.0, epsilon = 1e-12);
    assert_relative_eq!(fit.coefficients()[1], 0.0, epsilon = 1e-12);
}

/// Test a single precision fit.
#[test]
fn test_fit_f32() {
    let x = vec![1.0f32, 2.0, 3.0, 4.0];
    let y = vec![3.0f32, 5.0, 7.0, 9.0];

    let fit = TrendLine::<f32>::new().build().unwrap().fit(&x, &y).unwrap();

    assert_relative_eq!(fit.coefficients()[0], 2.0f32, epsilon = 1e-5);
    assert_relative_eq!(fit.approximate(10.0), 21.0f32, epsilon = 1e-4);
}

// ============================================================================
// Result Tests
// ============================================================================

/// Test diagnostics of a fitted line.
#[test]
fn test_fit_diagnostics() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let y = vec![3.0, 5.0, 7.0, 9.0];
    let fit = TrendLine::<f64>::new().build().unwrap().fit(&x, &y).unwrap();

    let diag = fit.diagnostics(&x, &y).unwrap();
    assert_relative_eq!(diag.rmse, 0.0, epsilon = 1e-12);
    assert_relative_eq!(diag.r_squared, 1.0, epsilon = 1e-12);
    assert_eq!(diag.scored, 4);

    assert_eq!(
        fit.diagnostics(&x, &y[..2]).unwrap_err(),
        TrendError::MismatchedInputs { x_len: 4, y_len: 2 }
    );
}

/// Test the summary output.
#[test]
fn test_fit_display() {
    let fit = TrendLine::<f64>::new()
        .build()
        .unwrap()
        .fit(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0])
        .unwrap();
    let text = format!("{}", fit);

    assert!(text.contains("Summary:"));
    assert!(text.contains("Fit type:     Linear"));
    assert!(text.contains("Samples:      100"));
    assert!(text.contains("Equation:"));
}

/// Test error categories.
#[test]
fn test_error_kinds() {
    assert_eq!(TrendError::EmptyInput.kind(), ErrorKind::Configuration);
    assert_eq!(
        TrendError::InvalidPeriod { period: 1, len: None }.kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        TrendError::NonPositiveValue {
            axis: Axis::X,
            index: 0,
            value: -1.0
        }
        .kind(),
        ErrorKind::DataDomain
    );
    assert_eq!(
        TrendError::SingularSystem { size: 3 }.kind(),
        ErrorKind::Numerical
    );
    assert_eq!(
        TrendError::SingularSystem { size: 3 }.to_string(),
        "No solution: the 3x3 normal equations are singular"
    );
}
