#![cfg(feature = "dev")]
//! Tests for the memoized sample statistics.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Input checks
//! 2. **Aggregates** - Extremes, sums and means
//! 3. **Derived Columns** - Logarithms and cached products

use approx::assert_relative_eq;

use trendfit::internals::math::calculator::{Calculator, Column};
use trendfit::internals::primitives::errors::TrendError;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that mismatched and empty inputs are rejected.
#[test]
fn test_calculator_rejects_bad_inputs() {
    let err = Calculator::new(&[1.0, 2.0], &[1.0]).unwrap_err();
    assert_eq!(err, TrendError::MismatchedInputs { x_len: 2, y_len: 1 });

    let empty: [f64; 0] = [];
    let err = Calculator::new(&empty, &empty).unwrap_err();
    assert_eq!(err, TrendError::EmptyInput);
}

// ============================================================================
// Aggregate Tests
// ============================================================================

/// Test extremes, sums and averages.
#[test]
fn test_calculator_aggregates() {
    let x = [3.0, 1.0, 4.0, 2.0];
    let y = [6.0, 2.0, 8.0, 4.0];
    let calc = Calculator::new(&x, &y).unwrap();

    assert_eq!(calc.len(), 4);
    assert_eq!(calc.n(), 4.0);
    assert_eq!(calc.min_x(), 1.0);
    assert_eq!(calc.max_x(), 4.0);
    assert_eq!(calc.min_y(), 2.0);
    assert_eq!(calc.max_y(), 8.0);
    assert_relative_eq!(calc.sum_x(), 10.0);
    assert_relative_eq!(calc.sum_y(), 20.0);
    assert_relative_eq!(calc.average_x(), 2.5);
    assert_relative_eq!(calc.average_y(), 5.0);
    assert_relative_eq!(calc.sum_of_square_x(), 30.0);
    assert_relative_eq!(calc.sum_of_square_y(), 120.0);
}

/// Test that repeated queries return the cached value.
#[test]
fn test_calculator_values_are_stable() {
    let x = [1.5, 2.5, 3.5];
    let y = [0.5, 0.25, 0.125];
    let calc = Calculator::new(&x, &y).unwrap();

    let first = calc.sum_product(Column::X, Column::Y);
    let second = calc.sum_product(Column::X, Column::Y);
    assert_eq!(first, second);
}

// ============================================================================
// Derived Column Tests
// ============================================================================

/// Test logarithm columns and their sums.
#[test]
fn test_calculator_log_columns() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [1.0, 1.0, 1.0, 1.0];
    let calc = Calculator::new(&x, &y).unwrap();

    assert_eq!(calc.log_x()[0], 0.0);
    assert_relative_eq!(calc.log_x()[3], 4.0f64.ln(), epsilon = 1e-12);
    assert_relative_eq!(calc.sum_log_x(), 24.0f64.ln(), epsilon = 1e-12);
    assert_relative_eq!(calc.sum_log_y(), 0.0, epsilon = 1e-12);

    let expected: f64 = x.iter().map(|v: &f64| v.ln() * v.ln()).sum();
    assert_relative_eq!(calc.sum_of_square_log_x(), expected, epsilon = 1e-12);
}

/// Test that products are cached per column pair, not globally.
#[test]
fn test_calculator_products_keyed_by_columns() {
    let x = [1.0_f64, 2.0, 3.0, 4.0];
    let y = [2.0_f64, 4.0, 6.0, 8.0];
    let calc = Calculator::new(&x, &y).unwrap();

    let xy = calc.sum_product(Column::X, Column::Y);
    let log_x_y = calc.sum_product(Column::LogX, Column::Y);

    assert_relative_eq!(xy, 60.0);
    let expected: f64 = x.iter().zip(y.iter()).map(|(a, b)| a.ln() * b).sum();
    assert_relative_eq!(log_x_y, expected, epsilon = 1e-12);

    // Order of the pair does not matter
    assert_eq!(calc.sum_product(Column::Y, Column::X), xy);
}

/// Test generic column access.
#[test]
fn test_calculator_column_sums() {
    let x = [1.0, 2.0, 3.0];
    let y = [4.0, 5.0, 6.0];
    let calc = Calculator::new(&x, &y).unwrap();

    assert_eq!(calc.column(Column::X), &x[..]);
    assert_eq!(calc.column(Column::Y), &y[..]);
    assert_relative_eq!(calc.sum(Column::Y), 15.0);
    assert_relative_eq!(calc.sum_of_squares(Column::X), 14.0);
}
