//! Descriptive statistics over plain numeric slices.
//!
//! ## Purpose
//!
//! Stateless helpers shared by the regression family and by callers that need
//! quick summaries of a series (sum, mean, spread, extremes, rounding).
//!
//! ## Design notes
//!
//! * **Explicit failure**: Operations that are undefined on empty input return
//!   `Err` instead of `NaN` or `±inf`.
//! * **Asymmetric denominators**: [`variance`] is the sample variance (`n - 1`)
//!   while [`covariance`] is the population covariance (`n`).
//!
//! ## Invariants
//!
//! * All functions are pure; none mutate their input.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::accumulate::Accumulate;
use crate::primitives::errors::TrendError;

/// Sum of all values; zero for empty input.
#[inline]
pub fn sum<T: Accumulate>(values: &[T]) -> T {
    T::sum(values)
}

/// Arithmetic mean.
pub fn avg<T: Accumulate>(values: &[T]) -> Result<T, TrendError> {
    if values.is_empty() {
        return Err(TrendError::EmptyInput);
    }
    Ok(T::sum(values) / count(values.len()))
}

/// Sum of each value raised to `p`.
pub fn sum_of_pow<T: Float>(values: &[T], p: T) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v.powf(p))
}

/// Sum of squares.
#[inline]
pub fn sum_of_squares<T: Accumulate>(values: &[T]) -> T {
    T::sum_sq(values)
}

/// Sample variance: `sum((v - mean)^2) / (n - 1)`.
pub fn variance<T: Accumulate>(values: &[T]) -> Result<T, TrendError> {
    let n = values.len();
    if n < 2 {
        return Err(TrendError::TooFewPoints { got: n, min: 2 });
    }

    let mean = avg(values)?;
    let ss = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - mean;
        acc + d * d
    });

    Ok(ss / count(n - 1))
}

/// Population covariance: `sum((a - mean_a) * (b - mean_b)) / n`.
pub fn covariance<T: Accumulate>(a: &[T], b: &[T]) -> Result<T, TrendError> {
    if a.len() != b.len() {
        return Err(TrendError::MismatchedInputs {
            x_len: a.len(),
            y_len: b.len(),
        });
    }
    if a.is_empty() {
        return Err(TrendError::EmptyInput);
    }

    let mean_a = avg(a)?;
    let mean_b = avg(b)?;
    let s = a
        .iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&ai, &bi)| acc + (ai - mean_a) * (bi - mean_b));

    Ok(s / count(a.len()))
}

/// Element-wise product across all arrays, summed.
///
/// A zero or NaN element short-circuits its column's product to zero. All
/// arrays must have the same length; no arrays sums to zero.
pub fn sum_product<T: Float>(arrays: &[&[T]]) -> Result<T, TrendError> {
    let Some(first) = arrays.first() else {
        return Ok(T::zero());
    };

    let len = first.len();
    if let Some(other) = arrays.iter().find(|a| a.len() != len) {
        return Err(TrendError::MismatchedInputs {
            x_len: len,
            y_len: other.len(),
        });
    }

    let mut total = T::zero();
    for i in 0..len {
        let mut product = T::one();
        for array in arrays {
            let v = array[i];
            if v == T::zero() || v.is_nan() {
                product = T::zero();
                break;
            }
            product = product * v;
        }
        total = total + product;
    }

    Ok(total)
}

/// Smallest value.
pub fn min<T: Float>(values: &[T]) -> Result<T, TrendError> {
    values
        .iter()
        .copied()
        .reduce(T::min)
        .ok_or(TrendError::EmptyInput)
}

/// Largest value.
pub fn max<T: Float>(values: &[T]) -> Result<T, TrendError> {
    values
        .iter()
        .copied()
        .reduce(T::max)
        .ok_or(TrendError::EmptyInput)
}

/// Round to `digits` decimal places, halves toward positive infinity.
///
/// Zero stays zero and NaN propagates.
pub fn round<T: Float>(val: T, digits: i32) -> T {
    if val == T::zero() || val.is_nan() {
        return val;
    }

    let ten = T::from(10.0).unwrap_or(T::one());
    let factor = ten.powi(digits);
    let half = T::from(0.5).unwrap_or(T::zero());

    (val * factor + half).floor() / factor
}

#[inline]
fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or(T::one())
}
