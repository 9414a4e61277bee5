//! Input validation for trend configuration and data.
//!
//! ## Purpose
//!
//! This module checks input lengths, finiteness, parameter bounds and the
//! domain preconditions of the logarithmic fits before any computation runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not clamp out-of-range parameters.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TrendError;
use crate::primitives::series::Axis;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for trend configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate sample arrays: non-empty, equal length, `min_points`, finite.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T], min_points: usize) -> Result<(), TrendError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(TrendError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(TrendError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient points
        if n < min_points {
            return Err(TrendError::TooFewPoints {
                got: n,
                min: min_points,
            });
        }

        // Check 4: All values finite
        Self::validate_finite(x, Axis::X)?;
        Self::validate_finite(y, Axis::Y)
    }

    /// Validate that every value of a series is finite.
    pub fn validate_finite<T: Float>(values: &[T], axis: Axis) -> Result<(), TrendError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(TrendError::InvalidNumericValue(format!(
                "{}[{}]={}",
                axis,
                i,
                values[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), TrendError> {
        if !val.is_finite() {
            return Err(TrendError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that every value is strictly positive (logarithm domain).
    pub fn validate_positive<T: Float>(values: &[T], axis: Axis) -> Result<(), TrendError> {
        match values.iter().position(|&v| v <= T::zero()) {
            Some(index) => Err(TrendError::NonPositiveValue {
                axis,
                index,
                value: values[index].to_f64().unwrap_or(f64::NAN),
            }),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a least-squares order against the available points.
    pub fn validate_order(order: usize, points: usize) -> Result<(), TrendError> {
        if order < 1 || order > points {
            return Err(TrendError::InvalidOrder { order, points });
        }
        Ok(())
    }

    /// Validate the number of output samples.
    pub fn validate_sample_count(count: usize) -> Result<(), TrendError> {
        if count < 2 {
            return Err(TrendError::InvalidSampleCount(count));
        }
        Ok(())
    }

    /// Validate a sampling range.
    pub fn validate_range<T: Float>(min: T, max: T) -> Result<(), TrendError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(TrendError::InvalidRange {
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), TrendError> {
        if let Some(param) = duplicate_param {
            return Err(TrendError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
