//! Error types for trend fitting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while fitting a
//! trend line, computing a moving average or sampling a function series.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (lengths, orders, indices).
//! * **Categorised**: Every variant maps to an [`ErrorKind`] so callers can tell a
//!   configuration mistake from bad input data or a numerically singular system.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Configuration errors**: Caller bugs such as a period of 1 or mismatched arrays.
//! 2. **Data-domain errors**: Input data outside the domain of a transcendental fit.
//! 3. **Numerical errors**: The normal equations have no unique solution.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::series::{Axis, Dimension};

// ============================================================================
// Error Category
// ============================================================================

/// Broad category of a [`TrendError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid parameters or malformed input shape (caller bug).
    Configuration,

    /// Input data lies outside the domain of the requested fit.
    DataDomain,

    /// The linear system could not be solved.
    Numerical,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for trend fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendError {
    /// Input arrays are empty.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Number of points is below the minimum requirement.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Least-squares order must be at least 1 and at most the number of points.
    InvalidOrder {
        /// The order requested.
        order: usize,
        /// Number of data points available.
        points: usize,
    },

    /// Moving-average period must be greater than 1 and less than the series length.
    InvalidPeriod {
        /// The period requested.
        period: usize,
        /// Length of the source series, when known.
        len: Option<usize>,
    },

    /// Number of output samples must be at least 2.
    InvalidSampleCount(usize),

    /// Sampling range must be finite with `min <= max`.
    InvalidRange {
        /// Lower bound of the range.
        min: f64,
        /// Upper bound of the range.
        max: f64,
    },

    /// A configuration value or input sample is NaN or infinite.
    InvalidNumericValue(String),

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A parameter was set that the selected fit type does not accept.
    UnsupportedParameter {
        /// Name of the parameter.
        parameter: &'static str,
        /// Name of the fit type.
        fit: &'static str,
    },

    /// The series source has not been bound to data yet.
    SeriesNotBound {
        /// Dimension that returned no data.
        dimension: Dimension,
    },

    /// A logarithmic transform was requested on a non-positive value.
    NonPositiveValue {
        /// Axis holding the offending value.
        axis: Axis,
        /// Index of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Gaussian elimination found no usable pivot.
    SingularSystem {
        /// Number of unknowns in the system.
        size: usize,
    },
}

impl TrendError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NonPositiveValue { .. } => ErrorKind::DataDomain,
            Self::SingularSystem { .. } => ErrorKind::Numerical,
            _ => ErrorKind::Configuration,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for TrendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidOrder { order, points } => {
                write!(
                    f,
                    "Invalid order: {order} (must be between 1 and the number of points {points})"
                )
            }
            Self::InvalidPeriod { period, len } => match len {
                Some(len) => write!(
                    f,
                    "Invalid period: {period} (must be > 1 and < series length {len})"
                ),
                None => write!(f, "Invalid period: {period} (must be > 1)"),
            },
            Self::InvalidSampleCount(count) => {
                write!(f, "Invalid sample count: {count} (must be >= 2)")
            }
            Self::InvalidRange { min, max } => {
                write!(f, "Invalid range: [{min}, {max}] (must be finite with min <= max)")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Required parameter '{parameter}' was not set")
            }
            Self::UnsupportedParameter { parameter, fit } => {
                write!(f, "Parameter '{parameter}' is not supported by the {fit} fit")
            }
            Self::SeriesNotBound { dimension } => {
                write!(f, "Series source has no data bound for dimension {dimension}")
            }
            Self::NonPositiveValue { axis, index, value } => {
                write!(
                    f,
                    "Non-positive value {axis}[{index}]={value} (logarithmic transform requires > 0)"
                )
            }
            Self::SingularSystem { size } => {
                write!(f, "No solution: the {size}x{size} normal equations are singular")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for TrendError {}
