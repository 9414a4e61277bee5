//! Degenerate "simple" trend lines.
//!
//! These do not fit a curve. Each reduces the samples to one scalar (the
//! minimum, maximum or mean of x or y) and draws a straight line at it:
//! vertical for x-statistics, spanning `[min y, max y]`, and horizontal for
//! y-statistics, spanning `[min x, max x]`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::calculator::Calculator;
use crate::math::format::CoefficientFormat;
use crate::primitives::accumulate::Accumulate;
use crate::primitives::series::Axis;

/// Scalar statistic drawn as a straight line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleLine {
    /// Smallest x-value.
    MinX,

    /// Smallest y-value.
    MinY,

    /// Largest x-value.
    MaxX,

    /// Largest y-value.
    MaxY,

    /// Mean of the x-values.
    AverageX,

    /// Mean of the y-values.
    AverageY,
}

impl SimpleLine {
    /// Axis the statistic is taken over.
    pub fn axis(self) -> Axis {
        match self {
            Self::MinX | Self::MaxX | Self::AverageX => Axis::X,
            Self::MinY | Self::MaxY | Self::AverageY => Axis::Y,
        }
    }

    /// Compute the statistic.
    pub fn value<T: Accumulate>(self, calc: &Calculator<'_, T>) -> T {
        match self {
            Self::MinX => calc.min_x(),
            Self::MinY => calc.min_y(),
            Self::MaxX => calc.max_x(),
            Self::MaxY => calc.max_y(),
            Self::AverageX => calc.average_x(),
            Self::AverageY => calc.average_y(),
        }
    }

    /// Two-point line at `value` as `(y, x)` sequences.
    ///
    /// `span` is the `(min, max)` extent of the other axis.
    pub fn line<T: Float>(self, value: T, span: (T, T)) -> (Vec<T>, Vec<T>) {
        match self.axis() {
            Axis::X => (vec![span.0, span.1], vec![value, value]),
            Axis::Y => (vec![value, value], vec![span.0, span.1]),
        }
    }

    /// Equation text, `x = v` or `y = v`.
    pub fn equation<T: Float>(self, value: T, fmt: CoefficientFormat<'_, T>) -> String {
        let lhs = match self.axis() {
            Axis::X => "x = ",
            Axis::Y => "y = ",
        };
        [lhs, fmt(value).as_str()].concat()
    }

    /// Statistic name.
    pub fn name(self) -> &'static str {
        match self {
            Self::MinX => "MinX",
            Self::MinY => "MinY",
            Self::MaxX => "MaxX",
            Self::MaxY => "MaxY",
            Self::AverageX => "AverageX",
            Self::AverageY => "AverageY",
        }
    }
}
