//! Raw series access and sampling grids.
//!
//! This module describes the narrow boundary with the chart-binding layer that
//! owns the data: a [`SeriesSource`] hands out raw y- or x-values, and results
//! flow back as plain vectors sampled on an evenly spaced grid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Dimensions
// ============================================================================

/// Dimension index of a bound series, as used by the chart binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Dimension 0: dependent values.
    Y = 0,

    /// Dimension 1: independent values.
    X = 1,
}

impl Dimension {
    /// Map a raw dimension index (0 or 1) to a [`Dimension`].
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Y),
            1 => Some(Self::X),
            _ => None,
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Y => write!(f, "0 (y)"),
            Self::X => write!(f, "1 (x)"),
        }
    }
}

/// Axis of a sample, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Independent axis.
    X,

    /// Dependent axis.
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

// ============================================================================
// Series Source
// ============================================================================

/// Provider of raw series data.
///
/// Returning `None` means the source is not bound to data yet.
pub trait SeriesSource<T> {
    /// Raw values for the given dimension.
    fn raw_series(&self, dimension: Dimension) -> Option<&[T]>;
}

/// Owned in-memory series source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSeries<T> {
    /// Independent values, if bound.
    pub x: Option<Vec<T>>,

    /// Dependent values, if bound.
    pub y: Option<Vec<T>>,
}

impl<T> RawSeries<T> {
    /// Bind both dimensions.
    pub fn new(x: Vec<T>, y: Vec<T>) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Bind only the dependent dimension.
    pub fn y_only(y: Vec<T>) -> Self {
        Self { x: None, y: Some(y) }
    }
}

impl<T> SeriesSource<T> for RawSeries<T> {
    fn raw_series(&self, dimension: Dimension) -> Option<&[T]> {
        match dimension {
            Dimension::Y => self.y.as_deref(),
            Dimension::X => self.x.as_deref(),
        }
    }
}

// ============================================================================
// Sampling Grid
// ============================================================================

/// `count` evenly spaced values spanning `[min, max]`, both ends included.
///
/// The last value is pinned to `max` so accumulated rounding never leaves the
/// grid short of the upper bound. Callers validate `count >= 2`.
pub fn evenly_spaced<T: Float>(min: T, max: T, count: usize) -> Vec<T> {
    debug_assert!(count >= 2, "evenly_spaced: count must be at least 2");

    let steps = T::from(count.saturating_sub(1).max(1)).unwrap_or(T::one());
    let delta = (max - min) / steps;

    let mut grid = Vec::with_capacity(count);
    for i in 0..count {
        if i + 1 == count {
            grid.push(max);
        } else {
            grid.push(min + delta * T::from(i).unwrap_or(T::zero()));
        }
    }
    grid
}

/// Index positions `0..n` as an x-series.
pub fn index_series<T: Float>(n: usize) -> Vec<T> {
    (0..n).map(|i| T::from(i).unwrap_or(T::zero())).collect()
}
