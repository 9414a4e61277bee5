//! Memoized aggregate statistics over a pair of sample series.
//!
//! ## Purpose
//!
//! The closed-form regressions repeatedly need the same handful of sums over
//! the samples and over their logarithms. [`Calculator`] computes each of them
//! on first use and then serves the cached value.
//!
//! ## Design notes
//!
//! * **Lazy**: Each statistic lives in its own `OnceCell`.
//! * **Keyed cache**: Sums of products are cached per unordered column pair,
//!   so asking for `Σ x·y` never returns a stale `Σ ln(x)·y`.
//! * **Call-scoped**: A calculator borrows its data and is rebuilt whenever the
//!   data changes; there is no invalidation.
//!
//! ## Invariants
//!
//! * `x` and `y` are non-empty and equally long (checked in [`Calculator::new`]).
//! * Cached values never change once computed.
//!
//! ## Non-goals
//!
//! * This module does not check the logarithm domain; non-positive values
//!   produce NaN here and are rejected earlier by the validator.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

// External dependencies
use core::cell::{OnceCell, RefCell};
use num_traits::Float;

// Internal dependencies
use crate::primitives::accumulate::Accumulate;
use crate::primitives::errors::TrendError;

// ============================================================================
// Columns
// ============================================================================

/// A derived column of the sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    /// Raw x-values.
    X,

    /// Raw y-values.
    Y,

    /// Natural logarithm of the x-values.
    LogX,

    /// Natural logarithm of the y-values.
    LogY,
}

// ============================================================================
// Calculator
// ============================================================================

/// Lazily evaluated statistics over `(x, y)` samples.
#[derive(Debug)]
pub struct Calculator<'a, T> {
    x: &'a [T],
    y: &'a [T],

    min_x: OnceCell<T>,
    max_x: OnceCell<T>,
    min_y: OnceCell<T>,
    max_y: OnceCell<T>,
    sum_x: OnceCell<T>,
    sum_y: OnceCell<T>,
    log_x: OnceCell<Vec<T>>,
    log_y: OnceCell<Vec<T>>,
    sum_log_x: OnceCell<T>,
    sum_log_y: OnceCell<T>,
    sum_sq_x: OnceCell<T>,
    sum_sq_y: OnceCell<T>,
    sum_sq_log_x: OnceCell<T>,
    sum_sq_log_y: OnceCell<T>,

    products: RefCell<BTreeMap<(Column, Column), T>>,
}

impl<'a, T: Accumulate> Calculator<'a, T> {
    /// Create a calculator over equally long, non-empty samples.
    pub fn new(x: &'a [T], y: &'a [T]) -> Result<Self, TrendError> {
        if x.len() != y.len() {
            return Err(TrendError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(TrendError::EmptyInput);
        }

        Ok(Self {
            x,
            y,
            min_x: OnceCell::new(),
            max_x: OnceCell::new(),
            min_y: OnceCell::new(),
            max_y: OnceCell::new(),
            sum_x: OnceCell::new(),
            sum_y: OnceCell::new(),
            log_x: OnceCell::new(),
            log_y: OnceCell::new(),
            sum_log_x: OnceCell::new(),
            sum_log_y: OnceCell::new(),
            sum_sq_x: OnceCell::new(),
            sum_sq_y: OnceCell::new(),
            sum_sq_log_x: OnceCell::new(),
            sum_sq_log_y: OnceCell::new(),
            products: RefCell::new(BTreeMap::new()),
        })
    }

    // ========================================================================
    // Raw Data
    // ========================================================================

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; construction rejects empty samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Sample count as a float.
    pub fn n(&self) -> T {
        T::from(self.x.len()).unwrap_or(T::one())
    }

    /// Raw x-values.
    pub fn x(&self) -> &'a [T] {
        self.x
    }

    /// Raw y-values.
    pub fn y(&self) -> &'a [T] {
        self.y
    }

    /// Values of a derived column.
    pub fn column(&self, column: Column) -> &[T] {
        match column {
            Column::X => self.x,
            Column::Y => self.y,
            Column::LogX => self.log_x(),
            Column::LogY => self.log_y(),
        }
    }

    // ========================================================================
    // Extremes and Averages
    // ========================================================================

    /// Smallest x-value.
    pub fn min_x(&self) -> T {
        *self.min_x.get_or_init(|| extreme(self.x, T::min))
    }

    /// Largest x-value.
    pub fn max_x(&self) -> T {
        *self.max_x.get_or_init(|| extreme(self.x, T::max))
    }

    /// Smallest y-value.
    pub fn min_y(&self) -> T {
        *self.min_y.get_or_init(|| extreme(self.y, T::min))
    }

    /// Largest y-value.
    pub fn max_y(&self) -> T {
        *self.max_y.get_or_init(|| extreme(self.y, T::max))
    }

    /// Mean of the x-values.
    pub fn average_x(&self) -> T {
        self.sum_x() / self.n()
    }

    /// Mean of the y-values.
    pub fn average_y(&self) -> T {
        self.sum_y() / self.n()
    }

    // ========================================================================
    // Sums
    // ========================================================================

    /// `Σ x`.
    pub fn sum_x(&self) -> T {
        *self.sum_x.get_or_init(|| T::sum(self.x))
    }

    /// `Σ y`.
    pub fn sum_y(&self) -> T {
        *self.sum_y.get_or_init(|| T::sum(self.y))
    }

    /// `ln(x)` for every sample.
    pub fn log_x(&self) -> &[T] {
        self.log_x.get_or_init(|| self.x.iter().map(|v| v.ln()).collect())
    }

    /// `ln(y)` for every sample.
    pub fn log_y(&self) -> &[T] {
        self.log_y.get_or_init(|| self.y.iter().map(|v| v.ln()).collect())
    }

    /// `Σ ln(x)`.
    pub fn sum_log_x(&self) -> T {
        *self.sum_log_x.get_or_init(|| T::sum(self.log_x()))
    }

    /// `Σ ln(y)`.
    pub fn sum_log_y(&self) -> T {
        *self.sum_log_y.get_or_init(|| T::sum(self.log_y()))
    }

    /// `Σ x²`.
    pub fn sum_of_square_x(&self) -> T {
        *self.sum_sq_x.get_or_init(|| T::sum_sq(self.x))
    }

    /// `Σ y²`.
    pub fn sum_of_square_y(&self) -> T {
        *self.sum_sq_y.get_or_init(|| T::sum_sq(self.y))
    }

    /// `Σ ln(x)²`.
    pub fn sum_of_square_log_x(&self) -> T {
        *self.sum_sq_log_x.get_or_init(|| T::sum_sq(self.log_x()))
    }

    /// `Σ ln(y)²`.
    pub fn sum_of_square_log_y(&self) -> T {
        *self.sum_sq_log_y.get_or_init(|| T::sum_sq(self.log_y()))
    }

    /// Sum of a column.
    pub fn sum(&self, column: Column) -> T {
        match column {
            Column::X => self.sum_x(),
            Column::Y => self.sum_y(),
            Column::LogX => self.sum_log_x(),
            Column::LogY => self.sum_log_y(),
        }
    }

    /// Sum of squares of a column.
    pub fn sum_of_squares(&self, column: Column) -> T {
        match column {
            Column::X => self.sum_of_square_x(),
            Column::Y => self.sum_of_square_y(),
            Column::LogX => self.sum_of_square_log_x(),
            Column::LogY => self.sum_of_square_log_y(),
        }
    }

    /// `Σ a·b`, cached per unordered column pair.
    pub fn sum_product(&self, a: Column, b: Column) -> T {
        let key = if a <= b { (a, b) } else { (b, a) };

        if let Some(&cached) = self.products.borrow().get(&key) {
            return cached;
        }

        let value = T::dot(self.column(key.0), self.column(key.1));
        self.products.borrow_mut().insert(key, value);
        value
    }
}

#[inline]
fn extreme<T: Float>(values: &[T], pick: fn(T, T) -> T) -> T {
    let mut it = values.iter().copied();
    let first = it.next().unwrap_or(T::nan());
    it.fold(first, pick)
}
