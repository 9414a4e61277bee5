//! Moving-average smoothers.
//!
//! ## Purpose
//!
//! This module implements four windowed smoothers over a raw y-series:
//! simple, weighted, exponential and triangular. They work directly on the
//! samples; no regression machinery is involved.
//!
//! ## Design notes
//!
//! * **Single pass**: Every smoother threads its running state (window sum,
//!   weighted numerator, current average) through one loop.
//! * **Aligned output**: Outputs start at index `period - 1` of the source,
//!   so `out[k]` belongs to `x[k + period - 1]`.
//!
//! ## Key concepts
//!
//! * **Weighted**: Weights `1..=p`, heaviest on the newest value, divided by
//!   `p(p+1)/2`. Updated with `num += p·yᵢ − total; total += yᵢ − yᵢ₋ₚ`.
//! * **Exponential**: Seeded with the mean of the first `p − 1` values, then
//!   `ema += 2/(p+1) · (yᵢ − ema)`.
//! * **Triangular**: A simple average of a simple average with warm-up values.
//!
//! ## Invariants
//!
//! * `1 < period < len` (checked by [`check_period`]).
//! * Output length is `len - period + 1`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TrendError;

// ============================================================================
// Smoother Kinds
// ============================================================================

/// Moving-average algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AverageKind {
    /// Arithmetic mean over a sliding window.
    #[default]
    Simple,

    /// Linearly weighted mean, newest value heaviest.
    Weighted,

    /// Exponentially weighted recursive mean.
    Exponential,

    /// Double-smoothed simple mean.
    Triangular,
}

impl AverageKind {
    /// Smooth `y` with the given period.
    pub fn compute<T: Float>(self, y: &[T], period: usize) -> Result<Vec<T>, TrendError> {
        check_period(period, Some(y.len()))?;

        Ok(match self {
            Self::Simple => simple(y, period),
            Self::Weighted => weighted(y, period),
            Self::Exponential => exponential(y, period),
            Self::Triangular => triangular(y, period),
        })
    }

    /// Index of the source sample matching the first output value.
    pub fn first_index(self, period: usize) -> usize {
        period.saturating_sub(1)
    }

    /// Algorithm name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Weighted => "Weighted",
            Self::Exponential => "Exponential",
            Self::Triangular => "Triangular",
        }
    }
}

/// Validate a period against the source length, when known.
pub fn check_period(period: usize, len: Option<usize>) -> Result<(), TrendError> {
    let too_long = len.is_some_and(|n| period >= n);
    if period <= 1 || too_long {
        return Err(TrendError::InvalidPeriod { period, len });
    }
    Ok(())
}

// ============================================================================
// Recurrences
// ============================================================================

/// Simple moving average; first value covers `y[0..period]`.
pub fn simple<T: Float>(y: &[T], period: usize) -> Vec<T> {
    let mut out = simple_with_warmup(y, period);
    out.drain(..period - 1);
    out
}

/// Simple moving average that also emits partial averages while the window fills.
///
/// `out[i]` is the mean of `y[0..=i]` for `i < period - 1`, then the full
/// window mean. Output length equals input length.
pub fn simple_with_warmup<T: Float>(y: &[T], period: usize) -> Vec<T> {
    let p = T::from(period).unwrap_or(T::one());
    let mut out = Vec::with_capacity(y.len());
    let mut total = T::zero();

    for (i, &v) in y.iter().enumerate() {
        total = total + v;
        if i >= period {
            total = total - y[i - period];
        }

        if i + 1 < period {
            out.push(total / T::from(i + 1).unwrap_or(T::one()));
        } else {
            out.push(total / p);
        }
    }

    out
}

/// Linearly weighted moving average.
pub fn weighted<T: Float>(y: &[T], period: usize) -> Vec<T> {
    let p = T::from(period).unwrap_or(T::one());
    let denominator = p * (p + T::one()) / (T::one() + T::one());

    let mut total = T::zero();
    let mut numerator = T::zero();
    for (k, &v) in y.iter().take(period).enumerate() {
        total = total + v;
        numerator = numerator + T::from(k + 1).unwrap_or(T::one()) * v;
    }

    let mut out = Vec::with_capacity(y.len() - period + 1);
    out.push(numerator / denominator);

    for i in period..y.len() {
        numerator = numerator + p * y[i] - total;
        total = total + y[i] - y[i - period];
        out.push(numerator / denominator);
    }

    out
}

/// Exponential moving average.
pub fn exponential<T: Float>(y: &[T], period: usize) -> Vec<T> {
    let p = T::from(period).unwrap_or(T::one());
    let two = T::one() + T::one();
    let multiplier = two / (p + T::one());

    let seed_len = period - 1;
    let seed = y[..seed_len].iter().fold(T::zero(), |acc, &v| acc + v)
        / T::from(seed_len).unwrap_or(T::one());

    let mut ema = seed;
    let mut out = Vec::with_capacity(y.len() - seed_len);
    for &v in &y[seed_len..] {
        ema = ema + multiplier * (v - ema);
        out.push(ema);
    }

    out
}

/// Triangular moving average: `simple(simple_with_warmup(y))`.
pub fn triangular<T: Float>(y: &[T], period: usize) -> Vec<T> {
    let smoothed = simple_with_warmup(y, period);
    simple(&smoothed, period)
}
