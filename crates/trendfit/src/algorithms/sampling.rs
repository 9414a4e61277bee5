//! Guarded evaluation of user-supplied functions.
//!
//! A function series calls arbitrary caller code once per grid point. One bad
//! sample (an error, a `None`, a non-finite value or, with `std`, a panic)
//! must not abort the whole series, so each call is reduced to a [`Sample`]
//! and failures become NaN in the plotted output.

// External dependencies
use num_traits::Float;

// ============================================================================
// Sample
// ============================================================================

/// Outcome of one guarded function call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample<T> {
    /// The function produced a finite value.
    Value(T),

    /// The function failed or produced a non-finite value.
    Invalid,
}

impl<T: Float> Sample<T> {
    /// Keep finite values, reject everything else.
    pub fn from_value(v: T) -> Self {
        if v.is_finite() {
            Self::Value(v)
        } else {
            Self::Invalid
        }
    }

    /// The value, or NaN for an invalid sample.
    pub fn value_or_nan(self) -> T {
        match self {
            Self::Value(v) => v,
            Self::Invalid => T::nan(),
        }
    }

    /// Whether the sample holds a value.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

// ============================================================================
// Function Return Types
// ============================================================================

/// Return types accepted from sampled functions.
pub trait IntoSample<T> {
    /// Convert into a [`Sample`].
    fn into_sample(self) -> Sample<T>;
}

impl IntoSample<f64> for f64 {
    fn into_sample(self) -> Sample<f64> {
        Sample::from_value(self)
    }
}

impl IntoSample<f32> for f32 {
    fn into_sample(self) -> Sample<f32> {
        Sample::from_value(self)
    }
}

impl<T: Float> IntoSample<T> for Option<T> {
    fn into_sample(self) -> Sample<T> {
        self.map_or(Sample::Invalid, Sample::from_value)
    }
}

impl<T: Float, E> IntoSample<T> for Result<T, E> {
    fn into_sample(self) -> Sample<T> {
        self.map_or(Sample::Invalid, Sample::from_value)
    }
}

// ============================================================================
// Guarded Call
// ============================================================================

/// Call `f(t)` and reduce the outcome to a [`Sample`].
#[cfg(feature = "std")]
pub fn guarded<T, R, F>(f: &F, t: T) -> Sample<T>
where
    T: Float,
    R: IntoSample<T>,
    F: Fn(T) -> R,
{
    use std::panic::{catch_unwind, AssertUnwindSafe};

    match catch_unwind(AssertUnwindSafe(|| f(t))) {
        Ok(r) => r.into_sample(),
        Err(_) => Sample::Invalid,
    }
}

/// Call `f(t)` and reduce the outcome to a [`Sample`].
#[cfg(not(feature = "std"))]
pub fn guarded<T, R, F>(f: &F, t: T) -> Sample<T>
where
    T: Float,
    R: IntoSample<T>,
    F: Fn(T) -> R,
{
    f(t).into_sample()
}
