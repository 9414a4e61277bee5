//! Summation kernels.
//!
//! ## Purpose
//!
//! Sums and dot products are the innermost loops of every regression in this
//! crate (the normal equations are nothing but sums of products). This module
//! provides a generic scalar path and lane-parallel paths for `f64` and `f32`.
//!
//! ## Design notes
//!
//! * **Trait-dispatched**: [`Accumulate`] has scalar default methods; `f64`
//!   and `f32` override them with `wide` vector lanes.
//! * **Remainder handling**: Elements that do not fill a full lane are summed
//!   with the scalar loop.
//!
//! ## Invariants
//!
//! * `dot` only reads `min(a.len(), b.len())` elements; callers validate lengths.
//! * Empty input sums to zero.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// ============================================================================
// Scalar Kernels
// ============================================================================

/// Scalar sum (generic Float).
#[inline]
pub fn sum_scalar<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Scalar dot product (generic Float).
#[inline]
pub fn dot_scalar<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&ai, &bi)| acc + ai * bi)
}

// ============================================================================
// Vector Kernels
// ============================================================================

/// Lane-parallel sum (f64).
#[inline]
pub fn sum_simd_f64(values: &[f64]) -> f64 {
    let chunks = values.chunks_exact(2);
    let tail = chunks.remainder();

    let mut acc = f64x2::splat(0.0);
    for c in chunks {
        acc += f64x2::new([c[0], c[1]]);
    }

    tail.iter().fold(acc.reduce_add(), |s, &v| s + v)
}

/// Lane-parallel dot product (f64).
#[inline]
pub fn dot_simd_f64(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    let (a, b) = (&a[..n], &b[..n]);

    let a_chunks = a.chunks_exact(2);
    let b_chunks = b.chunks_exact(2);
    let split = n - a_chunks.remainder().len();

    let mut acc = f64x2::splat(0.0);
    for (ca, cb) in a_chunks.zip(b_chunks) {
        acc += f64x2::new([ca[0], ca[1]]) * f64x2::new([cb[0], cb[1]]);
    }

    dot_scalar(&a[split..], &b[split..]) + acc.reduce_add()
}

/// Lane-parallel sum (f32).
#[inline]
pub fn sum_simd_f32(values: &[f32]) -> f32 {
    let chunks = values.chunks_exact(8);
    let tail = chunks.remainder();

    let mut acc = f32x8::splat(0.0);
    for c in chunks {
        acc += f32x8::new([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]);
    }

    tail.iter().fold(acc.reduce_add(), |s, &v| s + v)
}

/// Lane-parallel dot product (f32).
#[inline]
pub fn dot_simd_f32(a: &[f32], b: &[f32]) -> f32 {
    let n = a.len().min(b.len());
    let (a, b) = (&a[..n], &b[..n]);

    let a_chunks = a.chunks_exact(8);
    let b_chunks = b.chunks_exact(8);
    let split = n - a_chunks.remainder().len();

    let mut acc = f32x8::splat(0.0);
    for (ca, cb) in a_chunks.zip(b_chunks) {
        let va = f32x8::new([ca[0], ca[1], ca[2], ca[3], ca[4], ca[5], ca[6], ca[7]]);
        let vb = f32x8::new([cb[0], cb[1], cb[2], cb[3], cb[4], cb[5], cb[6], cb[7]]);
        acc += va * vb;
    }

    dot_scalar(&a[split..], &b[split..]) + acc.reduce_add()
}

// ============================================================================
// Accumulate Trait
// ============================================================================

/// Type-specific summation kernels.
pub trait Accumulate: Float {
    /// Sum of all values.
    #[inline]
    fn sum(values: &[Self]) -> Self {
        sum_scalar(values)
    }

    /// Sum of element-wise products.
    #[inline]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        dot_scalar(a, b)
    }

    /// Sum of squares.
    #[inline]
    fn sum_sq(values: &[Self]) -> Self {
        Self::dot(values, values)
    }
}

impl Accumulate for f64 {
    #[inline]
    fn sum(values: &[f64]) -> f64 {
        sum_simd_f64(values)
    }

    #[inline]
    fn dot(a: &[f64], b: &[f64]) -> f64 {
        dot_simd_f64(a, b)
    }
}

impl Accumulate for f32 {
    #[inline]
    fn sum(values: &[f32]) -> f32 {
        sum_simd_f32(values)
    }

    #[inline]
    fn dot(a: &[f32], b: &[f32]) -> f32 {
        dot_simd_f32(a, b)
    }
}
