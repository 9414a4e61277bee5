//! General linear least squares over a basis of functions.
//!
//! ## Purpose
//!
//! This module fits `y ≈ Σ c_k · φ_k(x)` for a family of basis functions
//! `φ_k` by forming the normal equations and solving them with Gaussian
//! elimination. It backs the polynomial and Fourier trend lines.
//!
//! ## Design notes
//!
//! * **Injectable basis**: [`Basis`] generates the basis values for one `x`;
//!   the matrix assembly and the solver do not know which family is used.
//! * **Partial pivoting**: Each elimination step swaps in the row with the
//!   largest magnitude candidate pivot.
//! * **Flat storage**: The augmented matrix is a single row-major buffer.
//!
//! ## Key concepts
//!
//! * **Normal equations**: `A[i][j] = Σ φ_i·φ_j`, right-hand side `Σ y·φ_i`.
//! * **Singularity**: A pivot column whose largest magnitude does not exceed
//!   [`PIVOT_EPSILON`] means there is no unique solution.
//!
//! ## Invariants
//!
//! * Coefficients are returned in basis order (`φ_0` first).
//! * The solver never returns a zero-filled vector in place of a failure.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::format::{CoefficientFormat, EquationBuilder};
use crate::primitives::errors::TrendError;

/// Largest pivot magnitude treated as zero.
pub const PIVOT_EPSILON: f64 = 0.0;

// ============================================================================
// Basis Functions
// ============================================================================

/// Family of basis functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// `1, x, x², …, xⁿ` for a degree-`n` polynomial.
    Polynomial,

    /// `1, cos(x), sin(x), cos(2x), sin(2x), …`.
    Fourier,
}

impl Basis {
    /// Number of basis terms for a user-facing `order`.
    ///
    /// Polynomial order is the degree (one more term than the order); Fourier
    /// order is the term count itself.
    pub fn terms(self, order: usize) -> usize {
        match self {
            Self::Polynomial => order + 1,
            Self::Fourier => order,
        }
    }

    /// Write the first `out.len()` basis values at `x` into `out`.
    pub fn evaluate<T: Float>(self, x: T, out: &mut [T]) {
        match self {
            Self::Polynomial => {
                let mut p = T::one();
                for v in out.iter_mut() {
                    *v = p;
                    p = p * x;
                }
            }
            Self::Fourier => {
                for (k, v) in out.iter_mut().enumerate() {
                    *v = if k == 0 {
                        T::one()
                    } else {
                        let harmonic = T::from(k.div_ceil(2)).unwrap_or(T::one());
                        if k % 2 == 1 {
                            (harmonic * x).cos()
                        } else {
                            (harmonic * x).sin()
                        }
                    };
                }
            }
        }
    }
}

// ============================================================================
// Augmented Matrix
// ============================================================================

/// Square system with an extra right-hand-side column, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T: Float> AugmentedMatrix<T> {
    /// Zero-filled `size × (size + 1)` system.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            data: vec![T::zero(); size * (size + 1)],
        }
    }

    /// Build from explicit coefficient rows and right-hand side.
    pub fn from_rows(rows: &[Vec<T>], rhs: &[T]) -> Self {
        let size = rhs.len();
        let mut m = Self::zeros(size);
        for (i, row) in rows.iter().enumerate().take(size) {
            for (j, &v) in row.iter().enumerate().take(size) {
                m.set(i, j, v);
            }
            m.set(i, size, rhs[i]);
        }
        m
    }

    /// Number of unknowns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at `(row, col)`; column `size` is the right-hand side.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * (self.size + 1) + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, v: T) {
        let stride = self.size + 1;
        self.data[row * stride + col] = v;
    }

    #[inline]
    fn add(&mut self, row: usize, col: usize, v: T) {
        let stride = self.size + 1;
        let cell = &mut self.data[row * stride + col];
        *cell = *cell + v;
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let stride = self.size + 1;
        for col in 0..stride {
            self.data.swap(a * stride + col, b * stride + col);
        }
    }

    /// Normal equations of `y ≈ Σ c_k·φ_k(x)` with `terms` basis functions.
    pub fn normal_equations(x: &[T], y: &[T], basis: Basis, terms: usize) -> Self {
        let mut m = Self::zeros(terms);
        let mut phi = vec![T::zero(); terms];

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            basis.evaluate(xi, &mut phi);
            for i in 0..terms {
                // Upper triangle only; mirrored below.
                for j in i..terms {
                    m.add(i, j, phi[i] * phi[j]);
                }
                m.add(i, terms, yi * phi[i]);
            }
        }

        for i in 0..terms {
            for j in 0..i {
                let v = m.get(j, i);
                m.set(i, j, v);
            }
        }

        m
    }

    /// Solve by Gaussian elimination with partial pivoting.
    pub fn solve(mut self) -> Result<Vec<T>, TrendError> {
        let n = self.size;
        let eps = T::from(PIVOT_EPSILON).unwrap_or(T::zero());

        for k in 0..n {
            // Pivot search
            let mut pivot_row = k;
            let mut pivot_abs = self.get(k, k).abs();
            for r in (k + 1)..n {
                let candidate = self.get(r, k).abs();
                if candidate > pivot_abs {
                    pivot_abs = candidate;
                    pivot_row = r;
                }
            }

            if pivot_abs.is_nan() || pivot_abs <= eps {
                tracing::warn!(size = n, column = k, "normal equations are singular");
                return Err(TrendError::SingularSystem { size: n });
            }

            self.swap_rows(k, pivot_row);

            // Eliminate below the pivot
            let pivot = self.get(k, k);
            for r in (k + 1)..n {
                let factor = self.get(r, k) / pivot;
                if factor == T::zero() {
                    continue;
                }
                for c in k..=n {
                    let v = self.get(r, c) - factor * self.get(k, c);
                    self.set(r, c, v);
                }
            }
        }

        // Back substitution
        let mut solution = vec![T::zero(); n];
        for k in (0..n).rev() {
            let mut acc = self.get(k, n);
            for (c, &s) in solution.iter().enumerate().skip(k + 1) {
                acc = acc - self.get(k, c) * s;
            }
            solution[k] = acc / self.get(k, k);
        }

        Ok(solution)
    }
}

// ============================================================================
// Least Squares Fit
// ============================================================================

/// Fit `order` of the given basis to the samples.
///
/// Fails when there are fewer than 2 points, when `order` is below 1, when the
/// basis would have more terms than there are points, or when the normal
/// equations are singular.
pub fn fit_basis<T: Float>(
    x: &[T],
    y: &[T],
    basis: Basis,
    order: usize,
) -> Result<Vec<T>, TrendError> {
    if x.len() != y.len() {
        return Err(TrendError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let points = x.len();
    if points < 2 {
        return Err(TrendError::TooFewPoints { got: points, min: 2 });
    }
    let terms = basis.terms(order);
    if order < 1 || terms > points {
        return Err(TrendError::InvalidOrder { order, points });
    }

    AugmentedMatrix::normal_equations(x, y, basis, terms).solve()
}

/// Evaluate `Σ c_k·φ_k(x)` with coefficients in basis order.
pub fn evaluate_basis<T: Float>(basis: Basis, coefficients: &[T], x: T) -> T {
    match basis {
        Basis::Polynomial => coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c),
        Basis::Fourier => {
            let mut phi = vec![T::zero(); coefficients.len()];
            basis.evaluate(x, &mut phi);
            phi.iter()
                .zip(coefficients.iter())
                .fold(T::zero(), |acc, (&p, &c)| acc + p * c)
        }
    }
}

// ============================================================================
// Equations
// ============================================================================

/// `y = cₙxⁿ + … + c₁x + c₀` from highest-degree-first coefficients.
pub fn polynomial_equation<T: Float>(highest_first: &[T], fmt: CoefficientFormat<'_, T>) -> String {
    let degree = highest_first.len().saturating_sub(1);
    let mut eq = EquationBuilder::new("y");
    for (i, &c) in highest_first.iter().enumerate() {
        let power = degree - i;
        let suffix = match power {
            0 => String::new(),
            1 => String::from("x"),
            p => format!("x^{p}"),
        };
        eq = eq.term(&fmt(c), &suffix);
    }
    eq.finish()
}

/// `y = a₀ + a₁cos(x) + b₁sin(x) + a₂cos(2x) + …` from basis-order coefficients.
pub fn fourier_equation<T: Float>(coefficients: &[T], fmt: CoefficientFormat<'_, T>) -> String {
    let mut eq = EquationBuilder::new("y");
    for (k, &c) in coefficients.iter().enumerate() {
        let harmonic = k.div_ceil(2);
        let arg = if harmonic == 1 {
            String::from("x")
        } else {
            format!("{harmonic}x")
        };
        let suffix = match k {
            0 => String::new(),
            k if k % 2 == 1 => format!("cos({arg})"),
            _ => format!("sin({arg})"),
        };
        eq = eq.term(&fmt(c), &suffix);
    }
    eq.finish()
}
