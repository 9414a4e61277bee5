//! Coefficient formatting for equation labels.
//!
//! Coefficients are printed compactly: at most six characters of the plain
//! decimal form, or two-decimal scientific notation when the magnitude is at
//! least `1e5` or below `1e-4`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

/// Width of the truncated decimal form, sign excluded.
const MAX_CHARS: usize = 6;

/// Magnitude at or above which scientific notation is used.
const SCI_UPPER: f64 = 1e5;

/// Magnitude below which scientific notation is used.
const SCI_LOWER: f64 = 1e-4;

/// Injectable coefficient-to-text conversion.
pub type CoefficientFormat<'a, T> = &'a dyn Fn(T) -> String;

/// Default coefficient formatter.
pub fn format_coefficient<T: Float>(coeff: T) -> String {
    let v = coeff.to_f64().unwrap_or(f64::NAN);

    if v == 0.0 {
        return String::from("0");
    }
    if !v.is_finite() {
        return format!("{v}");
    }

    let abs = v.abs();
    if !(SCI_LOWER..SCI_UPPER).contains(&abs) {
        return format!("{v:.2e}");
    }

    let digits = format!("{abs}");
    let mut end = digits.len().min(MAX_CHARS);
    let bytes = digits.as_bytes();
    while end > 1 && bytes[end - 1] == b'.' {
        end -= 1;
    }

    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{}", &digits[..end])
}

/// Builds `y = ...` equation strings term by term.
#[derive(Debug, Clone, Default)]
pub struct EquationBuilder {
    text: String,
    terms: usize,
}

impl EquationBuilder {
    /// Start an equation with the given left-hand side.
    pub fn new(lhs: &str) -> Self {
        Self {
            text: format!("{lhs} ="),
            terms: 0,
        }
    }

    /// Append `coefficient` followed by `suffix` (e.g. `x^2`, `ln(x)`).
    ///
    /// A leading minus sign on a non-first term becomes the joining operator.
    pub fn term(mut self, coefficient: &str, suffix: &str) -> Self {
        let (negative, magnitude) = match coefficient.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, coefficient),
        };

        if self.terms == 0 {
            let sign = if negative { "-" } else { "" };
            self.text.push_str(&format!(" {sign}{magnitude}{suffix}"));
        } else {
            let op = if negative { '-' } else { '+' };
            self.text.push_str(&format!(" {op} {magnitude}{suffix}"));
        }

        self.terms += 1;
        self
    }

    /// Finished equation text.
    pub fn finish(self) -> String {
        self.text
    }
}
