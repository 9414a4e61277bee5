//! # trendfit — Trend lines, moving averages and function series for charts
//!
//! Regression and smoothing for chart series: fit a trend line through `(x, y)`
//! samples, smooth a series with a moving average, or sample a function over
//! a parameter range. Every computation returns the derived points as plain
//! sequences for a renderer to draw; the crate knows nothing about drawing.
//!
//! ## Trend Lines
//!
//! Twelve fit types are available:
//!
//! - **Closed form**: `Linear`, `Logarithmic`, `Exponential`, `Power`
//! - **Least squares**: `Polynomial` (order = degree), `Fourier` (order = number of terms)
//! - **Simple lines**: `MinX`, `MinY`, `MaxX`, `MaxY`, `AverageX`, `AverageY`
//!
//! ```rust
//! use trendfit::prelude::*;
//!
//! let x = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
//!
//! let model = TrendLine::<f64>::new()
//!     .fit_type(Linear)
//!     .sample_count(5)
//!     .build()?;
//!
//! let fit = model.fit(&x, &y)?;
//!
//! assert_eq!(fit.equation(), "y = 2x + 0");
//! assert!((fit.approximate(6.0) - 12.0).abs() < 1e-12);
//!
//! // Points for the renderer, as (y, x)
//! let (ys, xs) = fit.calculate_values();
//! assert_eq!(xs.len(), 5);
//! assert_eq!(ys.len(), 5);
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! A second-degree polynomial with a custom coefficient format:
//!
//! ```rust
//! use trendfit::prelude::*;
//!
//! let x = vec![0.0_f64, 1.0, 2.0, 3.0];
//! let y = vec![1.0_f64, 2.0, 5.0, 10.0];
//!
//! let fit = TrendLine::<f64>::new()
//!     .fit_type(Polynomial)
//!     .order(2)
//!     .build()?
//!     .fit(&x, &y)?;
//!
//! // Highest degree first: y = x^2 + 1
//! let c = fit.coefficients();
//! assert!((c[0] - 1.0).abs() < 1e-9);
//! assert!(c[1].abs() < 1e-9);
//! assert!((c[2] - 1.0).abs() < 1e-9);
//!
//! println!("{}", fit.equation_with(&|c: f64| format!("{:.3}", c)));
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! ## Moving Averages
//!
//! ```rust
//! use trendfit::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let y = vec![2.0, 4.0, 6.0, 8.0];
//!
//! let sma = MovingAverage::new()
//!     .kind(AverageKind::Simple)
//!     .period(2)
//!     .build()?;
//!
//! let series = sma.compute(&x, &y)?;
//! assert_eq!(series.x, vec![1.0, 2.0, 3.0]);
//! assert_eq!(series.y, vec![3.0, 5.0, 7.0]);
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! ## Function Series
//!
//! A failing sample becomes NaN instead of aborting the series:
//!
//! ```rust
//! use trendfit::prelude::*;
//!
//! let sampler = FunctionSeries::<f64>::new().range(-1.0, 1.0).sample_count(3).build()?;
//!
//! let series = sampler.sample_y(|x: f64| 1.0 / x);
//! assert_eq!(series.y[0], -1.0);
//! assert!(series.y[1].is_nan());
//! assert_eq!(series.y[2], 1.0);
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, TrendError>`. Errors fall into
//! three categories, reported by [`TrendError::kind`](prelude::TrendError::kind):
//!
//! - **Configuration**: bad parameters or mismatched inputs (caller bug)
//! - **DataDomain**: data outside a model's domain, e.g. `x <= 0` for `Logarithmic`
//! - **Numerical**: the normal equations are singular
//!
//! ```rust
//! use trendfit::prelude::*;
//!
//! let model = TrendLine::<f64>::new().fit_type(Logarithmic).build()?;
//!
//! match model.fit(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]) {
//!     Ok(fit) => println!("{}", fit.equation()),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::DataDomain),
//! }
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! trendfit = { version = "0.3", default-features = false }
//! ```
//!
//! Without `std`, function samples that panic are not caught.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (fits, moving averages, singular systems,
//! NaN substitutions) and never installs a subscriber.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, series sources and SIMD accumulation.
mod primitives;

// Layer 2: Math - statistics, cached sums and coefficient formatting.
mod math;

// Layer 3: Algorithms - regressions, least squares and moving averages.
mod algorithms;

// Layer 4: Evaluation - goodness-of-fit diagnostics.
mod evaluation;

// Layer 5: Engine - validation, dispatch and results.
mod engine;

// Layer 6: Adapters - trend, average and function models.
mod adapters;

// High-level fluent API.
mod api;

// Standard trendfit prelude.
pub mod prelude {
    pub use crate::api::{
        stats, Accumulate, AverageKind, Axis, Calculator, Column, Diagnostics, Dimension,
        ErrorKind, FitType, FunctionSampler, FunctionSeriesBuilder as FunctionSeries,
        IntoSample, MovingAverageBuilder as MovingAverage, MovingAverageModel, RawSeries,
        Sample, SeriesResult, SeriesSource, TrendError, TrendFit,
        TrendLineBuilder as TrendLine, TrendLineModel,
        format_coefficient,
        FitType::AverageX,
        FitType::AverageY,
        FitType::Exponential,
        FitType::Fourier,
        FitType::Linear,
        FitType::Logarithmic,
        FitType::MaxX,
        FitType::MaxY,
        FitType::MinX,
        FitType::MinY,
        FitType::Polynomial,
        FitType::Power,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
