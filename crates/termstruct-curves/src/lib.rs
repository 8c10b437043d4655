//! # Termstruct Curves
//!
//! Parametric yield curve fitting and interpolation.
//!
//! A [`YieldCurve`] fits the 6-parameter Nelson-Siegel-Svensson model to
//! discrete spot-rate observations via Levenberg-Marquardt least squares,
//! then exposes continuous spot, discount factor, and 1-year forward
//! interpolation at arbitrary non-negative times.
//!
//! ## Example
//!
//! ```rust
//! use termstruct_core::types::{Compounding, Date, Region};
//! use termstruct_curves::{CurveParameters, InterpolationKind, YieldCurve};
//!
//! let params = CurveParameters::new(0.045, -0.015, 0.01, 0.005, 2.0, 5.0).unwrap();
//! let curve = YieldCurve::from_parameters(
//!     Region::UnitedStates,
//!     Date::from_ymd(2025, 1, 13).unwrap(),
//!     Compounding::Continuous,
//!     params,
//! );
//!
//! let dfs = curve.interpolate(&[1.0, 5.0, 10.0], InterpolationKind::Discount).unwrap();
//! assert!(dfs.iter().all(|df| *df > 0.0 && *df < 1.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

mod curve;
mod error;
mod fit;
mod model;
mod observations;

pub use curve::{InterpolationKind, YieldCurve};
pub use error::{CurveError, CurveResult};
pub use fit::{fit_curve, FitReport, FitterConfig, DEFAULT_INITIAL_GUESS};
pub use model::CurveParameters;
pub use observations::{filter_quotes, tenor_time, SpotObservation};
