//! # Termstruct Instruments
//!
//! Bond and interest rate swap valuation against a fitted yield curve.
//!
//! Instruments are immutable value objects: schedule generation,
//! discounting, price, duration, and convexity all happen once at
//! construction. A failed construction leaves no partial state behind.
//!
//! ## Example
//!
//! ```rust
//! use termstruct_core::daycounts::DayCountConvention;
//! use termstruct_core::types::{Compounding, Date, Frequency, Region};
//! use termstruct_curves::{CurveParameters, YieldCurve};
//! use termstruct_instruments::Bond;
//!
//! let params = CurveParameters::new(0.045, -0.015, 0.01, 0.005, 2.0, 5.0).unwrap();
//! let curve = YieldCurve::from_parameters(
//!     Region::UnitedStates,
//!     Date::from_ymd(2025, 1, 13).unwrap(),
//!     Compounding::Continuous,
//!     params,
//! );
//!
//! let bond = Bond::new(
//!     1000.0,
//!     0.05,
//!     Frequency::SemiAnnual,
//!     Date::from_ymd(2030, 1, 14).unwrap(),
//!     Date::from_ymd(2025, 1, 13).unwrap(),
//!     DayCountConvention::Act365,
//!     &curve,
//! ).unwrap();
//!
//! assert!(bond.price() > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

mod bond;
mod cashflows;
mod error;
mod schedule;
mod swap;

pub use bond::Bond;
pub use cashflows::ValuationRow;
pub use error::{InstrumentError, InstrumentResult};
pub use schedule::{business_day_adjust, generate_payment_dates, payment_times, validate_schedule};
pub use swap::{InterestRateSwap, LegMeasures};
