//! Day count conventions.
//!
//! Day count conventions convert a calendar date interval into a year
//! fraction for interest accrual.
//!
//! # Supported Conventions
//!
//! ## 30/360 Family (assumes 30-day months, 360-day years)
//!
//! - [`Thirty360`]: plain 30/360, no day adjustment
//! - [`Thirty360U`]: 30U/360 with February month-end pairing rules
//! - [`Thirty360B`]: 30B/360 with start-day clamping
//! - [`Thirty360E`]: 30E/360 with independent 31 -> 30 clamps
//!
//! ## Actual Family (actual calendar days in the numerator)
//!
//! - [`ActActIsda`]: Actual/Actual with per-year basis
//! - [`Act365`], [`Act360`], [`Act364`]: fixed denominators
//!
//! # Usage
//!
//! ```rust
//! use termstruct_core::daycounts::{DayCount, Act365};
//! use termstruct_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//! let yf = Act365.year_fraction(start, end).unwrap();
//! assert!((yf - 181.0 / 365.0).abs() < 1e-12);
//! ```

mod actual;
mod thirty360;

pub use actual::{Act360, Act364, Act365, ActActIsda};
pub use thirty360::{Thirty360, Thirty360B, Thirty360E, Thirty360U};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::{choices, Date};

/// Trait for day count conventions.
///
/// Implementations compute the year fraction between two dates according
/// to a specific market convention.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRange` if `start` is after `end`.
    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64>;
}

/// Checks the `start <= end` requirement shared by all conventions.
pub(crate) fn check_range(start: Date, end: Date) -> CoreResult<()> {
    if start > end {
        return Err(CoreError::invalid_range(start, end));
    }
    Ok(())
}

/// Leap year gate used by the Actual/Actual denominator.
///
/// Divisible-by-4 years pass directly; century years must also be
/// divisible by 400.
pub(crate) fn is_leap_year(year: i32) -> bool {
    if year % 4 == 0 {
        true
    } else if year % 100 == 0 && year % 400 == 0 {
        true
    } else {
        false
    }
}

/// Enumeration of all supported day count conventions.
///
/// Provides runtime selection of a convention and conversion to a boxed
/// trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// 30/360, no day adjustment
    Thirty360,
    /// 30U/360 with February month-end rules
    Thirty360U,
    /// 30B/360 with start-day clamping
    Thirty360B,
    /// 30E/360 with independent clamps
    Thirty360E,
    /// Actual/Actual (ISDA)
    ActActIsda,
    /// Actual/365
    #[default]
    Act365,
    /// Actual/360
    Act360,
    /// Actual/364
    Act364,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Thirty360 => Box::new(Thirty360),
            DayCountConvention::Thirty360U => Box::new(Thirty360U),
            DayCountConvention::Thirty360B => Box::new(Thirty360B),
            DayCountConvention::Thirty360E => Box::new(Thirty360E),
            DayCountConvention::ActActIsda => Box::new(ActActIsda),
            DayCountConvention::Act365 => Box::new(Act365),
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act364 => Box::new(Act364),
        }
    }

    /// Calculates the year fraction under this convention.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRange` if `start` is after `end`.
    pub fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        self.to_day_count().year_fraction(start, end)
    }

    /// Returns the name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Thirty360 => "30/360",
            DayCountConvention::Thirty360U => "30U/360",
            DayCountConvention::Thirty360B => "30B/360",
            DayCountConvention::Thirty360E => "30E/360",
            DayCountConvention::ActActIsda => "Actual/Actual",
            DayCountConvention::Act365 => "Actual/365",
            DayCountConvention::Act360 => "Actual/360",
            DayCountConvention::Act364 => "Actual/364",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Thirty360,
            DayCountConvention::Thirty360U,
            DayCountConvention::Thirty360B,
            DayCountConvention::Thirty360E,
            DayCountConvention::ActActIsda,
            DayCountConvention::Act365,
            DayCountConvention::Act360,
            DayCountConvention::Act364,
        ]
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayCountConvention::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                CoreError::invalid_enum_value("day count convention", s, choices(Self::all()))
            })
    }
}
