//! Payment frequency and compounding conventions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::region::choices;

/// Payment frequency for coupon and swap schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Weekly payments (52 per year)
    Weekly,
    /// Monthly payments (12 per year)
    Monthly,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Semi-annual payments (2 per year) - most common for bonds
    #[default]
    SemiAnnual,
    /// Annual payments (1 per year)
    Annual,
}

impl Frequency {
    /// Returns the number of payment periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Weekly => 52,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::SemiAnnual => 2,
            Frequency::Annual => 1,
        }
    }

    /// Returns the number of months per period, or `None` for weekly
    /// schedules which step by calendar days.
    #[must_use]
    pub fn months_per_period(&self) -> Option<u32> {
        match self {
            Frequency::Weekly => None,
            Frequency::Monthly => Some(1),
            Frequency::Quarterly => Some(3),
            Frequency::SemiAnnual => Some(6),
            Frequency::Annual => Some(12),
        }
    }

    /// Returns the display name of the frequency.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Annual => "Annual",
        }
    }

    /// Returns all frequencies.
    #[must_use]
    pub fn all() -> &'static [Frequency] {
        &[
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::SemiAnnual,
            Frequency::Annual,
        ]
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::all()
            .iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CoreError::invalid_enum_value("frequency", s, choices(Frequency::all())))
    }
}

/// Interest compounding convention.
///
/// `periods_per_year` is the single shared compounding-to-k table consumed
/// by curve interpolation and instrument analytics alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Continuous compounding
    #[default]
    Continuous,
    /// Weekly compounding (52x per year)
    Weekly,
    /// Bi-weekly compounding (26x per year)
    BiWeekly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Annual compounding (1x per year)
    Annual,
}

impl Compounding {
    /// Returns the number of compounding periods per year, or `None` for
    /// continuous compounding.
    #[must_use]
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Compounding::Continuous => None,
            Compounding::Weekly => Some(52),
            Compounding::BiWeekly => Some(26),
            Compounding::Monthly => Some(12),
            Compounding::Quarterly => Some(4),
            Compounding::SemiAnnual => Some(2),
            Compounding::Annual => Some(1),
        }
    }

    /// Returns true if this is continuous compounding.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        matches!(self, Compounding::Continuous)
    }

    /// Converts a spot rate at time `t` into a discount factor.
    ///
    /// Continuous: `e^(-r t)`. Periodic with k periods per year:
    /// `(1 + r/k)^(-t k)`.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        match self.periods_per_year() {
            None => (-rate * t).exp(),
            Some(k) => {
                let k = f64::from(k);
                (1.0 + rate / k).powf(-t * k)
            }
        }
    }

    /// Computes the forward rate implied between `(time_a, rate_a)` and
    /// `(time_b, rate_b)` on the spot curve.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRange` if `time_a >= time_b`.
    pub fn forward_rate(
        &self,
        time_a: f64,
        rate_a: f64,
        time_b: f64,
        rate_b: f64,
    ) -> CoreResult<f64> {
        if time_a >= time_b {
            return Err(CoreError::invalid_range(time_a, time_b));
        }

        match self.periods_per_year() {
            None => Ok((rate_b * time_b - rate_a * time_a) / (time_b - time_a)),
            Some(k) => {
                let k = f64::from(k);
                let growth = (1.0 + rate_b / k).powf(time_b) / (1.0 + rate_a / k).powf(time_a);
                Ok(k * growth.powf(1.0 / (time_b - time_a)) - k)
            }
        }
    }

    /// Returns the display name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Compounding::Continuous => "Continuous",
            Compounding::Weekly => "Weekly",
            Compounding::BiWeekly => "Bi-Weekly",
            Compounding::Monthly => "Monthly",
            Compounding::Quarterly => "Quarterly",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Annual => "Annual",
        }
    }

    /// Returns all compounding conventions.
    #[must_use]
    pub fn all() -> &'static [Compounding] {
        &[
            Compounding::Continuous,
            Compounding::Weekly,
            Compounding::BiWeekly,
            Compounding::Monthly,
            Compounding::Quarterly,
            Compounding::SemiAnnual,
            Compounding::Annual,
        ]
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Compounding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Compounding::all()
            .iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                CoreError::invalid_enum_value("compounding", s, choices(Compounding::all()))
            })
    }
}
