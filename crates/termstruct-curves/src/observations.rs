//! Spot-rate observations used as fitting input.
//!
//! Observations arrive from an external market-data collaborator as
//! (tenor label, time-in-years, rate) triples. The core only filters and
//! fits; it performs no retrieval.

use serde::{Deserialize, Serialize};

/// A single market spot-rate observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotObservation {
    /// Market tenor label, e.g. "3m" or "10y".
    pub tenor: String,
    /// Time to maturity in years (non-negative).
    pub time: f64,
    /// Observed spot rate as a decimal (0.045 for 4.5%).
    pub rate: f64,
}

impl SpotObservation {
    /// Creates a new observation.
    #[must_use]
    pub fn new(tenor: impl Into<String>, time: f64, rate: f64) -> Self {
        Self {
            tenor: tenor.into(),
            time,
            rate,
        }
    }
}

/// Maps a standard tenor label to its time in years.
///
/// Returns `None` for labels outside the quoted set.
#[must_use]
pub fn tenor_time(tenor: &str) -> Option<f64> {
    match tenor {
        "1m" => Some(1.0 / 12.0),
        "2m" => Some(1.0 / 6.0),
        "3m" => Some(0.25),
        "6m" => Some(0.5),
        "1y" => Some(1.0),
        "2y" => Some(2.0),
        "3y" => Some(3.0),
        "5y" => Some(5.0),
        "10y" => Some(10.0),
        "20y" => Some(20.0),
        "30y" => Some(30.0),
        _ => None,
    }
}

/// Drops observations whose rate is absent (NaN) or whose time is not a
/// finite non-negative number. Order of the survivors is preserved.
#[must_use]
pub fn filter_quotes(observations: Vec<SpotObservation>) -> Vec<SpotObservation> {
    observations
        .into_iter()
        .filter(|obs| obs.rate.is_finite() && obs.time.is_finite() && obs.time >= 0.0)
        .collect()
}
