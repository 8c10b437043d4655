//! The fitted yield curve and its interpolation surface.

use std::fmt;
use std::str::FromStr;

use log::warn;
use termstruct_core::error::CoreError;
use termstruct_core::types::{CalendarId, Compounding, Currency, Date, Region};

use crate::error::{CurveError, CurveResult};
use crate::fit::{fit_curve, FitterConfig, DEFAULT_INITIAL_GUESS};
use crate::model::CurveParameters;
use crate::observations::{filter_quotes, SpotObservation};

/// The quantity produced by curve interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationKind {
    /// Continuously defined spot rate from the parametric model.
    Spot,
    /// Discount factor under the curve's compounding convention.
    Discount,
    /// 1-year forward rate starting at the requested time.
    Forward,
}

impl InterpolationKind {
    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Spot => "Spot Rate",
            Self::Discount => "Discount Factor",
            Self::Forward => "Forward Rate",
        }
    }

    /// Returns all interpolation kinds.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Spot, Self::Discount, Self::Forward]
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for InterpolationKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                let choices = Self::all()
                    .iter()
                    .map(Self::name)
                    .collect::<Vec<_>>()
                    .join(", ");
                CoreError::invalid_enum_value("interpolation kind", s, choices)
            })
    }
}

/// A Nelson-Siegel-Svensson yield curve for one region and valuation date.
///
/// Construction fits the model to the supplied observations. A failed fit
/// is not fatal: the curve is still constructed, carries its observations,
/// and reports [`YieldCurve::is_fitted`] as `false`; interpolation then
/// returns [`CurveError::NotFitted`].
///
/// The curve's currency and calendar are the regional defaults.
#[derive(Debug, Clone)]
pub struct YieldCurve {
    region: Region,
    currency: Currency,
    calendar: CalendarId,
    valuation_date: Date,
    compounding: Compounding,
    observations: Vec<SpotObservation>,
    parameters: Option<CurveParameters>,
}

impl YieldCurve {
    /// Fits a curve to the given observations with default settings.
    ///
    /// Observations with absent rates or invalid times are dropped before
    /// fitting. On fit failure a warning is logged and the curve is
    /// returned unfitted.
    #[must_use]
    pub fn fit(
        region: Region,
        valuation_date: Date,
        compounding: Compounding,
        observations: Vec<SpotObservation>,
    ) -> Self {
        Self::fit_with(
            region,
            valuation_date,
            compounding,
            observations,
            &DEFAULT_INITIAL_GUESS,
            &FitterConfig::default(),
        )
    }

    /// Fits a curve with an explicit initial guess and fitter configuration.
    #[must_use]
    pub fn fit_with(
        region: Region,
        valuation_date: Date,
        compounding: Compounding,
        observations: Vec<SpotObservation>,
        initial_guess: &[f64; 6],
        config: &FitterConfig,
    ) -> Self {
        let observations = filter_quotes(observations);

        let parameters = match fit_curve(&observations, initial_guess, config) {
            Ok(report) if report.converged => Some(report.parameters),
            Ok(report) => {
                warn!(
                    "{} curve fit for {valuation_date} did not converge: {}",
                    region.name(),
                    report.summary()
                );
                None
            }
            Err(err) => {
                warn!(
                    "{} curve fit for {valuation_date} failed: {err}",
                    region.name()
                );
                None
            }
        };

        Self::build(region, valuation_date, compounding, observations, parameters)
    }

    /// Creates a curve directly from known parameters, skipping the fit.
    #[must_use]
    pub fn from_parameters(
        region: Region,
        valuation_date: Date,
        compounding: Compounding,
        parameters: CurveParameters,
    ) -> Self {
        Self::build(region, valuation_date, compounding, Vec::new(), Some(parameters))
    }

    fn build(
        region: Region,
        valuation_date: Date,
        compounding: Compounding,
        observations: Vec<SpotObservation>,
        parameters: Option<CurveParameters>,
    ) -> Self {
        Self {
            region,
            currency: region.default_currency(),
            calendar: region.default_calendar(),
            valuation_date,
            compounding,
            observations,
            parameters,
        }
    }

    /// Returns the curve's region.
    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns the curve's currency (regional default).
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the curve's calendar (regional default).
    #[must_use]
    pub fn calendar(&self) -> CalendarId {
        self.calendar
    }

    /// Returns the valuation date.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns the compounding convention used for discounting.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the observations the curve was fitted to.
    #[must_use]
    pub fn observations(&self) -> &[SpotObservation] {
        &self.observations
    }

    /// Returns the fitted parameters, if the fit succeeded.
    #[must_use]
    pub fn parameters(&self) -> Option<&CurveParameters> {
        self.parameters.as_ref()
    }

    /// Returns `true` if the curve carries fitted parameters.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.parameters.is_some()
    }

    fn fitted(&self) -> CurveResult<&CurveParameters> {
        self.parameters.as_ref().ok_or(CurveError::NotFitted)
    }

    fn check_time(t: f64) -> CurveResult<f64> {
        if t.is_finite() && t >= 0.0 {
            Ok(t)
        } else {
            Err(CurveError::invalid_time(t))
        }
    }

    /// Returns the spot rate at time `t` in years.
    ///
    /// # Errors
    ///
    /// `NotFitted` if the fit failed, `InvalidTime` for negative `t`.
    pub fn spot_rate(&self, t: f64) -> CurveResult<f64> {
        let params = self.fitted()?;
        Ok(params.spot(Self::check_time(t)?))
    }

    /// Returns the discount factor at time `t` under the curve's
    /// compounding convention.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        let rate = self.spot_rate(t)?;
        Ok(self.compounding.discount_factor(rate, t))
    }

    /// Returns the 1-year forward rate for the period `[t, t + 1]`.
    pub fn forward_rate(&self, t: f64) -> CurveResult<f64> {
        let near = self.spot_rate(t)?;
        let far = self.spot_rate(t + 1.0)?;
        Ok(self.compounding.forward_rate(t, near, t + 1.0, far)?)
    }

    /// Interpolates the requested quantity at each time.
    ///
    /// Times may lie beyond the longest observed tenor; the parametric
    /// model extrapolates. The output order matches the input order.
    ///
    /// # Errors
    ///
    /// `NotFitted` if the fit failed, `InvalidTime` for any negative or
    /// non-finite time.
    pub fn interpolate(&self, times: &[f64], kind: InterpolationKind) -> CurveResult<Vec<f64>> {
        times
            .iter()
            .map(|&t| match kind {
                InterpolationKind::Spot => self.spot_rate(t),
                InterpolationKind::Discount => self.discount_factor(t),
                InterpolationKind::Forward => self.forward_rate(t),
            })
            .collect()
    }
}
