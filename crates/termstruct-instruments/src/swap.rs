//! Vanilla fixed-for-floating interest rate swap valuation.

use log::debug;
use termstruct_core::calendars::validate_business_day;
use termstruct_core::daycounts::DayCountConvention;
use termstruct_core::types::{CalendarId, Compounding, Currency, Date, Frequency, Region};
use termstruct_curves::{InterpolationKind, YieldCurve};

use crate::cashflows::{self, ValuationRow};
use crate::error::InstrumentResult;
use crate::schedule::{business_day_adjust, generate_payment_dates, payment_times};

/// Valuation measures for one leg of a swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegMeasures {
    /// Present value of the leg.
    pub price: f64,
    /// Duration of the leg.
    pub duration: f64,
    /// Convexity of the leg.
    pub convexity: f64,
}

/// A vanilla interest rate swap paying fixed and receiving floating.
///
/// Both legs share one payment schedule and one set of discount factors.
/// Floating cashflows are projected from the curve's 1-year forward rates
/// at each payment time. NPV is quoted from the fixed receiver's side:
/// fixed leg value minus floating leg value.
///
/// Like [`crate::Bond`], the swap is fully valued at construction and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct InterestRateSwap {
    notional: f64,
    fixed_rate: f64,
    frequency: Frequency,
    compounding: Compounding,
    convention: DayCountConvention,
    region: Region,
    currency: Currency,
    calendar: CalendarId,
    valuation_date: Date,
    maturity_date: Date,
    payment_dates: Vec<Date>,
    payment_times: Vec<f64>,
    fixed_cashflows: Vec<f64>,
    floating_cashflows: Vec<f64>,
    discount_factors: Vec<f64>,
    fixed: LegMeasures,
    floating: LegMeasures,
}

impl InterestRateSwap {
    /// Constructs and values a swap against the given curve.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`crate::Bond::new`].
    pub fn new(
        notional: f64,
        fixed_rate: f64,
        frequency: Frequency,
        maturity_date: Date,
        valuation_date: Date,
        convention: DayCountConvention,
        curve: &YieldCurve,
    ) -> InstrumentResult<Self> {
        let calendar_id = curve.calendar();
        let calendar = calendar_id.to_calendar();
        let valuation_date = validate_business_day(valuation_date, calendar.as_ref())?;
        let maturity_date = validate_business_day(maturity_date, calendar.as_ref())?;

        let raw_dates = generate_payment_dates(valuation_date, maturity_date, frequency)?;
        let payment_dates = business_day_adjust(&raw_dates, calendar.as_ref());
        let times = payment_times(&payment_dates, valuation_date, convention)?;

        let discount_factors = curve.interpolate(&times, InterpolationKind::Discount)?;
        let spot_rates = curve.interpolate(&times, InterpolationKind::Spot)?;
        let forward_rates = curve.interpolate(&times, InterpolationKind::Forward)?;

        let k = f64::from(frequency.periods_per_year());
        let fixed_cashflows = vec![notional * fixed_rate / k; payment_dates.len()];
        let floating_cashflows: Vec<f64> =
            forward_rates.iter().map(|f| notional * f / k).collect();

        let compounding = curve.compounding();
        let fixed = Self::leg_measures(
            compounding,
            &times,
            &fixed_cashflows,
            &discount_factors,
            &spot_rates,
        );
        let floating = Self::leg_measures(
            compounding,
            &times,
            &floating_cashflows,
            &discount_factors,
            &spot_rates,
        );

        debug!(
            "InterestRateSwap(notional = {notional}, fixed_rate = {:.2}%, frequency = {frequency}, \
             maturity = {maturity_date}, valuation = {valuation_date}, npv = {:.4})",
            fixed_rate * 100.0,
            fixed.price - floating.price
        );

        Ok(Self {
            notional,
            fixed_rate,
            frequency,
            compounding,
            convention,
            region: curve.region(),
            currency: curve.currency(),
            calendar: calendar_id,
            valuation_date,
            maturity_date,
            payment_dates,
            payment_times: times,
            fixed_cashflows,
            floating_cashflows,
            discount_factors,
            fixed,
            floating,
        })
    }

    fn leg_measures(
        compounding: Compounding,
        times: &[f64],
        flows: &[f64],
        discount_factors: &[f64],
        spot_rates: &[f64],
    ) -> LegMeasures {
        let price = cashflows::price(flows, discount_factors);
        LegMeasures {
            price,
            duration: cashflows::duration(
                compounding,
                times,
                flows,
                discount_factors,
                spot_rates,
                price,
            ),
            convexity: cashflows::convexity(
                compounding,
                times,
                flows,
                discount_factors,
                spot_rates,
                price,
            ),
        }
    }

    /// Returns the notional.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the contractual fixed rate.
    #[must_use]
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Returns the payment frequency shared by both legs.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the discounting compounding convention.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the day-count convention.
    #[must_use]
    pub fn convention(&self) -> DayCountConvention {
        self.convention
    }

    /// Returns the region.
    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the calendar.
    #[must_use]
    pub fn calendar(&self) -> CalendarId {
        self.calendar
    }

    /// Returns the valuation date.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the business-day-adjusted payment dates.
    #[must_use]
    pub fn payment_dates(&self) -> &[Date] {
        &self.payment_dates
    }

    /// Returns the payment times in years from the valuation date.
    #[must_use]
    pub fn payment_times(&self) -> &[f64] {
        &self.payment_times
    }

    /// Returns the fixed leg cashflows.
    #[must_use]
    pub fn fixed_cashflows(&self) -> &[f64] {
        &self.fixed_cashflows
    }

    /// Returns the projected floating leg cashflows.
    #[must_use]
    pub fn floating_cashflows(&self) -> &[f64] {
        &self.floating_cashflows
    }

    /// Returns the discount factors shared by both legs.
    #[must_use]
    pub fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    /// Returns the fixed leg measures.
    #[must_use]
    pub fn fixed_leg(&self) -> LegMeasures {
        self.fixed
    }

    /// Returns the floating leg measures.
    #[must_use]
    pub fn floating_leg(&self) -> LegMeasures {
        self.floating
    }

    /// Net present value: fixed leg price minus floating leg price.
    #[must_use]
    pub fn npv(&self) -> f64 {
        self.fixed.price - self.floating.price
    }

    /// The fixed rate that would value the swap at zero NPV on this
    /// schedule and curve.
    #[must_use]
    pub fn par_rate(&self) -> f64 {
        let annuity: f64 = self.discount_factors.iter().sum();
        let k = f64::from(self.frequency.periods_per_year());
        self.floating.price * k / (self.notional * annuity)
    }

    /// Returns the fixed leg valuation table, omitting zero-cashflow rows.
    #[must_use]
    pub fn fixed_valuation_table(&self) -> Vec<ValuationRow> {
        cashflows::valuation_table(
            &self.payment_dates,
            &self.payment_times,
            &self.fixed_cashflows,
            &self.discount_factors,
        )
    }

    /// Returns the floating leg valuation table, omitting zero-cashflow rows.
    #[must_use]
    pub fn floating_valuation_table(&self) -> Vec<ValuationRow> {
        cashflows::valuation_table(
            &self.payment_dates,
            &self.payment_times,
            &self.floating_cashflows,
            &self.discount_factors,
        )
    }
}
