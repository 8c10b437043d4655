//! Fixed-coupon bond valuation.

use log::debug;
use termstruct_core::calendars::validate_business_day;
use termstruct_core::daycounts::DayCountConvention;
use termstruct_core::types::{CalendarId, Compounding, Currency, Date, Frequency, Region};
use termstruct_curves::{InterpolationKind, YieldCurve};

use crate::cashflows::{self, ValuationRow};
use crate::error::InstrumentResult;
use crate::schedule::{business_day_adjust, generate_payment_dates, payment_times};

/// A fixed-coupon bullet bond valued against a yield curve.
///
/// All derived quantities (schedule, cashflows, discount factors, price,
/// duration, convexity) are computed eagerly at construction; the bond is
/// immutable afterwards. Re-valuation on a new date means constructing a
/// new instance against a curve for that date.
#[derive(Debug, Clone)]
pub struct Bond {
    face_value: f64,
    coupon_rate: f64,
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
    cashflows: Vec<f64>,
    discount_factors: Vec<f64>,
    price: f64,
    duration: f64,
    convexity: f64,
}

impl Bond {
    /// Constructs and values a bond against the given curve.
    ///
    /// The bond inherits the curve's region, compounding, and regional
    /// calendar. Both contract dates must be valid business days under
    /// that calendar.
    ///
    /// # Errors
    ///
    /// `InvalidTerms` if maturity is not after the valuation date,
    /// `CoreError::InvalidDate` (wrapped) if a contract date is not a
    /// business day, or a curve error if the curve is unfitted.
    pub fn new(
        face_value: f64,
        coupon_rate: f64,
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

        let coupon = face_value * coupon_rate / f64::from(frequency.periods_per_year());
        let mut flows = vec![coupon; payment_dates.len()];
        if let Some(last) = flows.last_mut() {
            *last += face_value;
        }

        let discount_factors = curve.interpolate(&times, InterpolationKind::Discount)?;
        let spot_rates = curve.interpolate(&times, InterpolationKind::Spot)?;

        let compounding = curve.compounding();
        let price = cashflows::price(&flows, &discount_factors);
        let duration = cashflows::duration(
            compounding,
            &times,
            &flows,
            &discount_factors,
            &spot_rates,
            price,
        );
        let convexity = cashflows::convexity(
            compounding,
            &times,
            &flows,
            &discount_factors,
            &spot_rates,
            price,
        );

        debug!(
            "Bond(face_value = {face_value}, coupon_rate = {:.2}%, frequency = {frequency}, \
             maturity = {maturity_date}, valuation = {valuation_date}, price = {price:.4})",
            coupon_rate * 100.0
        );

        Ok(Self {
            face_value,
            coupon_rate,
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
            cashflows: flows,
            discount_factors,
            price,
            duration,
            convexity,
        })
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the annual coupon rate.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the coupon frequency.
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

    /// Returns the cashflows; the final one includes redemption.
    #[must_use]
    pub fn cashflows(&self) -> &[f64] {
        &self.cashflows
    }

    /// Returns the discount factors, one per payment.
    #[must_use]
    pub fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    /// Returns the dirty price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the duration.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the convexity.
    #[must_use]
    pub fn convexity(&self) -> f64 {
        self.convexity
    }

    /// Returns the valuation table, omitting zero-cashflow rows.
    #[must_use]
    pub fn valuation_table(&self) -> Vec<ValuationRow> {
        cashflows::valuation_table(
            &self.payment_dates,
            &self.payment_times,
            &self.cashflows,
            &self.discount_factors,
        )
    }
}
