//! Valuation tables and price sensitivity measures.

use serde::{Deserialize, Serialize};
use termstruct_core::types::{Compounding, Date};

/// One row of an instrument's valuation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRow {
    /// Adjusted payment date.
    pub date: Date,
    /// Year fraction from the valuation date.
    pub time: f64,
    /// Cash amount paid on the date.
    pub cashflow: f64,
    /// Discount factor at the payment time.
    pub discount_factor: f64,
    /// `cashflow * discount_factor`.
    pub present_value: f64,
}

/// Builds a valuation table, dropping rows with a zero cashflow.
///
/// All input slices must be the same length.
#[must_use]
pub(crate) fn valuation_table(
    dates: &[Date],
    times: &[f64],
    cashflows: &[f64],
    discount_factors: &[f64],
) -> Vec<ValuationRow> {
    dates
        .iter()
        .zip(times)
        .zip(cashflows)
        .zip(discount_factors)
        .filter(|(((_, _), &cf), _)| cf != 0.0)
        .map(|(((&date, &time), &cashflow), &discount_factor)| ValuationRow {
            date,
            time,
            cashflow,
            discount_factor,
            present_value: cashflow * discount_factor,
        })
        .collect()
}

/// Present value of the cashflow strip.
#[must_use]
pub(crate) fn price(cashflows: &[f64], discount_factors: &[f64]) -> f64 {
    cashflows
        .iter()
        .zip(discount_factors)
        .map(|(cf, df)| cf * df)
        .sum()
}

/// Duration of the cashflow strip.
///
/// Under continuous compounding this is the PV-weighted mean payment time,
/// reusing the discount factors already computed for pricing. Under
/// periodic compounding with `k` periods per year each payment contributes
/// `(-t/k)·cf·(1 + r/k)^(-t-1)`, where `r` is the spot rate at `t`.
#[must_use]
pub(crate) fn duration(
    compounding: Compounding,
    times: &[f64],
    cashflows: &[f64],
    discount_factors: &[f64],
    spot_rates: &[f64],
    price: f64,
) -> f64 {
    match compounding.periods_per_year() {
        None => times
            .iter()
            .zip(cashflows)
            .zip(discount_factors)
            .map(|((t, cf), df)| t * cf * df / price)
            .sum(),
        Some(k) => {
            let k = f64::from(k);
            times
                .iter()
                .zip(cashflows)
                .zip(spot_rates)
                .map(|((t, cf), r)| (-t / k) * cf * (1.0 + r / k).powf(-t - 1.0) / price)
                .sum()
        }
    }
}

/// Convexity of the cashflow strip.
#[must_use]
pub(crate) fn convexity(
    compounding: Compounding,
    times: &[f64],
    cashflows: &[f64],
    discount_factors: &[f64],
    spot_rates: &[f64],
    price: f64,
) -> f64 {
    match compounding.periods_per_year() {
        None => times
            .iter()
            .zip(cashflows)
            .zip(discount_factors)
            .map(|((t, cf), df)| t * t * cf * df / price)
            .sum(),
        Some(k) => {
            let k = f64::from(k);
            times
                .iter()
                .zip(cashflows)
                .zip(spot_rates)
                .map(|((t, cf), r)| {
                    t * (t + 1.0) / (k * k) * cf * (1.0 + r / k).powf(-t - 2.0) / price
                })
                .sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_cashflow_rows_dropped() {
        let table = valuation_table(
            &[date(2025, 6, 13), date(2025, 12, 15)],
            &[0.5, 1.0],
            &[0.0, 102.5],
            &[0.98, 0.96],
        );

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].date, date(2025, 12, 15));
        assert_relative_eq!(table[0].present_value, 102.5 * 0.96);
    }

    #[test]
    fn test_single_cashflow_continuous_duration_is_its_time() {
        let times = [5.0];
        let cashflows = [100.0];
        let dfs = [(-0.04f64 * 5.0).exp()];
        let rates = [0.04];
        let p = price(&cashflows, &dfs);

        let d = duration(Compounding::Continuous, &times, &cashflows, &dfs, &rates, p);
        assert_relative_eq!(d, 5.0, epsilon = 1e-12);

        let c = convexity(Compounding::Continuous, &times, &cashflows, &dfs, &rates, p);
        assert_relative_eq!(c, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_periodic_duration_single_cashflow() {
        // one payment at t=2, r=4% semi-annual: (-2/2)·cf·(1.02)^(-3) / price
        let times = [2.0];
        let cashflows = [100.0];
        let rates = [0.04];
        let dfs = [(1.0f64 + 0.04 / 2.0).powf(-4.0)];
        let p = price(&cashflows, &dfs);

        let d = duration(Compounding::SemiAnnual, &times, &cashflows, &dfs, &rates, p);
        let expected = -1.0 * 100.0 * 1.02f64.powf(-3.0) / p;
        assert_relative_eq!(d, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_valuation_row_serializes() {
        let row = ValuationRow {
            date: date(2025, 12, 15),
            time: 0.92,
            cashflow: 25.0,
            discount_factor: 0.96,
            present_value: 24.0,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"date\":\"2025-12-15\""));
        assert!(json.contains("\"cashflow\":25.0"));
    }

    #[test]
    fn test_continuous_duration_between_first_and_last_payment() {
        let times = [1.0, 2.0, 3.0];
        let cashflows = [5.0, 5.0, 105.0];
        let dfs: Vec<f64> = times.iter().map(|t: &f64| (-0.03 * t).exp()).collect();
        let rates = [0.03; 3];
        let p = price(&cashflows, &dfs);

        let d = duration(Compounding::Continuous, &times, &cashflows, &dfs, &rates, p);
        assert!(d > 1.0 && d < 3.0);
    }
}
