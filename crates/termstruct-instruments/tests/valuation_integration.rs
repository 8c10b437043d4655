//! Integration tests: price instruments off a curve fitted to market data.

use approx::assert_relative_eq;
use termstruct_core::daycounts::DayCountConvention;
use termstruct_core::types::{Compounding, Date, Frequency, Region};
use termstruct_curves::{CurveParameters, SpotObservation, YieldCurve};
use termstruct_instruments::{Bond, InterestRateSwap};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// US Treasury par yields, January 13, 2025.
fn fitted_treasury_curve(compounding: Compounding) -> YieldCurve {
    let observations = [
        ("1m", 1.0 / 12.0, 0.0443),
        ("3m", 0.25, 0.0437),
        ("6m", 0.5, 0.0431),
        ("1y", 1.0, 0.0426),
        ("2y", 2.0, 0.0440),
        ("3y", 3.0, 0.0448),
        ("5y", 5.0, 0.0460),
        ("7y", 7.0, 0.0469),
        ("10y", 10.0, 0.0479),
        ("20y", 20.0, 0.0505),
        ("30y", 30.0, 0.0497),
    ]
    .iter()
    .map(|&(tenor, time, rate)| SpotObservation::new(tenor, time, rate))
    .collect();

    let curve = YieldCurve::fit(
        Region::UnitedStates,
        date(2025, 1, 13),
        compounding,
        observations,
    );
    assert!(curve.is_fitted());
    curve
}

#[test]
fn test_treasury_bond_valuation() {
    let curve = fitted_treasury_curve(Compounding::Continuous);
    let bond = Bond::new(
        1000.0,
        0.045,
        Frequency::SemiAnnual,
        date(2030, 1, 14),
        date(2025, 1, 13),
        DayCountConvention::Act365,
        &curve,
    )
    .unwrap();

    // coupon near the curve level keeps the price near par
    assert!(bond.price() > 900.0 && bond.price() < 1100.0);
    // duration of a 5y coupon bond sits between 4 and 5 years
    assert!(bond.duration() > 4.0 && bond.duration() < 5.0);
    assert!(bond.convexity() > 0.0);

    let table = bond.valuation_table();
    assert_eq!(table.len(), bond.payment_dates().len());
    let table_price: f64 = table.iter().map(|row| row.present_value).sum();
    assert_relative_eq!(table_price, bond.price(), epsilon = 1e-9);
}

#[test]
fn test_par_bond_identity() {
    // flat 5% semi-annual curve, 5% semi-annual coupon: price ≈ par. Dates
    // rolled off weekends perturb the payment times slightly, so ≈ not =.
    let params = CurveParameters::new(0.05, 0.0, 0.0, 0.0, 2.0, 5.0).unwrap();
    let curve = YieldCurve::from_parameters(
        Region::UnitedStates,
        date(2025, 1, 13),
        Compounding::SemiAnnual,
        params,
    );

    let bond = Bond::new(
        1000.0,
        0.05,
        Frequency::SemiAnnual,
        date(2027, 1, 13),
        date(2025, 1, 13),
        DayCountConvention::Thirty360,
        &curve,
    )
    .unwrap();

    assert_relative_eq!(bond.price(), 1000.0, epsilon = 1.0);
}

#[test]
fn test_zero_coupon_round_trip() {
    let rate = 0.045;
    let params = CurveParameters::new(rate, 0.0, 0.0, 0.0, 2.0, 5.0).unwrap();
    let curve = YieldCurve::from_parameters(
        Region::UnitedStates,
        date(2025, 1, 13),
        Compounding::Continuous,
        params,
    );

    let bond = Bond::new(
        1000.0,
        0.0,
        Frequency::Annual,
        date(2035, 1, 15),
        date(2025, 1, 13),
        DayCountConvention::Act365,
        &curve,
    )
    .unwrap();

    let maturity_time = *bond.payment_times().last().unwrap();
    assert_relative_eq!(
        bond.price(),
        1000.0 * (-rate * maturity_time).exp(),
        epsilon = 1e-9
    );
}

#[test]
fn test_par_swap_identity() {
    let curve = fitted_treasury_curve(Compounding::Continuous);

    let seed = InterestRateSwap::new(
        1_000_000.0,
        0.045,
        Frequency::Quarterly,
        date(2030, 1, 14),
        date(2025, 1, 13),
        DayCountConvention::Act360,
        &curve,
    )
    .unwrap();

    let par = InterestRateSwap::new(
        1_000_000.0,
        seed.par_rate(),
        Frequency::Quarterly,
        date(2030, 1, 14),
        date(2025, 1, 13),
        DayCountConvention::Act360,
        &curve,
    )
    .unwrap();

    assert_relative_eq!(par.npv(), 0.0, epsilon = 1e-4);
    assert_relative_eq!(par.fixed_leg().price, par.floating_leg().price, epsilon = 1e-4);
}

#[test]
fn test_swap_tables_share_dates_and_discounting() {
    let curve = fitted_treasury_curve(Compounding::Continuous);
    let swap = InterestRateSwap::new(
        500_000.0,
        0.046,
        Frequency::SemiAnnual,
        date(2028, 1, 14),
        date(2025, 1, 13),
        DayCountConvention::Act365,
        &curve,
    )
    .unwrap();

    let fixed = swap.fixed_valuation_table();
    let floating = swap.floating_valuation_table();
    assert_eq!(fixed.len(), floating.len());
    for (f, fl) in fixed.iter().zip(&floating) {
        assert_eq!(f.date, fl.date);
        assert_relative_eq!(f.discount_factor, fl.discount_factor);
    }
}
