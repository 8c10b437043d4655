//! Integration test: fit a curve to Treasury-style par yield quotes.
//!
//! Market data: US Treasury par yields, January 13, 2025.
//!
//! | Tenor | Yield  |
//! |-------|--------|
//! | 1M    | 4.43%  |
//! | 3M    | 4.37%  |
//! | 6M    | 4.31%  |
//! | 1Y    | 4.26%  |
//! | 2Y    | 4.40%  |
//! | 3Y    | 4.48%  |
//! | 5Y    | 4.60%  |
//! | 7Y    | 4.69%  |
//! | 10Y   | 4.79%  |
//! | 20Y   | 5.05%  |
//! | 30Y   | 4.97%  |

use termstruct_core::types::{Compounding, Currency, Date, Region};
use termstruct_curves::{InterpolationKind, SpotObservation, YieldCurve};

fn market_observations() -> Vec<SpotObservation> {
    [
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
    .collect()
}

#[test]
fn test_fit_treasury_curve() {
    let curve = YieldCurve::fit(
        Region::UnitedStates,
        Date::from_ymd(2025, 1, 13).unwrap(),
        Compounding::Continuous,
        market_observations(),
    );

    assert!(curve.is_fitted());
    assert_eq!(curve.currency(), Currency::Usd);

    // fitted rates should track the quotes closely
    for obs in curve.observations() {
        let fitted = curve.spot_rate(obs.time).unwrap();
        let error_bps = (fitted - obs.rate).abs() * 10_000.0;
        assert!(
            error_bps < 20.0,
            "{}: fitted {:.4}% vs quoted {:.4}% ({error_bps:.1}bp)",
            obs.tenor,
            fitted * 100.0,
            obs.rate * 100.0
        );
    }
}

#[test]
fn test_discount_factors_decay() {
    let curve = YieldCurve::fit(
        Region::UnitedStates,
        Date::from_ymd(2025, 1, 13).unwrap(),
        Compounding::Continuous,
        market_observations(),
    );

    let times = [0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 30.0];
    let dfs = curve.interpolate(&times, InterpolationKind::Discount).unwrap();

    for window in dfs.windows(2) {
        assert!(window[1] < window[0], "discount factors must decay: {dfs:?}");
    }
    assert!(dfs.iter().all(|df| *df > 0.0 && *df < 1.0));
}

#[test]
fn test_forward_rates_are_plausible() {
    let curve = YieldCurve::fit(
        Region::UnitedStates,
        Date::from_ymd(2025, 1, 13).unwrap(),
        Compounding::Continuous,
        market_observations(),
    );

    let forwards = curve
        .interpolate(&[1.0, 2.0, 5.0, 10.0], InterpolationKind::Forward)
        .unwrap();

    // 1y forwards off a ~4.5% curve stay in a sane band
    for f in forwards {
        assert!(f > 0.0 && f < 0.10, "implausible forward rate {f}");
    }
}

#[test]
fn test_extrapolation_beyond_longest_tenor() {
    let curve = YieldCurve::fit(
        Region::UnitedStates,
        Date::from_ymd(2025, 1, 13).unwrap(),
        Compounding::Continuous,
        market_observations(),
    );

    let spots = curve.interpolate(&[40.0, 50.0], InterpolationKind::Spot).unwrap();
    assert!(spots.iter().all(|r| r.is_finite() && *r > 0.0 && *r < 0.10));
}
