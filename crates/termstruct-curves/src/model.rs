//! The Nelson-Siegel-Svensson spot-rate model.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Fitted parameters of the 6-parameter Nelson-Siegel-Svensson model.
///
/// The spot rate at time `t` is
///
/// ```text
/// r(t) = β₀ + β₁·g₁(t) + β₂·g₂(t) + β₃·g₃(t)
///
/// g₁(t) = (1 - e^(-t/λ₀)) / (t/λ₀)
/// g₂(t) = g₁(t) - e^(-t/λ₀)
/// g₃(t) = (1 - e^(-t/λ₁)) / (t/λ₁) - e^(-t/λ₁)
/// ```
///
/// β₀ is the long-run level, β₁ the short-end slope, β₂ and β₃ curvature
/// humps with decay rates λ₀ and λ₁. The 0/0 singularity at `t = 0` is a
/// defined boundary case: the loading factors take their limits, so
/// `r(0) = β₀ + β₁`.
///
/// Parameters are produced once by fitting and are immutable; refitting
/// produces a new parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParameters {
    beta0: f64,
    beta1: f64,
    beta2: f64,
    beta3: f64,
    lambda0: f64,
    lambda1: f64,
}

impl CurveParameters {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::FitFailure` if any value is non-finite or a
    /// decay rate is not strictly positive.
    pub fn new(
        beta0: f64,
        beta1: f64,
        beta2: f64,
        beta3: f64,
        lambda0: f64,
        lambda1: f64,
    ) -> CurveResult<Self> {
        let values = [beta0, beta1, beta2, beta3, lambda0, lambda1];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(CurveError::fit_failure(
                0,
                f64::NAN,
                "non-finite parameter value",
            ));
        }
        if lambda0 <= 0.0 || lambda1 <= 0.0 {
            return Err(CurveError::fit_failure(
                0,
                f64::NAN,
                format!("decay rates must be positive, got λ0={lambda0}, λ1={lambda1}"),
            ));
        }

        Ok(Self {
            beta0,
            beta1,
            beta2,
            beta3,
            lambda0,
            lambda1,
        })
    }

    /// Creates a parameter set from a 6-element slice in
    /// `(β₀, β₁, β₂, β₃, λ₀, λ₁)` order.
    ///
    /// # Errors
    ///
    /// Same validation as [`CurveParameters::new`].
    pub fn from_slice(values: &[f64; 6]) -> CurveResult<Self> {
        Self::new(
            values[0], values[1], values[2], values[3], values[4], values[5],
        )
    }

    /// Returns the parameters as `(β₀, β₁, β₂, β₃, λ₀, λ₁)`.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64, f64) {
        (
            self.beta0,
            self.beta1,
            self.beta2,
            self.beta3,
            self.lambda0,
            self.lambda1,
        )
    }

    /// Returns the parameters as an array in slice order.
    #[must_use]
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.beta0,
            self.beta1,
            self.beta2,
            self.beta3,
            self.lambda0,
            self.lambda1,
        ]
    }

    /// Returns the long-run level β₀.
    #[must_use]
    pub fn long_run_level(&self) -> f64 {
        self.beta0
    }

    /// Evaluates the model spot rate at time `t` (years, non-negative).
    ///
    /// Works for any `t >= 0` including times beyond the longest observed
    /// tenor (extrapolation through the parametric form).
    #[must_use]
    pub fn spot(&self, t: f64) -> f64 {
        evaluate(&self.as_array(), t)
    }
}

/// Evaluates the model for a raw parameter vector in slice order.
///
/// Used by the optimizer on trial points that have not been validated yet.
pub(crate) fn evaluate(p: &[f64; 6], t: f64) -> f64 {
    let x0 = t / p[4];
    let x1 = t / p[5];

    p[0] + p[1] * loading_slope(x0) + p[2] * loading_curvature(x0) + p[3] * loading_curvature(x1)
}

/// `(1 - e^(-x)) / x`, with the `x -> 0` limit of 1.
fn loading_slope(x: f64) -> f64 {
    if x.abs() < 1e-10 {
        // Taylor expansion keeps the boundary numerically stable
        1.0 - x / 2.0 + x * x / 6.0
    } else {
        (1.0 - (-x).exp()) / x
    }
}

/// `(1 - e^(-x)) / x - e^(-x)`, with the `x -> 0` limit of 0.
fn loading_curvature(x: f64) -> f64 {
    if x.abs() < 1e-10 {
        x / 2.0 - x * x / 3.0
    } else {
        loading_slope(x) - (-x).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_boundary_value_at_zero() {
        // r(0) = β₀ + β₁: the 0/0 case resolves to the loading limits
        let params = CurveParameters::new(0.045, -0.02, 0.01, 0.005, 2.0, 5.0).unwrap();
        assert_relative_eq!(params.spot(0.0), 0.045 - 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_continuity_approaching_zero() {
        let params = CurveParameters::new(0.03, -0.01, 0.02, -0.005, 1.5, 6.0).unwrap();
        let at_zero = params.spot(0.0);
        for t in [1e-6, 1e-8, 1e-12] {
            assert_relative_eq!(params.spot(t), at_zero, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_long_end_converges_to_beta0() {
        let params = CurveParameters::new(0.045, -0.02, 0.01, 0.005, 2.0, 5.0).unwrap();
        assert_relative_eq!(params.spot(200.0), 0.045, epsilon = 1e-4);
    }

    #[test]
    fn test_extrapolation_beyond_observed_tenors() {
        // the parametric form is defined for any t >= 0, no clamping
        let params = CurveParameters::new(0.045, -0.02, 0.01, 0.005, 2.0, 5.0).unwrap();
        let r40 = params.spot(40.0);
        let r50 = params.spot(50.0);
        assert!(r40.is_finite() && r50.is_finite());
        assert!((r50 - 0.045).abs() < (r40 - 0.045).abs());
    }

    #[test]
    fn test_hump_shape() {
        // positive β₂ puts a hump near λ₀
        let params = CurveParameters::new(0.03, 0.0, 0.02, 0.0, 2.0, 5.0).unwrap();
        let short = params.spot(0.25);
        let mid = params.spot(2.0);
        let long = params.spot(30.0);
        assert!(mid > short);
        assert!(mid > long);
    }

    #[test]
    fn test_degenerate_lambda_rejected() {
        assert!(CurveParameters::new(0.03, -0.02, 0.01, 0.05, 0.0, 5.0).is_err());
        assert!(CurveParameters::new(0.03, -0.02, 0.01, 0.05, 2.0, -1.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(CurveParameters::new(f64::NAN, -0.02, 0.01, 0.05, 2.0, 5.0).is_err());
        assert!(CurveParameters::new(0.03, f64::INFINITY, 0.01, 0.05, 2.0, 5.0).is_err());
    }

    #[test]
    fn test_slice_roundtrip() {
        let params = CurveParameters::new(0.03, -0.02, 0.01, 0.05, 2.0, 5.0).unwrap();
        let rebuilt = CurveParameters::from_slice(&params.as_array()).unwrap();
        assert_eq!(params, rebuilt);
    }

    proptest! {
        // any validated parameter set yields a finite rate everywhere on the
        // domain, the r(0) = β₀ + β₁ boundary, and no jump across the
        // small-x guard in the loading factors
        #[test]
        fn prop_spot_finite_with_stable_boundary(
            beta0 in -0.05f64..0.15,
            beta1 in -0.1f64..0.1,
            beta2 in -0.1f64..0.1,
            beta3 in -0.1f64..0.1,
            lambda0 in 0.05f64..10.0,
            lambda1 in 0.05f64..10.0,
            t in 0.0f64..50.0,
        ) {
            let params =
                CurveParameters::new(beta0, beta1, beta2, beta3, lambda0, lambda1).unwrap();

            prop_assert!(params.spot(t).is_finite());
            prop_assert!((params.spot(0.0) - (beta0 + beta1)).abs() < 1e-12);
            prop_assert!((params.spot(1e-9) - params.spot(0.0)).abs() < 1e-5);
        }
    }
}
