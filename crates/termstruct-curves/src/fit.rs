//! Nonlinear least-squares calibration of the curve model.
//!
//! Fits all observations simultaneously with a Levenberg-Marquardt style
//! algorithm: damped normal equations with a numerically differentiated
//! Jacobian, tightening the damping when a step increases the error.

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::error::{CurveError, CurveResult};
use crate::model::{self, CurveParameters};
use crate::observations::SpotObservation;

/// Starting point for the optimizer in `(β₀, β₁, β₂, β₃, λ₀, λ₁)` order:
/// a gently upward-sloping curve with a 3% long-run level.
pub const DEFAULT_INITIAL_GUESS: [f64; 6] = [0.03, -0.02, 0.01, 0.05, 2.0, 5.0];

/// Decay rates are kept away from zero during iteration.
const MIN_LAMBDA_PARAM: f64 = 1e-4;

const PARAM_COUNT: usize = 6;

/// Configuration for the curve fitter.
#[derive(Debug, Clone, Copy)]
pub struct FitterConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Convergence threshold on the RMS residual.
    pub tolerance: f64,
    /// Initial Levenberg-Marquardt damping parameter.
    pub initial_damping: f64,
    /// Damping adjustment factor.
    pub damping_factor: f64,
    /// Minimum damping value.
    pub min_damping: f64,
    /// Maximum damping value.
    pub max_damping: f64,
    /// Finite difference step for the Jacobian.
    pub jacobian_step: f64,
}

impl Default for FitterConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-8,
            initial_damping: 0.001,
            damping_factor: 10.0,
            min_damping: 1e-12,
            max_damping: 1e10,
            jacobian_step: 1e-7,
        }
    }
}

impl FitterConfig {
    /// Creates a new configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Result of a curve calibration.
#[derive(Debug, Clone)]
pub struct FitReport {
    /// The fitted parameter set.
    pub parameters: CurveParameters,
    /// Per-observation residuals (model rate minus observed rate).
    pub residuals: Vec<f64>,
    /// Number of iterations used.
    pub iterations: usize,
    /// Final RMS residual.
    pub rms_error: f64,
    /// Whether the fit converged within tolerance.
    pub converged: bool,
}

impl FitReport {
    /// Returns the maximum absolute residual.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.residuals.iter().map(|r| r.abs()).fold(0.0, f64::max)
    }

    /// Returns the residuals in basis points.
    #[must_use]
    pub fn errors_bps(&self) -> Vec<f64> {
        self.residuals.iter().map(|r| r * 10_000.0).collect()
    }

    /// One-line diagnostic summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fit {}: {} iterations, RMS={:.4}bp, Max={:.4}bp",
            if self.converged { "converged" } else { "FAILED" },
            self.iterations,
            self.rms_error * 10_000.0,
            self.max_error() * 10_000.0
        )
    }
}

/// Fits the curve model to spot-rate observations.
///
/// Degenerate input (fewer observations than parameters, non-finite values,
/// or a singular system that never improves) is an error. Reaching the
/// iteration limit is not: the report is returned with `converged = false`
/// and the caller decides whether to keep the parameters.
///
/// # Errors
///
/// Returns `CurveError::FitFailure` on degenerate input or when the final
/// parameter vector fails validation.
pub fn fit_curve(
    observations: &[SpotObservation],
    initial_guess: &[f64; 6],
    config: &FitterConfig,
) -> CurveResult<FitReport> {
    if observations.len() < PARAM_COUNT {
        return Err(CurveError::fit_failure(
            0,
            f64::NAN,
            format!(
                "need at least {PARAM_COUNT} observations, got {}",
                observations.len()
            ),
        ));
    }
    if observations
        .iter()
        .any(|obs| !obs.time.is_finite() || !obs.rate.is_finite() || obs.time < 0.0)
    {
        return Err(CurveError::fit_failure(
            0,
            f64::NAN,
            "observations contain non-finite or negative values",
        ));
    }

    let times: Vec<f64> = observations.iter().map(|obs| obs.time).collect();
    let rates: Vec<f64> = observations.iter().map(|obs| obs.rate).collect();
    let m = observations.len();

    let mut params = *initial_guess;
    clamp_decay_rates(&mut params);
    let mut damping = config.initial_damping;

    let mut residuals = residual_vector(&params, &times, &rates);
    let mut error = residuals.norm_squared();
    let mut iterations = 0;

    for iteration in 0..config.max_iterations {
        iterations = iteration + 1;

        let rms = (error / m as f64).sqrt();
        if rms < config.tolerance {
            return finish(params, &residuals, iterations, rms, true);
        }

        let jacobian = numerical_jacobian(&params, &times, &rates, config.jacobian_step);
        let jt = jacobian.transpose();
        let jtj = &jt * &jacobian;
        let jtr = &jt * &residuals;

        // Solve (JᵀJ + μI) δ = Jᵀr, retrying with heavier damping when the
        // step does not reduce the error
        let mut stepped = false;
        while damping <= config.max_damping {
            let mut damped = jtj.clone();
            for i in 0..PARAM_COUNT {
                damped[(i, i)] += damping;
            }

            let Some(delta) = damped.lu().solve(&jtr) else {
                damping *= config.damping_factor;
                continue;
            };

            let mut trial = params;
            for i in 0..PARAM_COUNT {
                trial[i] -= delta[i];
            }
            clamp_decay_rates(&mut trial);

            let trial_residuals = residual_vector(&trial, &times, &rates);
            let trial_error = trial_residuals.norm_squared();

            if trial_error.is_finite() && trial_error < error {
                params = trial;
                residuals = trial_residuals;
                error = trial_error;
                damping = (damping / config.damping_factor).max(config.min_damping);
                stepped = true;
                break;
            }
            damping *= config.damping_factor;
        }

        if !stepped {
            // No direction improves the error: either at a minimum or the
            // system is singular
            let rms = (error / m as f64).sqrt();
            debug!("fit stalled at iteration {iterations}, rms {rms:.2e}");
            return finish(params, &residuals, iterations, rms, rms < config.tolerance);
        }
    }

    let rms = (error / m as f64).sqrt();
    finish(params, &residuals, iterations, rms, false)
}

fn finish(
    params: [f64; 6],
    residuals: &DVector<f64>,
    iterations: usize,
    rms: f64,
    converged: bool,
) -> CurveResult<FitReport> {
    let parameters = CurveParameters::from_slice(&params).map_err(|_| {
        CurveError::fit_failure(iterations, rms, "optimizer produced invalid parameters")
    })?;

    Ok(FitReport {
        parameters,
        residuals: residuals.iter().copied().collect(),
        iterations,
        rms_error: rms,
        converged,
    })
}

fn residual_vector(params: &[f64; 6], times: &[f64], rates: &[f64]) -> DVector<f64> {
    DVector::from_iterator(
        times.len(),
        times
            .iter()
            .zip(rates)
            .map(|(&t, &r)| model::evaluate(params, t) - r),
    )
}

/// Central-difference Jacobian of the residual vector.
fn numerical_jacobian(
    params: &[f64; 6],
    times: &[f64],
    rates: &[f64],
    step: f64,
) -> DMatrix<f64> {
    let m = times.len();
    let mut jacobian = DMatrix::zeros(m, PARAM_COUNT);

    for j in 0..PARAM_COUNT {
        let h = step * params[j].abs().max(1.0);

        let mut up = *params;
        up[j] += h;
        let mut down = *params;
        down[j] -= h;

        let r_up = residual_vector(&up, times, rates);
        let r_down = residual_vector(&down, times, rates);

        for i in 0..m {
            jacobian[(i, j)] = (r_up[i] - r_down[i]) / (2.0 * h);
        }
    }

    jacobian
}

fn clamp_decay_rates(params: &mut [f64; 6]) {
    params[4] = params[4].max(MIN_LAMBDA_PARAM);
    params[5] = params[5].max(MIN_LAMBDA_PARAM);
}
