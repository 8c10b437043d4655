//! Error types for curve operations.

use termstruct_core::error::CoreError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve fitting and interpolation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Interpolation was attempted on a curve whose fit failed.
    #[error("Curve not fitted: no parameters available for interpolation")]
    NotFitted,

    /// The optimizer did not converge or received degenerate input.
    #[error("Curve fitting failed after {iterations} iterations (residual: {residual:.2e}): {message}")]
    FitFailure {
        /// Number of iterations attempted.
        iterations: usize,
        /// Final root-mean-square residual.
        residual: f64,
        /// Description of the failure.
        message: String,
    },

    /// A requested interpolation time is negative.
    #[error("Invalid time: {time} must be non-negative")]
    InvalidTime {
        /// The rejected time in years.
        time: f64,
    },

    /// Error propagated from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates a fit failure error.
    #[must_use]
    pub fn fit_failure(iterations: usize, residual: f64, message: impl Into<String>) -> Self {
        Self::FitFailure {
            iterations,
            residual,
            message: message.into(),
        }
    }

    /// Creates an invalid time error.
    #[must_use]
    pub fn invalid_time(time: f64) -> Self {
        Self::InvalidTime { time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_failure_display() {
        let err = CurveError::fit_failure(100, 1e-3, "did not converge");
        let msg = err.to_string();
        assert!(msg.contains("100 iterations"));
        assert!(msg.contains("did not converge"));
    }

    #[test]
    fn test_not_fitted_display() {
        assert!(CurveError::NotFitted.to_string().contains("not fitted"));
    }
}
