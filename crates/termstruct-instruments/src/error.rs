//! Error types for instrument construction and valuation.

use termstruct_core::error::CoreError;
use termstruct_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for instrument operations.
pub type InstrumentResult<T> = Result<T, InstrumentError>;

/// Error types for instrument construction.
///
/// Instruments construct atomically: any of these aborts construction and
/// no partially valued instrument escapes to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Contractual terms are inconsistent.
    #[error("Invalid terms: {message}")]
    InvalidTerms {
        /// Description of the inconsistency.
        message: String,
    },

    /// The generated payment schedule is malformed.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// Description of the schedule defect.
        message: String,
    },

    /// Error propagated from curve interpolation.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Error propagated from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl InstrumentError {
    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(message: impl Into<String>) -> Self {
        Self::InvalidTerms {
            message: message.into(),
        }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            message: message.into(),
        }
    }
}
