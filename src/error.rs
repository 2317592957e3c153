//! Error types for FinMaths.
//!
//! Every fallible operation in the crate returns [`FinMathsResult`]. Errors are raised at the
//! call that detects them and are never caught or retried internally.

use polars::prelude::PolarsError;
use thiserror::Error;

/// The main error type for FinMaths operations.
#[derive(Debug, Error)]
pub enum FinMathsError {
    /// Malformed construction input: negative or non-numeric rate, non-positive nominal period,
    /// negative term, or a rate that normalizes to a non-finite value.
    #[error("Validation failed: {0}")]
    Validation(#[from] garde::Report),

    /// Unrecognized payment mode or a conversion target the rate cannot produce.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The deferral rate cannot discount over the requested deferral period.
    #[error("Invalid deferral rate: discount factor over {period} periods is {factor}")]
    InvalidDifferRate {
        /// Deferral period requested.
        period: f64,
        /// Discount factor the deferral rate produced.
        factor: f64,
    },

    /// A formula was evaluated outside of its domain.
    #[error("Domain error in {operation}: {detail}")]
    Domain {
        /// Operation that was being evaluated.
        operation: &'static str,
        /// What went wrong.
        detail: String,
    },

    /// Schedule tabulation failed.
    #[error(transparent)]
    Tabulation(#[from] PolarsError),
}

impl FinMathsError {
    /// Build a single-entry validation report for `path`.
    pub(crate) fn invalid(path: &'static str, message: impl Into<String>) -> Self {
        let message: String = message.into();
        let mut report = garde::Report::new();
        report.append(garde::Path::new(path), garde::Error::new(message));
        FinMathsError::Validation(report)
    }

    pub(crate) fn domain(operation: &'static str, detail: impl Into<String>) -> Self {
        FinMathsError::Domain {
            operation,
            detail: detail.into(),
        }
    }
}

/// A specialized Result type for FinMaths operations.
pub type FinMathsResult<T> = Result<T, FinMathsError>;
