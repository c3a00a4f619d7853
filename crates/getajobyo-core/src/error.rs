//! Error types for the GetAJobYo core crate.
//!
//! These errors only surface on the strict construction and validation
//! paths (`FromStr` impls, `SalaryRange::new`, posting validation). The
//! scoring and conversion kernels are fail-soft by contract and never
//! produce them.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Currency code not in the supported set.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The unrecognized code, as received.
        code: String,
    },

    /// Rate period not one of the supported pay frequencies.
    #[error("Unknown rate period: {period}")]
    UnknownRatePeriod {
        /// The unrecognized period, as received.
        period: String,
    },

    /// Salary range failed strict validation.
    #[error("Invalid salary range: {reason}")]
    InvalidSalaryRange {
        /// Description of what's invalid.
        reason: String,
    },
}

impl CoreError {
    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }

    /// Creates an unknown rate period error.
    #[must_use]
    pub fn unknown_rate_period(period: impl Into<String>) -> Self {
        Self::UnknownRatePeriod {
            period: period.into(),
        }
    }

    /// Creates an invalid salary range error.
    #[must_use]
    pub fn invalid_salary_range(reason: impl Into<String>) -> Self {
        Self::InvalidSalaryRange {
            reason: reason.into(),
        }
    }
}
