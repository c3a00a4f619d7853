//! Error types for the recommendation engine.

use getajobyo_core::CoreError;
use thiserror::Error;

use crate::types::ApplicationStatus;

/// A specialized Result type for match operations.
pub type MatchResult<T> = Result<T, MatchError>;

/// The main error type for the recommendation engine's strict surfaces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// An application status change that the lifecycle does not allow.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// Current status.
        from: ApplicationStatus,
        /// Requested status.
        to: ApplicationStatus,
    },

    /// A job posting failed validation.
    #[error("Invalid job posting: {reason}")]
    InvalidPosting {
        /// Description of what's invalid.
        reason: String,
    },

    /// Error from the core value types.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl MatchError {
    /// Creates an invalid posting error.
    #[must_use]
    pub fn invalid_posting(reason: impl Into<String>) -> Self {
        Self::InvalidPosting {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_error_display() {
        let err = MatchError::InvalidStatusTransition {
            from: ApplicationStatus::Accepted,
            to: ApplicationStatus::Pending,
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition: accepted -> pending"
        );
    }

    #[test]
    fn test_core_error_wraps() {
        let core = CoreError::invalid_salary_range("min exceeds max");
        let err: MatchError = core.into();
        assert!(err.to_string().contains("min exceeds max"));
    }
}
