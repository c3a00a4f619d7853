//! Application record and its status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{MatchError, MatchResult};

/// Lifecycle status of a submitted application.
///
/// The lifecycle is linear and forward-only: `Pending` →
/// `Interviewing` → `Accepted`/`Rejected`, with `Rejected` also reachable
/// directly from `Pending`. Terminal states are frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, awaiting review.
    #[default]
    Pending,
    /// In the interview stage.
    Interviewing,
    /// Offer extended and accepted.
    Accepted,
    /// Turned down.
    Rejected,
}

impl ApplicationStatus {
    /// Returns the lowercase wire form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Interviewing => "interviewing",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Returns true for `Accepted` and `Rejected`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Accepted | ApplicationStatus::Rejected)
    }

    /// Returns true if the lifecycle allows moving to `to` from here.
    ///
    /// Self-transitions are not moves and return false.
    #[must_use]
    pub fn can_transition_to(&self, to: ApplicationStatus) -> bool {
        use ApplicationStatus::{Accepted, Interviewing, Pending, Rejected};
        matches!(
            (*self, to),
            (Pending, Interviewing | Accepted | Rejected) | (Interviewing, Accepted | Rejected)
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate's application to a posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Application identifier.
    pub id: Uuid,
    /// The posting applied to.
    pub job_id: Uuid,
    /// Current lifecycle status.
    pub status: ApplicationStatus,
    /// Submission time.
    pub applied_at: DateTime<Utc>,
}

impl Application {
    /// Creates a fresh pending application for a posting.
    #[must_use]
    pub fn new(job_id: Uuid, applied_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id,
            status: ApplicationStatus::Pending,
            applied_at,
        }
    }

    /// Moves the application to a new status, enforcing the lifecycle.
    pub fn advance(&mut self, to: ApplicationStatus) -> MatchResult<()> {
        if !self.status.can_transition_to(to) {
            return Err(MatchError::InvalidStatusTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Application {
        Application::new(Uuid::new_v4(), Utc::now())
    }

    #[test]
    fn test_new_is_pending() {
        assert_eq!(app().status, ApplicationStatus::Pending);
    }

    #[test]
    fn test_full_path() {
        let mut a = app();
        a.advance(ApplicationStatus::Interviewing).unwrap();
        a.advance(ApplicationStatus::Accepted).unwrap();
        assert!(a.status.is_terminal());
    }

    #[test]
    fn test_direct_rejection() {
        let mut a = app();
        a.advance(ApplicationStatus::Rejected).unwrap();
        assert_eq!(a.status, ApplicationStatus::Rejected);
    }

    #[test]
    fn test_terminal_states_are_frozen() {
        let mut a = app();
        a.advance(ApplicationStatus::Accepted).unwrap();
        let err = a.advance(ApplicationStatus::Pending).unwrap_err();
        assert!(matches!(err, MatchError::InvalidStatusTransition { .. }));
        assert_eq!(a.status, ApplicationStatus::Accepted);
    }

    #[test]
    fn test_no_backwards_moves() {
        let mut a = app();
        a.advance(ApplicationStatus::Interviewing).unwrap();
        assert!(a.advance(ApplicationStatus::Pending).is_err());
    }

    #[test]
    fn test_self_transition_refused() {
        let mut a = app();
        assert!(a.advance(ApplicationStatus::Pending).is_err());
    }

    #[test]
    fn test_wire_forms() {
        assert_eq!(ApplicationStatus::Interviewing.as_str(), "interviewing");
        let json = serde_json::to_string(&ApplicationStatus::Accepted).unwrap();
        assert_eq!(json, "\"accepted\"");
    }
}
