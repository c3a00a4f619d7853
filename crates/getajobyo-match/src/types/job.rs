//! Job posting value type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use getajobyo_core::{Currency, RatePeriod, SalaryRange};

use crate::error::{MatchError, MatchResult};

/// A job posting as consumed by the matching engine.
///
/// Mirrors the posting record from the data layer; the salary is kept as
/// the free text an administrator typed, with `currency` and
/// `rate_period` as separate wire strings. The engine parses and
/// normalizes on demand rather than storing derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Posting identifier.
    pub id: Uuid,
    /// Job title, e.g. "Senior Backend Engineer".
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Location string, e.g. "Berlin, Germany" or "Remote".
    pub location: String,
    /// Full description text.
    pub description: String,
    /// Requirement lines, matched against candidate skills.
    pub requirements: Vec<String>,
    /// Free-text salary range, e.g. "$50k-$70k".
    pub salary_range: String,
    /// Currency code for the salary figures.
    pub currency: String,
    /// Pay frequency for the salary figures.
    pub rate_period: String,
    /// Employment type, e.g. "full-time".
    pub job_type: String,
    /// When the posting went live.
    pub posted_at: DateTime<Utc>,
}

impl JobPosting {
    /// Parses the free-text salary range. Fail-soft; see
    /// [`SalaryRange::parse`].
    #[must_use]
    pub fn parsed_salary(&self) -> SalaryRange {
        SalaryRange::parse(&self.salary_range)
    }

    /// Strict validation for the posting-authoring path.
    ///
    /// Swiped postings are scored fail-soft regardless; this only gates
    /// what administrators save. Checks that the title and company are
    /// non-empty, the currency and rate period are recognized, and the
    /// salary text parses to a well-formed range.
    pub fn validate(&self) -> MatchResult<()> {
        if self.title.trim().is_empty() {
            return Err(MatchError::invalid_posting("title must not be empty"));
        }
        if self.company.trim().is_empty() {
            return Err(MatchError::invalid_posting("company must not be empty"));
        }
        self.currency.parse::<Currency>()?;
        self.rate_period.parse::<RatePeriod>()?;

        let parsed = self.parsed_salary();
        if parsed.is_unspecified() && !self.salary_range.trim().is_empty() {
            return Err(MatchError::invalid_posting(format!(
                "salary range {:?} is not parseable",
                self.salary_range
            )));
        }
        // Re-run the strict constructor so min > max surfaces too.
        SalaryRange::new(parsed.min, parsed.max)?;
        Ok(())
    }
}
