//! Candidate profile value type.

use serde::{Deserialize, Serialize};

/// A candidate's profile as consumed by the matching engine.
///
/// Everything is optional; scoring treats missing fields as contributing
/// nothing rather than failing. `salary_expectation` of 0 means no stated
/// preference and the salary scorer returns a full match for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CandidateProfile {
    /// Professional title, e.g. "Data Engineer".
    pub title: Option<String>,
    /// Short bio.
    pub bio: Option<String>,
    /// Skill names, matched against posting requirement lines.
    pub skills: Vec<String>,
    /// Years of professional experience.
    pub experience_years: Option<u32>,
    /// Highest education, free text.
    pub education: Option<String>,
    /// Current location.
    pub location: Option<String>,
    /// Locations the candidate wants to work in.
    pub preferred_locations: Vec<String>,
    /// Yearly salary expectation in `preferred_currency`; 0 = unstated.
    pub salary_expectation: f64,
    /// Currency code for the expectation.
    pub preferred_currency: String,
}

impl CandidateProfile {
    /// Returns true if the profile is filled out enough to drive
    /// recommendations: at least 4 of the 6 core fields (title, bio,
    /// skills, experience, education, location) are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let filled = [
            has_text(self.title.as_deref()),
            has_text(self.bio.as_deref()),
            !self.skills.is_empty(),
            self.experience_years.is_some(),
            has_text(self.education.as_deref()),
            has_text(self.location.as_deref()),
        ]
        .iter()
        .filter(|&&f| f)
        .count();

        filled >= 4
    }

    /// Returns true if the candidate stated a salary expectation.
    #[must_use]
    pub fn has_salary_expectation(&self) -> bool {
        self.salary_expectation != 0.0
            && !self.salary_expectation.is_nan()
            && !self.preferred_currency.is_empty()
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}
