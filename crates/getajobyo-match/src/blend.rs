//! Score blending and salary-fit classification.

use getajobyo_core::MatchScore;
use serde::{Deserialize, Serialize};

/// Weight on the skills/title/location score.
const SKILLS_WEIGHT: f64 = 0.7;
/// Weight on the salary score.
const SALARY_WEIGHT: f64 = 0.3;

/// Threshold above which the salary is called aligned.
const ALIGNED_THRESHOLD: f64 = 80.0;
/// Threshold above which the salary is called partially aligned.
const PARTIAL_THRESHOLD: f64 = 50.0;

/// Blends a skills score with a salary score at the fixed 70/30 weights.
///
/// The weighting is a contract shared with every consumer that displays
/// an overall percentage; the result is rounded to a whole point.
#[must_use]
pub fn blend_scores(skills: MatchScore, salary: MatchScore) -> MatchScore {
    let overall = skills.value() * SKILLS_WEIGHT + salary.value() * SALARY_WEIGHT;
    MatchScore::clamped(overall.round())
}

/// How well a posting's salary lines up with the candidate's expectation.
///
/// Derived from the salary match score with the same thresholds the
/// application uses to choose between "aligns well", "somewhat aligned",
/// and "may not meet your expectations" messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryFit {
    /// Salary score >= 80.
    Aligned,
    /// Salary score in [50, 80).
    Partial,
    /// Salary score < 50.
    Misaligned,
}

impl SalaryFit {
    /// Classifies a salary match score.
    #[must_use]
    pub fn from_score(score: MatchScore) -> Self {
        let value = score.value();
        if value >= ALIGNED_THRESHOLD {
            SalaryFit::Aligned
        } else if value >= PARTIAL_THRESHOLD {
            SalaryFit::Partial
        } else {
            SalaryFit::Misaligned
        }
    }
}
