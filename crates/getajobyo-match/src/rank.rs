//! Job scoring and ranking for a candidate.

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use getajobyo_core::MatchScore;
use getajobyo_salary::calculate_salary_match;

use crate::blend::{blend_scores, SalaryFit};
use crate::heuristic::profile_match;
use crate::types::{CandidateProfile, JobPosting};

/// The scored result for one posting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    /// The posting this score belongs to.
    pub job_id: Uuid,
    /// Blended overall score shown to the candidate.
    pub overall: MatchScore,
    /// The skills/title/location component.
    pub skills_score: MatchScore,
    /// The salary component, when the candidate stated an expectation.
    pub salary_score: Option<MatchScore>,
    /// Classification of the salary component.
    pub salary_fit: Option<SalaryFit>,
}

/// Scores one posting for a candidate.
///
/// Always runs the skills/title/location heuristic. When the candidate
/// has a stated salary expectation, the posting's salary text is parsed,
/// scored against it, and blended in at the fixed 70/30 weighting;
/// otherwise the heuristic score stands alone.
#[must_use]
pub fn score_job(job: &JobPosting, profile: &CandidateProfile) -> JobMatch {
    let skills_score = profile_match(job, profile);

    if !profile.has_salary_expectation() {
        return JobMatch {
            job_id: job.id,
            overall: skills_score,
            skills_score,
            salary_score: None,
            salary_fit: None,
        };
    }

    let range = job.parsed_salary();
    let salary_score = calculate_salary_match(
        range.min,
        range.max,
        &job.currency,
        &job.rate_period,
        profile.salary_expectation,
        &profile.preferred_currency,
    );

    JobMatch {
        job_id: job.id,
        overall: blend_scores(skills_score, salary_score),
        skills_score,
        salary_score: Some(salary_score),
        salary_fit: Some(SalaryFit::from_score(salary_score)),
    }
}

/// Scores every posting and returns the top `limit`, best first.
///
/// The sort is stable, so postings with equal scores keep their incoming
/// order (typically recency).
#[must_use]
pub fn rank_jobs(jobs: &[JobPosting], profile: &CandidateProfile, limit: usize) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = jobs.iter().map(|job| score_job(job, profile)).collect();

    matches.sort_by(|a, b| {
        b.overall
            .value()
            .partial_cmp(&a.overall.value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(limit);

    debug!(
        "ranked {} of {} postings for recommendation",
        matches.len(),
        jobs.len()
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(title: &str, requirements: &[&str], salary: &str) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: String::new(),
            requirements: requirements.iter().map(|r| (*r).to_string()).collect(),
            salary_range: salary.to_string(),
            currency: "USD".to_string(),
            rate_period: "yearly".to_string(),
            job_type: "full-time".to_string(),
            posted_at: Utc::now(),
        }
    }

    fn profile() -> CandidateProfile {
        CandidateProfile {
            title: Some("Engineer".to_string()),
            skills: vec!["Rust".to_string()],
            salary_expectation: 60_000.0,
            preferred_currency: "USD".to_string(),
            ..CandidateProfile::default()
        }
    }

    #[test]
    fn test_score_without_expectation_is_heuristic_only() {
        let mut p = profile();
        p.salary_expectation = 0.0;
        let m = score_job(&job("Engineer", &["Rust"], "$50k-$70k"), &p);
        assert_eq!(m.overall, m.skills_score);
        assert!(m.salary_score.is_none());
        assert!(m.salary_fit.is_none());
    }

    #[test]
    fn test_score_with_expectation_blends() {
        // Heuristic: 50 + 10 (Rust) + 10 (title) = 70; salary in range = 100.
        // Blended: 70*0.7 + 100*0.3 = 79.
        let m = score_job(&job("Engineer", &["Rust"], "$50k-$70k"), &profile());
        assert_eq!(m.skills_score.value(), 70.0);
        assert_eq!(m.salary_score.unwrap().value(), 100.0);
        assert_eq!(m.overall.value(), 79.0);
        assert_eq!(m.salary_fit, Some(SalaryFit::Aligned));
    }

    #[test]
    fn test_unspecified_salary_still_scores() {
        // "{0,0}" runs through the scorer like any other range; the
        // single-value case against 0 zeroes the salary component.
        let m = score_job(&job("Engineer", &["Rust"], ""), &profile());
        assert_eq!(m.salary_score.unwrap().value(), 0.0);
        assert_eq!(m.salary_fit, Some(SalaryFit::Misaligned));
        assert_eq!(m.overall.value(), 49.0); // 70*0.7 + 0*0.3
    }

    #[test]
    fn test_rank_orders_best_first() {
        let jobs = vec![
            job("Accountant", &[], "$50k-$70k"),
            job("Engineer", &["Rust"], "$50k-$70k"),
            job("Engineer", &["Rust", "Go"], "$50k-$70k"),
        ];
        let ranked = rank_jobs(&jobs, &profile(), 5);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].job_id, jobs[1].id);
        assert!(ranked[0].overall >= ranked[1].overall);
        assert!(ranked[1].overall >= ranked[2].overall);
    }

    #[test]
    fn test_rank_truncates_to_limit() {
        let jobs: Vec<JobPosting> =
            (0..10).map(|_| job("Engineer", &["Rust"], "$50k-$70k")).collect();
        let ranked = rank_jobs(&jobs, &profile(), 5);
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let jobs: Vec<JobPosting> =
            (0..4).map(|_| job("Engineer", &["Rust"], "$50k-$70k")).collect();
        let ranked = rank_jobs(&jobs, &profile(), 4);
        let ids: Vec<Uuid> = ranked.iter().map(|m| m.job_id).collect();
        let expected: Vec<Uuid> = jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids, expected);
    }
}
