//! Skills/title/location match heuristic.
//!
//! A cheap, text-only scoring pass used to rank postings before any
//! salary information is considered. All matching is case-insensitive
//! substring containment; no tokenization or stemming.

use getajobyo_core::MatchScore;

use crate::types::{CandidateProfile, JobPosting};

/// Base score every posting starts from.
const BASE_SCORE: f64 = 50.0;
/// Points per matched skill, up to [`SKILLS_CAP`].
const SKILL_POINTS: f64 = 10.0;
/// Ceiling on the skills contribution.
const SKILLS_CAP: f64 = 30.0;
/// Bonus when the job title contains the candidate's title.
const TITLE_POINTS: f64 = 10.0;
/// Bonus when the job location matches a preferred location.
const LOCATION_POINTS: f64 = 10.0;

/// Scores a posting against a profile on skills, title, and location.
///
/// Starts at 50 and adds up to 30 points for skills (10 per skill found
/// in any requirement line), 10 for a title match, and 10 for a location
/// match, clamping at 100. The base-50 floor means the result is always
/// in [50, 100]; an empty profile scores exactly 50.
#[must_use]
pub fn profile_match(job: &JobPosting, profile: &CandidateProfile) -> MatchScore {
    let mut score = BASE_SCORE;

    let skill_hits = matched_skill_count(job, profile);
    if skill_hits > 0 {
        score += SKILLS_CAP.min(SKILL_POINTS * skill_hits as f64);
    }

    if title_matches(job, profile) {
        score += TITLE_POINTS;
    }

    if location_matches(job, profile) {
        score += LOCATION_POINTS;
    }

    MatchScore::clamped(score)
}

/// Counts profile skills that appear in any requirement line.
fn matched_skill_count(job: &JobPosting, profile: &CandidateProfile) -> usize {
    profile
        .skills
        .iter()
        .filter(|skill| {
            let needle = skill.to_lowercase();
            job.requirements
                .iter()
                .any(|req| req.to_lowercase().contains(&needle))
        })
        .count()
}

/// True when the job title contains the candidate's professional title.
fn title_matches(job: &JobPosting, profile: &CandidateProfile) -> bool {
    match profile.title.as_deref() {
        Some(title) if !title.is_empty() => job
            .title
            .to_lowercase()
            .contains(&title.to_lowercase()),
        _ => false,
    }
}

/// True when any preferred location is contained in the job location.
fn location_matches(job: &JobPosting, profile: &CandidateProfile) -> bool {
    let job_location = job.location.to_lowercase();
    profile
        .preferred_locations
        .iter()
        .any(|loc| job_location.contains(&loc.to_lowercase()))
}
