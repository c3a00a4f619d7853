//! # GetAJobYo Match
//!
//! The job-recommendation engine: value types for postings, candidate
//! profiles, and applications, plus the scoring pipeline that ranks jobs
//! for a candidate.
//!
//! Scoring has two halves:
//!
//! - a skills/title/location heuristic over the posting text
//!   ([`heuristic::profile_match`])
//! - the salary match from `getajobyo-salary`, blended in at a fixed
//!   70/30 weighting ([`blend::blend_scores`])
//!
//! Like the salary engine, scoring never fails: missing profile fields
//! simply contribute nothing. Errors exist only on the strict surfaces
//! (posting validation, application status transitions).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod blend;
pub mod error;
pub mod heuristic;
pub mod rank;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::blend::{blend_scores, SalaryFit};
    pub use crate::error::{MatchError, MatchResult};
    pub use crate::heuristic::profile_match;
    pub use crate::rank::{rank_jobs, score_job, JobMatch};
    pub use crate::types::{Application, ApplicationStatus, CandidateProfile, JobPosting};
}

pub use error::{MatchError, MatchResult};
pub use rank::{rank_jobs, score_job, JobMatch};
pub use types::{Application, ApplicationStatus, CandidateProfile, JobPosting};
