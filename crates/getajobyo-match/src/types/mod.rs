//! Value types for jobs, candidates, and applications.

mod application;
mod job;
mod profile;

pub use application::{Application, ApplicationStatus};
pub use job::JobPosting;
pub use profile::CandidateProfile;
