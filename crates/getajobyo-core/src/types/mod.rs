//! Core domain types for the matching engine.

mod currency;
mod match_score;
mod rate_period;
mod salary_range;

pub use currency::Currency;
pub use match_score::MatchScore;
pub use rate_period::RatePeriod;
pub use salary_range::SalaryRange;
