//! # GetAJobYo Salary
//!
//! Salary normalization engine: currency conversion, rate-period
//! conversion, free-text range parsing (via `getajobyo-core`), display
//! formatting, and the salary match scorer.
//!
//! Every function here is pure, synchronous, and fail-soft: unknown
//! currency codes degrade to USD parity, unknown rate periods to a no-op
//! factor, and unparseable text to zero. Nothing in this crate returns an
//! error or panics; callers get documented neutral fallbacks instead.
//!
//! ## Example
//!
//! ```rust
//! use getajobyo_salary::{calculate_salary_match, convert_currency, format_salary_range};
//!
//! assert_eq!(convert_currency(100.0, "USD", "EUR"), 92.0);
//! assert_eq!(format_salary_range(0.0, 0.0, "USD", "yearly"), "Salary not specified");
//!
//! let score = calculate_salary_match(50_000.0, 70_000.0, "USD", "yearly", 60_000.0, "USD");
//! assert!(score.is_full());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod convert;
pub mod format;
pub mod score;

pub use convert::{
    convert_currency, convert_currency_typed, convert_rate_period, convert_rate_period_typed,
    round_to_cents,
};
pub use format::{format_currency, format_salary_range};
pub use score::calculate_salary_match;
