//! # GetAJobYo Core
//!
//! Core value types for the GetAJobYo matching engine.
//!
//! This crate provides the foundational building blocks used throughout the
//! matching stack:
//!
//! - **Types**: Domain-specific types like `Currency`, `RatePeriod`,
//!   `SalaryRange`, `MatchScore`
//! - **Errors**: Structured errors for the strict construction and
//!   validation paths
//!
//! ## Design Philosophy
//!
//! - **Fail soft in the hot path**: the numeric kernels built on these
//!   types degrade to documented neutral fallbacks instead of erroring
//! - **Strict at the edges**: constructors and `FromStr` impls validate,
//!   so bad data is caught where records are authored, not where they are
//!   scored
//!
//! ## Example
//!
//! ```rust
//! use getajobyo_core::prelude::*;
//!
//! let range = SalaryRange::parse("$50k-$70k");
//! assert_eq!(range.min, 50_000.0);
//! assert_eq!(Currency::EUR.symbol(), "€");
//! assert_eq!(RatePeriod::Hourly.factor_to(RatePeriod::Yearly), 2080.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, MatchScore, RatePeriod, SalaryRange};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, MatchScore, RatePeriod, SalaryRange};
