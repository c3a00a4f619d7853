//! Salary range value type and the free-text range parser.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A salary range in a single currency and rate period.
///
/// `min == max` represents a fixed salary rather than a range, and
/// `{0, 0}` is the "not specified" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SalaryRange {
    /// Lower bound, >= 0.
    pub min: f64,
    /// Upper bound, >= 0.
    pub max: f64,
}

impl SalaryRange {
    /// Creates a validated range for the posting-authoring path.
    ///
    /// Rejects non-finite or negative bounds and `min > max`. The
    /// fail-soft [`SalaryRange::parse`] path never goes through here.
    pub fn new(min: f64, max: f64) -> CoreResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(CoreError::invalid_salary_range("bounds must be finite"));
        }
        if min < 0.0 || max < 0.0 {
            return Err(CoreError::invalid_salary_range("bounds must be non-negative"));
        }
        if min > max {
            return Err(CoreError::invalid_salary_range(format!(
                "min {min} exceeds max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Creates a fixed (single-value) salary.
    #[must_use]
    pub fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Returns the "not specified" sentinel `{0, 0}`.
    #[must_use]
    pub fn unspecified() -> Self {
        Self { min: 0.0, max: 0.0 }
    }

    /// Returns true for the `{0, 0}` sentinel.
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    /// Returns true if this is a fixed salary rather than a range.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.min == self.max
    }

    /// Parses a human-entered salary range string.
    ///
    /// Handles formats like `"50,000 - 70,000"`, `"$50k-$70k"`, `"80000"`.
    /// Currency symbols and thousands separators are stripped, each
    /// literal `k` expands textually to three zeros, and the text splits
    /// on a dash with optional surrounding whitespace. A two-part split
    /// parses each side (unparseable sides become 0); anything else parses
    /// as a single number or falls back to `{0, 0}`. Never fails.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut cleaned = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '$' | ',' => {}
                'k' => cleaned.push_str("000"),
                _ => cleaned.push(c),
            }
        }

        let parts: Vec<&str> = cleaned.split('-').collect();
        if parts.len() == 2 {
            return Self {
                min: parse_component(parts[0]),
                max: parse_component(parts[1]),
            };
        }

        let single = parse_component(&cleaned);
        Self {
            min: single,
            max: single,
        }
    }
}

/// Parses one side of a cleaned range string; anything unparseable
/// (including a literal "NaN") degrades to 0.
fn parse_component(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{} - {}", self.min, self.max)
        }
    }
}
