//! Clamped 0-100 match score newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A match percentage, always within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MatchScore(f64);

impl MatchScore {
    /// A full 100% match.
    pub const FULL: MatchScore = MatchScore(100.0);

    /// Creates a score, clamping into [0, 100]. NaN clamps to 0.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the score value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the score rounded to a whole percentage.
    #[must_use]
    pub fn rounded(&self) -> u8 {
        self.0.round() as u8
    }

    /// Returns true for a 100% match.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0 >= 100.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.rounded())
    }
}

impl From<MatchScore> for f64 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}
