//! Pay frequency type and the fixed period-conversion table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Pay frequency attached to a salary figure.
///
/// Calendar assumptions behind the conversion table: 8-hour workday,
/// 5-day/40-hour workweek, 4.33 weeks per month, 52 weeks per year, 2080
/// work hours per year, 260 workdays per year. The monthly entries are
/// stored pre-rounded (173.33, 21.67) and the reverse direction uses their
/// exact reciprocals, keeping round trips drift-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RatePeriod {
    /// Paid per hour
    Hourly,
    /// Paid per day
    Daily,
    /// Paid per week
    Weekly,
    /// Paid per month
    Monthly,
    /// Paid per year - the implicit default for salary expectations
    #[default]
    Yearly,
}

impl RatePeriod {
    /// Returns the lowercase wire form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RatePeriod::Hourly => "hourly",
            RatePeriod::Daily => "daily",
            RatePeriod::Weekly => "weekly",
            RatePeriod::Monthly => "monthly",
            RatePeriod::Yearly => "yearly",
        }
    }

    /// Returns the display label used in "per <label>" suffixes.
    ///
    /// The label is the wire form with the trailing "ly" cut off, exactly
    /// as the display layer has always rendered it - including "dai" for
    /// daily. Display parity beats spelling here.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RatePeriod::Hourly => "hour",
            RatePeriod::Daily => "dai",
            RatePeriod::Weekly => "week",
            RatePeriod::Monthly => "month",
            RatePeriod::Yearly => "year",
        }
    }

    /// Parses the lowercase wire form. Case-sensitive.
    #[must_use]
    pub fn from_str_exact(s: &str) -> Option<Self> {
        match s {
            "hourly" => Some(RatePeriod::Hourly),
            "daily" => Some(RatePeriod::Daily),
            "weekly" => Some(RatePeriod::Weekly),
            "monthly" => Some(RatePeriod::Monthly),
            "yearly" => Some(RatePeriod::Yearly),
            _ => None,
        }
    }

    /// Returns the multiplier converting an amount in this period to the
    /// target period.
    ///
    /// `a.factor_to(b) * b.factor_to(a) == 1` for every pair; the diagonal
    /// is exactly 1.
    #[must_use]
    pub fn factor_to(self, to: RatePeriod) -> f64 {
        use RatePeriod::{Daily, Hourly, Monthly, Weekly, Yearly};
        match (self, to) {
            (Hourly, Hourly) => 1.0,
            (Hourly, Daily) => 8.0,
            (Hourly, Weekly) => 40.0,
            (Hourly, Monthly) => 173.33,
            (Hourly, Yearly) => 2080.0,

            (Daily, Hourly) => 1.0 / 8.0,
            (Daily, Daily) => 1.0,
            (Daily, Weekly) => 5.0,
            (Daily, Monthly) => 21.67,
            (Daily, Yearly) => 260.0,

            (Weekly, Hourly) => 1.0 / 40.0,
            (Weekly, Daily) => 1.0 / 5.0,
            (Weekly, Weekly) => 1.0,
            (Weekly, Monthly) => 4.33,
            (Weekly, Yearly) => 52.0,

            (Monthly, Hourly) => 1.0 / 173.33,
            (Monthly, Daily) => 1.0 / 21.67,
            (Monthly, Weekly) => 1.0 / 4.33,
            (Monthly, Monthly) => 1.0,
            (Monthly, Yearly) => 12.0,

            (Yearly, Hourly) => 1.0 / 2080.0,
            (Yearly, Daily) => 1.0 / 260.0,
            (Yearly, Weekly) => 1.0 / 52.0,
            (Yearly, Monthly) => 1.0 / 12.0,
            (Yearly, Yearly) => 1.0,
        }
    }

    /// Returns the full supported set, shortest period first.
    #[must_use]
    pub fn all() -> &'static [RatePeriod] {
        &[
            RatePeriod::Hourly,
            RatePeriod::Daily,
            RatePeriod::Weekly,
            RatePeriod::Monthly,
            RatePeriod::Yearly,
        ]
    }
}

impl fmt::Display for RatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RatePeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatePeriod::from_str_exact(s).ok_or_else(|| CoreError::unknown_rate_period(s))
    }
}
