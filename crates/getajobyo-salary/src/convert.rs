//! Currency and rate-period conversion kernels.
//!
//! Both kernels follow the same shape: short-circuit on a zero/NaN amount
//! (returns 0) and on an identity conversion (returns the amount untouched,
//! avoiding float drift on no-ops), otherwise apply the table factor and
//! round to cents. Unknown codes and periods degrade to neutral factors
//! rather than erroring.

use getajobyo_core::{Currency, RatePeriod};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to 2 decimal places, half away from zero.
///
/// Matches decimal-string rounding rather than the float default, so
/// `2.675` rounds up to `2.68` instead of banker's-rounding down.
/// Non-finite input degrades to 0.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    Decimal::from_f64(amount)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(0.0)
}

/// Converts an amount between two currency codes.
///
/// Conversion goes through USD: divide by the source rate, multiply by the
/// destination rate, round to cents. An unrecognized code on either side
/// uses rate 1 (USD parity). A zero or NaN amount returns 0; identical
/// codes return the amount unchanged without touching the rate math.
#[must_use]
pub fn convert_currency(amount: f64, from: &str, to: &str) -> f64 {
    if amount == 0.0 || amount.is_nan() {
        return 0.0;
    }
    if from == to {
        return amount;
    }

    let from_rate = Currency::from_code(from).map_or(1.0, |c| c.rate_per_usd());
    let to_rate = Currency::from_code(to).map_or(1.0, |c| c.rate_per_usd());

    let amount_in_usd = amount / from_rate;
    round_to_cents(amount_in_usd * to_rate)
}

/// Converts an amount between two pay frequencies.
///
/// Multiplies by the fixed factor table on [`RatePeriod`]; an
/// unrecognized period on either side yields factor 1. Zero/NaN amounts
/// return 0 and identical period strings return the amount unchanged.
#[must_use]
pub fn convert_rate_period(amount: f64, from: &str, to: &str) -> f64 {
    if amount == 0.0 || amount.is_nan() {
        return 0.0;
    }
    if from == to {
        return amount;
    }

    let factor = match (
        RatePeriod::from_str_exact(from),
        RatePeriod::from_str_exact(to),
    ) {
        (Some(f), Some(t)) => f.factor_to(t),
        _ => 1.0,
    };
    round_to_cents(amount * factor)
}

/// Typed variant of [`convert_currency`] for callers holding parsed codes.
#[must_use]
pub fn convert_currency_typed(amount: f64, from: Currency, to: Currency) -> f64 {
    convert_currency(amount, from.code(), to.code())
}

/// Typed variant of [`convert_rate_period`] for callers holding parsed
/// periods.
#[must_use]
pub fn convert_rate_period_typed(amount: f64, from: RatePeriod, to: RatePeriod) -> f64 {
    convert_rate_period(amount, from.as_str(), to.as_str())
}
