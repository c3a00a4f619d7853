//! Salary match scoring.
//!
//! Compares a job's offered salary against a candidate's yearly
//! expectation, after normalizing the offer to a yearly basis in the
//! candidate's currency. Output is always a clamped [0, 100] score; this
//! function never fails.

use getajobyo_core::MatchScore;

use crate::convert::{convert_currency, convert_rate_period};

/// Scores how well a job's salary matches a candidate's expectation.
///
/// `user_yearly_salary` is the candidate's yearly expectation in
/// `user_currency`; `job_min`/`job_max` are in `job_currency` at
/// `job_period`. A zero (or NaN) expectation scores 100: no stated
/// preference is treated as a full match by policy, not as missing data.
///
/// The offer is normalized in two explicit steps - rate period to yearly
/// first, then currency. Both conversions are currently linear so the
/// order doesn't change the arithmetic, but the order is part of the
/// contract and must not be fused or reversed.
///
/// Scoring:
///
/// - Range offer with the expectation inside `[min, max]` (converted,
///   inclusive): 100.
/// - Expectation below the converted minimum: the job pays more than
///   asked, a soft negative at most - the percentage shortfall relative
///   to the expectation is deducted, capped at 50 points.
/// - Expectation above the converted maximum: the percentage excess
///   relative to the ceiling is deducted, capped at 100 points, so
///   wanting far more than the ceiling can zero the score.
/// - Single-value offer: symmetric percentage difference against the
///   larger of the two figures, capped at 100 points.
/// - Any uncovered path falls back to 50.
#[must_use]
pub fn calculate_salary_match(
    job_min: f64,
    job_max: f64,
    job_currency: &str,
    job_period: &str,
    user_yearly_salary: f64,
    user_currency: &str,
) -> MatchScore {
    if user_yearly_salary == 0.0 || user_yearly_salary.is_nan() {
        return MatchScore::FULL;
    }

    // Normalize the offer: period to yearly first, then currency.
    let min_converted = convert_currency(
        convert_rate_period(job_min, job_period, "yearly"),
        job_currency,
        user_currency,
    );
    let max_converted = convert_currency(
        convert_rate_period(job_max, job_period, "yearly"),
        job_currency,
        user_currency,
    );

    if job_min != job_max {
        if user_yearly_salary >= min_converted && user_yearly_salary <= max_converted {
            return MatchScore::FULL;
        }

        if user_yearly_salary < min_converted {
            let difference = min_converted - user_yearly_salary;
            let percent_difference = difference / user_yearly_salary * 100.0;
            return MatchScore::clamped(100.0 - percent_difference.min(50.0));
        }

        if user_yearly_salary > max_converted {
            let difference = user_yearly_salary - max_converted;
            let percent_difference = difference / max_converted * 100.0;
            return MatchScore::clamped(100.0 - percent_difference.min(100.0));
        }
    } else {
        let difference = (user_yearly_salary - min_converted).abs();
        let percent_difference =
            difference / user_yearly_salary.max(min_converted) * 100.0;
        return MatchScore::clamped(100.0 - percent_difference.min(100.0));
    }

    // The converters never produce NaN, so the range cases above are
    // exhaustive today. The fallback value is still part of the contract.
    MatchScore::clamped(50.0)
}
