//! Display formatting for salary amounts and ranges.
//!
//! Output is plain text for direct display; no HTML escaping happens here.

use getajobyo_core::{Currency, RatePeriod};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed display string for an unspecified salary range.
const UNSPECIFIED: &str = "Salary not specified";

/// Formats an amount with its currency symbol.
///
/// Zero or NaN amounts render as the empty string. Unknown codes use the
/// code itself as the symbol. JPY and CNY render as grouped whole units
/// with no fractional digits - a hard-coded display convention for those
/// two currencies, not a general rule. Everything else renders with 0-2
/// fractional digits (trailing zeros trimmed) and grouped thousands.
#[must_use]
pub fn format_currency(amount: f64, code: &str) -> String {
    if amount == 0.0 || amount.is_nan() {
        return String::new();
    }

    let currency = Currency::from_code(code);
    let symbol = currency.map_or(code, |c| c.symbol());

    if currency.is_some_and(|c| c.uses_whole_units()) {
        let whole = format!("{:.0}", amount.round());
        return format!("{symbol}{}", group_thousands(&whole));
    }

    format!("{symbol}{}", grouped_decimal(amount))
}

/// Formats a salary range with currency symbol and pay-period suffix.
///
/// A `{0, 0}` range renders as the fixed sentinel `"Salary not
/// specified"`. A single value renders alone; otherwise
/// `"<min> - <max>"`. Non-yearly periods append `" per <label>"` once at
/// the end; yearly salaries carry no suffix since yearly is the implicit
/// default unit.
#[must_use]
pub fn format_salary_range(min: f64, max: f64, code: &str, period: &str) -> String {
    if min == 0.0 && max == 0.0 {
        return UNSPECIFIED.to_string();
    }

    let formatted_min = format_currency(min, code);
    let suffix = period_suffix(period);

    if min == max {
        return format!("{formatted_min}{suffix}");
    }

    let formatted_max = format_currency(max, code);
    format!("{formatted_min} - {formatted_max}{suffix}")
}

/// Renders an amount with 0-2 fractional digits and grouped thousands.
fn grouped_decimal(amount: f64) -> String {
    let Some(decimal) = Decimal::from_f64(amount) else {
        return String::new();
    };
    let rounded = decimal
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let text = rounded.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{frac_part}", group_thousands(int_part)),
        None => group_thousands(&text),
    }
}

/// Inserts comma separators every three digits, preserving a leading sign.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{sign}{out}")
}

/// Returns the `" per <label>"` suffix for a period, or `""` for yearly.
///
/// Known periods use their canonical label; an unrecognized period still
/// gets a suffix with its last two characters cut off, mirroring how the
/// display layer has always truncated the "-ly" ending.
fn period_suffix(period: &str) -> String {
    if period == "yearly" {
        return String::new();
    }
    match RatePeriod::from_str_exact(period) {
        Some(p) => format!(" per {}", p.label()),
        None => {
            let chars = period.chars().count();
            let truncated: String = period.chars().take(chars.saturating_sub(2)).collect();
            format!(" per {truncated}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_nan_render_empty() {
        assert_eq!(format_currency(0.0, "USD"), "");
        assert_eq!(format_currency(f64::NAN, "USD"), "");
    }

    #[test]
    fn test_grouped_dollars() {
        assert_eq!(format_currency(50_000.0, "USD"), "$50,000");
        assert_eq!(format_currency(1_234_567.0, "USD"), "$1,234,567");
    }

    #[test]
    fn test_fractional_digits_trimmed() {
        assert_eq!(format_currency(1234.5, "USD"), "$1,234.5");
        assert_eq!(format_currency(1234.56, "USD"), "$1,234.56");
        assert_eq!(format_currency(1234.567, "USD"), "$1,234.57");
        assert_eq!(format_currency(1000.0, "EUR"), "€1,000");
    }

    #[test]
    fn test_jpy_whole_units() {
        assert_eq!(format_currency(100_000.5, "JPY"), "¥100,001");
        assert_eq!(format_currency(5_000_000.0, "JPY"), "¥5,000,000");
    }

    #[test]
    fn test_cny_whole_units() {
        assert_eq!(format_currency(9_999.4, "CNY"), "¥9,999");
    }

    #[test]
    fn test_unknown_code_uses_code_as_symbol() {
        assert_eq!(format_currency(5_000.0, "XYZ"), "XYZ5,000");
    }

    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(format_currency(950.0, "GBP"), "£950");
        assert_eq!(format_currency(42.5, "CHF"), "CHF42.5");
    }

    #[test]
    fn test_range_sentinel() {
        assert_eq!(format_salary_range(0.0, 0.0, "USD", "yearly"), "Salary not specified");
    }

    #[test]
    fn test_yearly_has_no_suffix() {
        assert_eq!(
            format_salary_range(50_000.0, 70_000.0, "USD", "yearly"),
            "$50,000 - $70,000"
        );
        assert_eq!(format_salary_range(80_000.0, 80_000.0, "USD", "yearly"), "$80,000");
    }

    #[test]
    fn test_non_yearly_suffix() {
        assert_eq!(
            format_salary_range(25.0, 35.0, "USD", "hourly"),
            "$25 - $35 per hour"
        );
        assert_eq!(
            format_salary_range(4_000.0, 4_000.0, "EUR", "monthly"),
            "€4,000 per month"
        );
    }

    #[test]
    fn test_daily_label_truncation() {
        // "daily" minus its "-ly" ending is "dai"; display parity is kept.
        assert_eq!(
            format_salary_range(300.0, 300.0, "USD", "daily"),
            "$300 per dai"
        );
    }

    #[test]
    fn test_unknown_period_truncates_last_two_chars() {
        assert_eq!(
            format_salary_range(10_000.0, 10_000.0, "USD", "quarterly"),
            "$10,000 per quarter"
        );
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        assert_eq!(format_currency(-1_500.0, "USD"), "$-1,500");
    }
}
