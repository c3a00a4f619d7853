//! Currency type with the job board's supported codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Currencies supported by job postings and candidate preferences.
///
/// Each currency carries a fixed conversion rate against USD. Rates are a
/// static snapshot; postings and expectations are compared against the same
/// table, so internal consistency matters more than freshness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound
    GBP,
    /// Canadian Dollar
    CAD,
    /// Australian Dollar
    AUD,
    /// Japanese Yen
    JPY,
    /// Chinese Yuan
    CNY,
    /// Indian Rupee
    INR,
    /// Brazilian Real
    BRL,
    /// South African Rand
    ZAR,
    /// Mexican Peso
    MXN,
    /// Singapore Dollar
    SGD,
    /// Swiss Franc
    CHF,
    /// Swedish Krona
    SEK,
    /// New Zealand Dollar
    NZD,
    /// Turkish Lira
    TRY,
    /// Ethiopian Birr
    ETB,
    /// Nigerian Naira
    NGN,
    /// Egyptian Pound
    EGP,
    /// Kenyan Shilling
    KES,
    /// Ghanaian Cedi
    GHS,
}

impl Currency {
    /// Returns the 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::JPY => "JPY",
            Currency::CNY => "CNY",
            Currency::INR => "INR",
            Currency::BRL => "BRL",
            Currency::ZAR => "ZAR",
            Currency::MXN => "MXN",
            Currency::SGD => "SGD",
            Currency::CHF => "CHF",
            Currency::SEK => "SEK",
            Currency::NZD => "NZD",
            Currency::TRY => "TRY",
            Currency::ETB => "ETB",
            Currency::NGN => "NGN",
            Currency::EGP => "EGP",
            Currency::KES => "KES",
            Currency::GHS => "GHS",
        }
    }

    /// Returns the display symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::JPY => "¥",
            Currency::CNY => "¥",
            Currency::INR => "₹",
            Currency::BRL => "R$",
            Currency::ZAR => "R",
            Currency::MXN => "Mex$",
            Currency::SGD => "S$",
            Currency::CHF => "CHF",
            Currency::SEK => "kr",
            Currency::NZD => "NZ$",
            Currency::TRY => "₺",
            Currency::ETB => "Br",
            Currency::NGN => "₦",
            Currency::EGP => "E£",
            Currency::KES => "KSh",
            Currency::GHS => "GH₵",
        }
    }

    /// Returns the full display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "US Dollar",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound",
            Currency::CAD => "Canadian Dollar",
            Currency::AUD => "Australian Dollar",
            Currency::JPY => "Japanese Yen",
            Currency::CNY => "Chinese Yuan",
            Currency::INR => "Indian Rupee",
            Currency::BRL => "Brazilian Real",
            Currency::ZAR => "South African Rand",
            Currency::MXN => "Mexican Peso",
            Currency::SGD => "Singapore Dollar",
            Currency::CHF => "Swiss Franc",
            Currency::SEK => "Swedish Krona",
            Currency::NZD => "New Zealand Dollar",
            Currency::TRY => "Turkish Lira",
            Currency::ETB => "Ethiopian Birr",
            Currency::NGN => "Nigerian Naira",
            Currency::EGP => "Egyptian Pound",
            Currency::KES => "Kenyan Shilling",
            Currency::GHS => "Ghanaian Cedi",
        }
    }

    /// Returns the conversion rate as units per 1 USD.
    ///
    /// These constants are part of the scoring contract and must not be
    /// refreshed independently of the reference test values.
    #[must_use]
    pub fn rate_per_usd(&self) -> f64 {
        match self {
            Currency::USD => 1.0,
            Currency::EUR => 0.92,
            Currency::GBP => 0.79,
            Currency::CAD => 1.36,
            Currency::AUD => 1.52,
            Currency::JPY => 149.82,
            Currency::CNY => 7.24,
            Currency::INR => 83.12,
            Currency::BRL => 5.05,
            Currency::ZAR => 18.65,
            Currency::MXN => 16.73,
            Currency::SGD => 1.34,
            Currency::CHF => 0.88,
            Currency::SEK => 10.42,
            Currency::NZD => 1.64,
            Currency::TRY => 32.15,
            Currency::ETB => 56.5,
            Currency::NGN => 1550.0,
            Currency::EGP => 47.85,
            Currency::KES => 129.5,
            Currency::GHS => 15.2,
        }
    }

    /// Returns true if amounts in this currency display without
    /// fractional units.
    ///
    /// Hard-coded to JPY and CNY; this is a display convention, not a
    /// statement about minor units in general.
    #[must_use]
    pub fn uses_whole_units(&self) -> bool {
        matches!(self, Currency::JPY | Currency::CNY)
    }

    /// Parses a currency from its canonical uppercase code.
    ///
    /// Codes arriving from the data layer are already canonical, so the
    /// match is exact and case-sensitive. Unknown codes yield `None`; the
    /// conversion kernels treat that as rate 1 and symbol = code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "JPY" => Some(Currency::JPY),
            "CNY" => Some(Currency::CNY),
            "INR" => Some(Currency::INR),
            "BRL" => Some(Currency::BRL),
            "ZAR" => Some(Currency::ZAR),
            "MXN" => Some(Currency::MXN),
            "SGD" => Some(Currency::SGD),
            "CHF" => Some(Currency::CHF),
            "SEK" => Some(Currency::SEK),
            "NZD" => Some(Currency::NZD),
            "TRY" => Some(Currency::TRY),
            "ETB" => Some(Currency::ETB),
            "NGN" => Some(Currency::NGN),
            "EGP" => Some(Currency::EGP),
            "KES" => Some(Currency::KES),
            "GHS" => Some(Currency::GHS),
            _ => None,
        }
    }

    /// Returns the full supported set, in display order.
    #[must_use]
    pub fn all() -> &'static [Currency] {
        &[
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::CAD,
            Currency::AUD,
            Currency::JPY,
            Currency::CNY,
            Currency::INR,
            Currency::BRL,
            Currency::ZAR,
            Currency::MXN,
            Currency::SGD,
            Currency::CHF,
            Currency::SEK,
            Currency::NZD,
            Currency::TRY,
            Currency::ETB,
            Currency::NGN,
            Currency::EGP,
            Currency::KES,
            Currency::GHS,
        ]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| CoreError::unknown_currency(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::ETB.code(), "ETB");
        assert_eq!(Currency::GHS.code(), "GHS");
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(Currency::USD.symbol(), "$");
        assert_eq!(Currency::EUR.symbol(), "€");
        assert_eq!(Currency::CAD.symbol(), "CA$");
        assert_eq!(Currency::NGN.symbol(), "₦");
        assert_eq!(Currency::GHS.symbol(), "GH₵");
    }

    #[test]
    fn test_currency_name() {
        assert_eq!(Currency::USD.name(), "US Dollar");
        assert_eq!(Currency::KES.name(), "Kenyan Shilling");
    }

    #[test]
    fn test_rate_per_usd() {
        assert_eq!(Currency::USD.rate_per_usd(), 1.0);
        assert_eq!(Currency::EUR.rate_per_usd(), 0.92);
        assert_eq!(Currency::NGN.rate_per_usd(), 1550.0);
        assert_eq!(Currency::ETB.rate_per_usd(), 56.5);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("TRY"), Some(Currency::TRY));
        assert_eq!(Currency::from_code("XXX"), None);
        assert_eq!(Currency::from_code(""), None);
        // Canonical form only; lowercase is not recognized.
        assert_eq!(Currency::from_code("usd"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("EUR".parse::<Currency>(), Ok(Currency::EUR));
        assert!(matches!(
            "???".parse::<Currency>(),
            Err(CoreError::UnknownCurrency { .. })
        ));
    }

    #[test]
    fn test_whole_units() {
        assert!(Currency::JPY.uses_whole_units());
        assert!(Currency::CNY.uses_whole_units());
        assert!(!Currency::USD.uses_whole_units());
        assert!(!Currency::SEK.uses_whole_units());
    }

    #[test]
    fn test_all_covers_table() {
        assert_eq!(Currency::all().len(), 21);
        for c in Currency::all() {
            assert_eq!(Currency::from_code(c.code()), Some(*c));
            assert!(c.rate_per_usd() > 0.0);
            assert!(!c.symbol().is_empty());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Currency::USD), "USD");
        assert_eq!(format!("{}", Currency::EGP), "EGP");
    }

    #[test]
    fn test_default() {
        assert_eq!(Currency::default(), Currency::USD);
    }

    #[test]
    fn test_serde() {
        let currency = Currency::EUR;
        let json = serde_json::to_string(&currency).unwrap();
        let parsed: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(currency, parsed);
    }
}
