//! Money and currency types using decimal arithmetic.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A monetary amount with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new monetary amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.currency_code.symbol(), self.amount)
    }
}

/// One entry in a product's currency-keyed price map.
///
/// The server may omit the symbol; display code falls back to the
/// currency's own symbol in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Amount in the entry's currency.
    pub amount: Decimal,
    /// Display symbol supplied by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// A currency-keyed price map as returned by the catalog API.
pub type PriceMap = HashMap<String, PriceEntry>;

/// Unknown currency code error.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

/// ISO 4217 currency codes supported by the storefront.
///
/// INR is the catalog's base currency; a product's bare `price` field is
/// denominated in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    AUD,
    CAD,
    AED,
    SGD,
}

impl CurrencyCode {
    /// The ISO code as a string, as used in price-map keys and query params.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::AUD => "AUD",
            Self::CAD => "CAD",
            Self::AED => "AED",
            Self::SGD => "SGD",
        }
    }

    /// Display symbol for this currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "\u{20b9}",
            Self::USD | Self::AUD | Self::CAD | Self::SGD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
            Self::AED => "AED ",
        }
    }

    /// All supported currencies, in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::INR,
            Self::USD,
            Self::EUR,
            Self::GBP,
            Self::AUD,
            Self::CAD,
            Self::AED,
            Self::SGD,
        ]
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::INR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "AUD" => Ok(Self::AUD),
            "CAD" => Ok(Self::CAD),
            "AED" => Ok(Self::AED),
            "SGD" => Ok(Self::SGD),
            other => Err(UnknownCurrency(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_roundtrip() {
        for code in CurrencyCode::all() {
            assert_eq!(code.code().parse::<CurrencyCode>().unwrap(), *code);
        }
    }

    #[test]
    fn test_currency_parse_case_insensitive() {
        assert_eq!("inr".parse::<CurrencyCode>().unwrap(), CurrencyCode::INR);
        assert_eq!("Usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
    }

    #[test]
    fn test_currency_parse_unknown() {
        let err = "XYZ".parse::<CurrencyCode>().unwrap_err();
        assert_eq!(err, UnknownCurrency("XYZ".to_owned()));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(CurrencyCode::INR.symbol(), "₹");
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::GBP.symbol(), "£");
        assert_eq!(CurrencyCode::EUR.symbol(), "€");
    }

    #[test]
    fn test_price_entry_optional_symbol() {
        let entry: PriceEntry = serde_json::from_str(r#"{"amount":"120.50"}"#).unwrap();
        assert_eq!(entry.amount, Decimal::new(12050, 2));
        assert!(entry.symbol.is_none());
    }

    #[test]
    fn test_money_display() {
        let money = Money::new(Decimal::new(45000, 0), CurrencyCode::INR);
        assert_eq!(money.to_string(), "₹45000");
    }
}
