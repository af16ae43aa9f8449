//! Currency resolver: the supported country list and the active selection.
//!
//! Selecting a country updates the active currency, which cascades into
//! price resolution and into the `currency` field of every subsequent
//! listing query (via [`crate::store::Action::SetCurrency`]).

use auric_core::CurrencyCode;

/// One entry in the storefront's country/currency selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryOption {
    /// ISO 3166 country code (e.g., "IN").
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Emoji flag for the selector.
    pub flag: &'static str,
    /// Currency the storefront prices in for this country.
    pub currency: CurrencyCode,
}

/// Static list of countries the storefront ships to.
pub const SUPPORTED_COUNTRIES: &[CountryOption] = &[
    CountryOption {
        code: "IN",
        name: "India",
        flag: "\u{1f1ee}\u{1f1f3}",
        currency: CurrencyCode::INR,
    },
    CountryOption {
        code: "US",
        name: "United States",
        flag: "\u{1f1fa}\u{1f1f8}",
        currency: CurrencyCode::USD,
    },
    CountryOption {
        code: "GB",
        name: "United Kingdom",
        flag: "\u{1f1ec}\u{1f1e7}",
        currency: CurrencyCode::GBP,
    },
    CountryOption {
        code: "DE",
        name: "Germany",
        flag: "\u{1f1e9}\u{1f1ea}",
        currency: CurrencyCode::EUR,
    },
    CountryOption {
        code: "AU",
        name: "Australia",
        flag: "\u{1f1e6}\u{1f1fa}",
        currency: CurrencyCode::AUD,
    },
    CountryOption {
        code: "CA",
        name: "Canada",
        flag: "\u{1f1e8}\u{1f1e6}",
        currency: CurrencyCode::CAD,
    },
    CountryOption {
        code: "AE",
        name: "United Arab Emirates",
        flag: "\u{1f1e6}\u{1f1ea}",
        currency: CurrencyCode::AED,
    },
    CountryOption {
        code: "SG",
        name: "Singapore",
        flag: "\u{1f1f8}\u{1f1ec}",
        currency: CurrencyCode::SGD,
    },
];

/// Holds the shopper's active country/currency selection.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyResolver {
    active: CurrencyCode,
}

impl CurrencyResolver {
    /// Create a resolver with the given starting currency.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self { active: currency }
    }

    /// The currently selected currency.
    #[must_use]
    pub const fn active(&self) -> CurrencyCode {
        self.active
    }

    /// Select a currency directly.
    pub const fn select(&mut self, currency: CurrencyCode) {
        self.active = currency;
    }

    /// Select by country code; returns the new active currency, or `None`
    /// (leaving the selection unchanged) for unsupported countries.
    pub fn select_country(&mut self, country_code: &str) -> Option<CurrencyCode> {
        let option = SUPPORTED_COUNTRIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(country_code))?;
        self.active = option.currency;
        Some(option.currency)
    }
}

impl Default for CurrencyResolver {
    fn default() -> Self {
        Self::new(CurrencyCode::default())
    }
}
