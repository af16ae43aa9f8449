//! Currency-aware price resolution.
//!
//! [`resolve_price`] is the single place display prices come from. It is
//! pure and total: for any product and any supported currency it returns a
//! finite amount and a symbol, so it can run on every render of every
//! price label without a failure path.

use rust_decimal::Decimal;
use serde::Serialize;

use auric_core::CurrencyCode;

use crate::types::Product;

/// A resolved price ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPrice {
    /// Amount in the resolved currency.
    pub amount: Decimal,
    /// Symbol to render in front of the amount.
    pub symbol: String,
    /// Pre-discount price, shown struck through. INR only.
    pub original: Option<Decimal>,
    /// Discount percentage badge. INR only.
    pub discount_percent: Option<Decimal>,
}

impl DisplayPrice {
    /// Render as `"{symbol}{amount}"`.
    #[must_use]
    pub fn format(&self) -> String {
        format!("{}{}", self.symbol, self.amount)
    }
}

/// Resolve the display price of a product in the given currency.
///
/// Fallback chain:
/// 1. `product.prices[currency]` if present - its amount, and its symbol if
///    the entry carries one, else the currency's own symbol.
/// 2. Otherwise the base `price` field (INR-denominated) with the
///    currency's symbol.
///
/// Original-price/discount display is deliberately gated to INR: offer
/// pricing is only maintained in the base currency, so converted
/// currencies show the plain amount.
#[must_use]
pub fn resolve_price(product: &Product, currency: CurrencyCode) -> DisplayPrice {
    let (amount, symbol) = product.prices.get(currency.code()).map_or_else(
        || (product.price, currency.symbol().to_owned()),
        |entry| {
            let symbol = entry
                .symbol
                .clone()
                .unwrap_or_else(|| currency.symbol().to_owned());
            (entry.amount, symbol)
        },
    );

    let (original, discount_percent) = if currency == CurrencyCode::INR {
        (product.original_price, product.discount_percent)
    } else {
        (None, None)
    };

    DisplayPrice {
        amount,
        symbol,
        original,
        discount_percent,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use auric_core::{PriceEntry, ProductId};

    use super::*;

    fn product(prices: HashMap<String, PriceEntry>) -> Product {
        Product {
            id: ProductId::new("orn_1"),
            name: "Solitaire Ring".to_owned(),
            description: String::new(),
            price: Decimal::new(45000, 0),
            original_price: Some(Decimal::new(50000, 0)),
            discount_percent: Some(Decimal::new(10, 0)),
            prices,
            category: Some("rings".to_owned()),
            sub_category: None,
            metal_type: None,
            stone_type: None,
            style: None,
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: 3,
            cover_image: None,
            images: Vec::new(),
            variants: Vec::new(),
            rating: None,
            review_count: 0,
        }
    }

    #[test]
    fn test_price_map_entry_wins() {
        let mut prices = HashMap::new();
        prices.insert(
            "GBP".to_owned(),
            PriceEntry {
                amount: Decimal::new(100, 0),
                symbol: Some("\u{a3}".to_owned()),
            },
        );
        let resolved = resolve_price(&product(prices), CurrencyCode::GBP);
        assert_eq!(resolved.amount, Decimal::new(100, 0));
        assert_eq!(resolved.symbol, "£");
    }

    #[test]
    fn test_entry_without_symbol_uses_currency_symbol() {
        let mut prices = HashMap::new();
        prices.insert(
            "USD".to_owned(),
            PriceEntry {
                amount: Decimal::new(550, 0),
                symbol: None,
            },
        );
        let resolved = resolve_price(&product(prices), CurrencyCode::USD);
        assert_eq!(resolved.symbol, "$");
    }

    #[test]
    fn test_missing_entry_falls_back_to_base_price() {
        // GBP-only price map, switched to USD: base price + "$".
        let mut prices = HashMap::new();
        prices.insert(
            "GBP".to_owned(),
            PriceEntry {
                amount: Decimal::new(100, 0),
                symbol: Some("\u{a3}".to_owned()),
            },
        );
        let resolved = resolve_price(&product(prices), CurrencyCode::USD);
        assert_eq!(resolved.amount, Decimal::new(45000, 0));
        assert_eq!(resolved.symbol, "$");
    }

    #[test]
    fn test_empty_price_map_is_total() {
        let resolved = resolve_price(&product(HashMap::new()), CurrencyCode::SGD);
        assert_eq!(resolved.amount, Decimal::new(45000, 0));
        assert!(resolved.amount >= Decimal::ZERO);
    }

    #[test]
    fn test_discount_shown_for_inr_only() {
        let p = product(HashMap::new());

        let inr = resolve_price(&p, CurrencyCode::INR);
        assert_eq!(inr.original, Some(Decimal::new(50000, 0)));
        assert_eq!(inr.discount_percent, Some(Decimal::new(10, 0)));

        let usd = resolve_price(&p, CurrencyCode::USD);
        assert_eq!(usd.original, None);
        assert_eq!(usd.discount_percent, None);
    }

    #[test]
    fn test_format() {
        let resolved = resolve_price(&product(HashMap::new()), CurrencyCode::INR);
        assert_eq!(resolved.format(), "₹45000");
    }
}
