//! Shared fixtures for the Auric integration tests.
//!
//! The tests under `tests/` drive the real [`auric_catalog`] client and
//! retrieval pipeline against a wiremock server that plays the ornaments
//! API. This crate only provides product fixtures so each test can focus
//! on the behavior it exercises.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;

use auric_catalog::types::{OrnamentPage, Product};
use auric_core::{PriceMap, ProductId};

/// A minimal catalog product with the given id, name, and base INR price.
#[must_use]
pub fn ornament(id: &str, name: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: String::new(),
        price: Decimal::new(price, 0),
        original_price: None,
        discount_percent: None,
        prices: PriceMap::new(),
        category: None,
        sub_category: None,
        metal_type: None,
        stone_type: None,
        style: None,
        sizes: Vec::new(),
        colors: Vec::new(),
        stock: 0,
        cover_image: None,
        images: Vec::new(),
        variants: Vec::new(),
        rating: None,
        review_count: 0,
    }
}

/// Wrap products in the listing response envelope.
#[must_use]
pub fn listing(ornaments: Vec<Product>) -> OrnamentPage {
    OrnamentPage { ornaments }
}
