//! Shared newtype wrappers and money types.

pub mod id;
pub mod price;

pub use id::ProductId;
pub use price::{CurrencyCode, Money, PriceEntry, PriceMap, UnknownCurrency};
