//! Auric catalog engine.
//!
//! The client-side state and pricing core of the Auric storefront:
//!
//! - [`store`] - Single source of truth for products, cart, wishlist, and
//!   filter/pagination state, mutated only through [`store::Action`] dispatch
//! - [`pipeline`] - Filter-driven remote fetch that keeps the product list
//!   synchronized with the ornaments API, with stale-response suppression
//! - [`pricing`] - Currency-aware price resolution with a total fallback chain
//! - [`variant`] - Per-detail-page metal/size selection as a derived view model
//! - [`currency`] - Supported countries/currencies and the active selection
//! - [`client`] - HTTP client for the ornaments API
//!
//! The store is the only shared mutable resource; every other component
//! either reads from it or writes back through `dispatch`.
//!
//! # Example
//!
//! ```rust,ignore
//! use auric_catalog::client::OrnamentsClient;
//! use auric_catalog::config::CatalogConfig;
//! use auric_catalog::pipeline::RetrievalPipeline;
//! use auric_catalog::store::{Action, CatalogStore, SharedStore};
//!
//! let config = CatalogConfig::from_env()?;
//! let store = SharedStore::new(CatalogStore::new(config.default_currency, config.page_limit));
//! let pipeline = RetrievalPipeline::new(OrnamentsClient::new(&config)?, store.clone());
//!
//! store.dispatch(Action::SetSearchQuery("solitaire".into()));
//! pipeline.refresh().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod currency;
pub mod error;
pub mod pipeline;
pub mod pricing;
pub mod store;
pub mod types;
pub mod variant;

pub use error::CatalogError;
