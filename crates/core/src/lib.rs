//! Auric Core - Shared types library.
//!
//! This crate provides common types used across all Auric components:
//! - `catalog` - Client-side catalog engine (store, retrieval pipeline, pricing)
//! - `cli` - Command-line front end for browsing the catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs plus money/currency types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
