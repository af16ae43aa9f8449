//! Domain types for the catalog engine.
//!
//! These types mirror the ornaments API wire format. A [`Product`] is
//! immutable from the client's perspective; the shopper's variant choice is
//! layered on top as a derived view (see [`crate::variant`]), never written
//! back into the fetched entity.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use auric_core::{CurrencyCode, PriceMap, ProductId};

// =============================================================================
// Product Types
// =============================================================================

/// Cross-link to an alternate metal rendition of a product.
///
/// Variants share a base design; the sub-record may carry its own images
/// and metal label that override the base product's on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantLink {
    /// Metal key identifying the variant (e.g., "rose-gold").
    pub metal: String,
    /// Linked catalog entry for this rendition, if it exists standalone.
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Display label for the metal (e.g., "18K Rose Gold").
    #[serde(default)]
    pub label: Option<String>,
    /// Cover image override.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Image list override; empty means "use the base product's images".
    #[serde(default)]
    pub images: Vec<String>,
}

/// A catalog product as returned by the ornaments API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Plain-text description.
    #[serde(default)]
    pub description: String,
    /// Base price in the catalog's base currency (INR).
    pub price: Decimal,
    /// Pre-discount price, if the product is on offer.
    #[serde(default)]
    pub original_price: Option<Decimal>,
    /// Discount percentage, if the product is on offer.
    #[serde(default)]
    pub discount_percent: Option<Decimal>,
    /// Currency-keyed price map; keys are ISO codes like "USD".
    #[serde(default)]
    pub prices: PriceMap,
    /// Top-level category (e.g., "rings").
    #[serde(default)]
    pub category: Option<String>,
    /// Sub-category (e.g., "engagement").
    #[serde(default)]
    pub sub_category: Option<String>,
    /// Metal type of this rendition (e.g., "yellow-gold").
    #[serde(default)]
    pub metal_type: Option<String>,
    /// Stone type (e.g., "diamond").
    #[serde(default)]
    pub stone_type: Option<String>,
    /// Style tag (e.g., "solitaire").
    #[serde(default)]
    pub style: Option<String>,
    /// Available size options; empty for one-size products.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Available colors.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Cover image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Alternate metal renditions.
    #[serde(default)]
    pub variants: Vec<VariantLink>,
    /// Average review rating.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of reviews.
    #[serde(default)]
    pub review_count: u32,
}

// =============================================================================
// Cart and Wishlist Types
// =============================================================================

/// Order-specific attributes captured when a product is added to the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartOptions {
    /// Chosen size, when the product has size options.
    #[serde(default)]
    pub selected_size: Option<String>,
    /// Chosen metal key, when a variant was selected.
    #[serde(default)]
    pub selected_metal: Option<String>,
    /// Free-text engraving.
    #[serde(default)]
    pub engraving: Option<String>,
}

/// A cart line: a product snapshot plus quantity and order options.
///
/// Identity key is the product id; the store guarantees at most one
/// `CartItem` per id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Snapshot of the product at add time.
    pub product: Product,
    /// Quantity, always >= 1 while the item is in the cart.
    pub quantity: u32,
    /// Order-specific attributes from the first add.
    pub options: CartOptions,
}

/// A wishlist entry: a product snapshot plus the date it was saved.
///
/// Set semantics keyed by product id; no quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Snapshot of the product at save time.
    pub product: Product,
    /// Calendar date the product was saved.
    pub added_date: NaiveDate,
}

// =============================================================================
// Filter and Query Types
// =============================================================================

/// Product sort order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Newest,
    Rating,
}

impl SortKey {
    /// Parse from a URL/query parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-ascending" | "price_asc" => Self::PriceAsc,
            "price-descending" | "price_desc" => Self::PriceDesc,
            "newest" => Self::Newest,
            "rating" => Self::Rating,
            _ => Self::Featured,
        }
    }

    /// Convert to the wire parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Newest => "newest",
            Self::Rating => "rating",
        }
    }
}

/// Inclusive price bounds in the active currency; either end may be open.
/// An open end is simply omitted from the listing request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

impl PriceRange {
    /// Whether neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Selected filter values plus pagination, as held by the store.
///
/// Array fields are treated as unordered sets; the store does not
/// deduplicate them on behalf of callers.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub category: Vec<String>,
    pub sub_category: Vec<String>,
    pub metal_type: Vec<String>,
    pub stone_type: Vec<String>,
    pub style: Vec<String>,
    pub size: Vec<String>,
    pub color: Vec<String>,
    pub sort_by: SortKey,
    /// Price bounds in the active currency.
    pub price_range: PriceRange,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Currency the server should price the page in.
    pub currency: CurrencyCode,
}

impl FilterState {
    /// Default filter state for a given currency and page size.
    #[must_use]
    pub fn new(currency: CurrencyCode, limit: u32) -> Self {
        Self {
            category: Vec::new(),
            sub_category: Vec::new(),
            metal_type: Vec::new(),
            stone_type: Vec::new(),
            style: Vec::new(),
            size: Vec::new(),
            color: Vec::new(),
            sort_by: SortKey::default(),
            price_range: PriceRange::default(),
            page: 1,
            limit,
            currency,
        }
    }
}

/// Partial update to [`FilterState`]; `None` fields are left untouched.
///
/// Applying a patch that touches any non-pagination field resets `page`
/// to 1 in the same transition, since the result set may shrink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub category: Option<Vec<String>>,
    pub sub_category: Option<Vec<String>>,
    pub metal_type: Option<Vec<String>>,
    pub stone_type: Option<Vec<String>>,
    pub style: Option<Vec<String>>,
    pub size: Option<Vec<String>>,
    pub color: Option<Vec<String>>,
    pub sort_by: Option<SortKey>,
    /// `Some` replaces the whole range; an unbounded range clears it.
    pub price_range: Option<PriceRange>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl FilterPatch {
    /// Whether the patch touches anything other than pagination.
    #[must_use]
    pub const fn narrows_result_set(&self) -> bool {
        self.category.is_some()
            || self.sub_category.is_some()
            || self.metal_type.is_some()
            || self.stone_type.is_some()
            || self.style.is_some()
            || self.size.is_some()
            || self.color.is_some()
            || self.sort_by.is_some()
            || self.price_range.is_some()
    }
}

/// The query the retrieval pipeline sends to the listing endpoint.
///
/// Array selections are comma-joined; empty fields are omitted from the
/// request entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub category: Vec<String>,
    pub sub_category: Vec<String>,
    pub metal_type: Vec<String>,
    pub stone_type: Vec<String>,
    pub style: Vec<String>,
    pub size: Vec<String>,
    pub color: Vec<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: String,
    pub sort: SortKey,
    pub page: u32,
    pub limit: u32,
    pub currency: CurrencyCode,
}

impl ProductQuery {
    /// Render as query-string pairs for the listing request.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let list = |params: &mut Vec<(&'static str, String)>, key, values: &[String]| {
            if !values.is_empty() {
                params.push((key, values.join(",")));
            }
        };
        list(&mut params, "category", &self.category);
        list(&mut params, "subCategory", &self.sub_category);
        list(&mut params, "metalType", &self.metal_type);
        list(&mut params, "stoneType", &self.stone_type);
        list(&mut params, "style", &self.style);
        list(&mut params, "size", &self.size);
        list(&mut params, "color", &self.color);

        if let Some(min) = self.min_price {
            params.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            params.push(("maxPrice", max.to_string()));
        }
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        params.push(("sort", self.sort.as_str().to_owned()));
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.limit.to_string()));
        params.push(("currency", self.currency.code().to_owned()));
        params
    }
}

// =============================================================================
// Wire Envelopes
// =============================================================================

/// Listing response envelope: `{ "ornaments": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrnamentPage {
    /// The server's result page for the current query.
    pub ornaments: Vec<Product>,
}

/// Detail response envelope: `{ "ornament": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrnamentEnvelope {
    /// The requested product.
    pub ornament: Product,
}
