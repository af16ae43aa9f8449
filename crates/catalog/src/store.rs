//! The catalog store: single source of truth for products, cart, wishlist,
//! and filter/pagination state.
//!
//! All mutation goes through [`CatalogStore::dispatch`]; transitions are
//! pure functions over in-memory state and total - malformed ids are
//! no-ops, nothing panics. Derived views (`cart_total`, `cart_count`,
//! `filtered_products`, ...) are synchronous reads recomputed from state.
//!
//! [`SharedStore`] wraps the store in `Arc<Mutex<..>>` so the retrieval
//! pipeline and any number of views can hold a reference; it is injected
//! by constructor rather than living as an ambient global.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use auric_core::{CurrencyCode, ProductId};

use crate::types::{
    CartItem, CartOptions, FilterPatch, FilterState, Product, ProductQuery, WishlistItem,
};

// =============================================================================
// Actions
// =============================================================================

/// A state transition request for the catalog store.
///
/// Dispatches are applied atomically and in the order issued; there is no
/// other way to mutate the store.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the product list verbatim with a server result page.
    SetProducts(Vec<Product>),
    /// Add a product to the cart, merging by product id.
    ///
    /// `quantity` is expected to be >= 1; the store does not reject
    /// non-positive values itself (that check belongs at the UI boundary).
    AddToCart {
        product: Box<Product>,
        quantity: u32,
        options: CartOptions,
    },
    /// Set a cart line's quantity to `max(0, quantity)`; lines that reach
    /// 0 are removed in the same transition.
    UpdateCartQuantity { id: ProductId, quantity: i64 },
    /// Remove a cart line; no-op if absent.
    RemoveFromCart(ProductId),
    /// Empty the cart unconditionally.
    ClearCart,
    /// Add a product to the wishlist; no-op if already present.
    AddToWishlist(Box<Product>),
    /// Remove a wishlist entry; no-op if absent.
    RemoveFromWishlist(ProductId),
    /// Empty the wishlist unconditionally.
    ClearWishlist,
    /// Replace the search text; resets pagination to page 1.
    SetSearchQuery(String),
    /// Shallow-merge a partial filter update; any non-pagination change
    /// resets pagination to page 1.
    SetFilters(FilterPatch),
    /// Navigate to a page (1-based; 0 is clamped to 1).
    SetPage(u32),
    /// Switch the active display currency.
    SetCurrency(CurrencyCode),
    /// Restore filters and search to defaults; currency and page size are
    /// a separate concern and survive the reset.
    ResetFilters,
}

// =============================================================================
// CatalogStore
// =============================================================================

/// The centralized cart/wishlist/filter state container.
///
/// Created once at application start with empty cart/wishlist and default
/// filters; lives for the session. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    cart: Vec<CartItem>,
    wishlist: Vec<WishlistItem>,
    search_query: String,
    filters: FilterState,
}

impl CatalogStore {
    /// Create an empty store for the given currency and page size.
    #[must_use]
    pub fn new(currency: CurrencyCode, page_limit: u32) -> Self {
        Self {
            products: Vec::new(),
            cart: Vec::new(),
            wishlist: Vec::new(),
            search_query: String::new(),
            filters: FilterState::new(currency, page_limit),
        }
    }

    /// Apply an action to the store.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetProducts(products) => self.products = products,
            Action::AddToCart {
                product,
                quantity,
                options,
            } => self.add_to_cart(*product, quantity, options),
            Action::UpdateCartQuantity { id, quantity } => {
                self.update_cart_quantity(&id, quantity);
            }
            Action::RemoveFromCart(id) => self.cart.retain(|item| item.product.id != id),
            Action::ClearCart => self.cart.clear(),
            Action::AddToWishlist(product) => {
                self.add_to_wishlist(*product, Local::now().date_naive());
            }
            Action::RemoveFromWishlist(id) => {
                self.wishlist.retain(|item| item.product.id != id);
            }
            Action::ClearWishlist => self.wishlist.clear(),
            Action::SetSearchQuery(text) => {
                self.search_query = text;
                self.filters.page = 1;
            }
            Action::SetFilters(patch) => self.apply_filter_patch(patch),
            Action::SetPage(page) => self.filters.page = page.max(1),
            Action::SetCurrency(currency) => self.filters.currency = currency,
            Action::ResetFilters => {
                let currency = self.filters.currency;
                let limit = self.filters.limit;
                self.filters = FilterState::new(currency, limit);
                self.search_query.clear();
            }
        }
    }

    fn add_to_cart(&mut self, product: Product, quantity: u32, options: CartOptions) {
        if let Some(item) = self.cart.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            self.cart.push(CartItem {
                product,
                quantity,
                options,
            });
        }
    }

    fn update_cart_quantity(&mut self, id: &ProductId, quantity: i64) {
        let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        if let Some(item) = self.cart.iter_mut().find(|i| i.product.id == *id) {
            item.quantity = quantity;
        }
        // Auto-prune: a line at quantity 0 leaves the cart in the same transition.
        self.cart.retain(|item| item.quantity > 0);
    }

    /// Add a product to the wishlist with an explicit date. Idempotent on
    /// product id; exposed for deterministic replay in tests.
    pub fn add_to_wishlist(&mut self, product: Product, added_date: NaiveDate) {
        if self.is_in_wishlist(&product.id) {
            return;
        }
        self.wishlist.push(WishlistItem {
            product,
            added_date,
        });
    }

    fn apply_filter_patch(&mut self, patch: FilterPatch) {
        let reset_page = patch.narrows_result_set();

        let f = &mut self.filters;
        if let Some(v) = patch.category {
            f.category = v;
        }
        if let Some(v) = patch.sub_category {
            f.sub_category = v;
        }
        if let Some(v) = patch.metal_type {
            f.metal_type = v;
        }
        if let Some(v) = patch.stone_type {
            f.stone_type = v;
        }
        if let Some(v) = patch.style {
            f.style = v;
        }
        if let Some(v) = patch.size {
            f.size = v;
        }
        if let Some(v) = patch.color {
            f.color = v;
        }
        if let Some(v) = patch.sort_by {
            f.sort_by = v;
        }
        if let Some(v) = patch.price_range {
            f.price_range = v;
        }
        if let Some(v) = patch.limit {
            f.limit = v;
        }
        if let Some(v) = patch.page {
            f.page = v.max(1);
        }
        // The result set may shrink below (page-1)*limit after any filter
        // change, so pagination restarts unless the patch was pure paging.
        if reset_page {
            f.page = 1;
        }
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// The current product list (the last applied server page).
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The current cart lines.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// The current wishlist entries.
    #[must_use]
    pub fn wishlist(&self) -> &[WishlistItem] {
        &self.wishlist
    }

    /// The current free-text search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The current filter/pagination state.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    /// Sum of base price x quantity over all cart lines.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart
            .iter()
            .map(|item| item.product.price * Decimal::from(item.quantity))
            .sum()
    }

    /// Total quantity across all cart lines (the cart badge number).
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.cart.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Number of wishlist entries.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Whether a product id is on the wishlist.
    #[must_use]
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist.iter().any(|item| item.product.id == *id)
    }

    /// Look up a product in the current list by id.
    #[must_use]
    pub fn product_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Client-side refinement of the fetched list: case-insensitive
    /// substring match of the search text against name, description, and
    /// category. Layered on top of the server-side filter, not a
    /// replacement for it.
    #[must_use]
    pub fn filtered_products(&self) -> Vec<&Product> {
        let needle = self.search_query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Build the listing query for the retrieval pipeline from the current
    /// filter and search state.
    #[must_use]
    pub fn query(&self) -> ProductQuery {
        let f = &self.filters;
        ProductQuery {
            category: f.category.clone(),
            sub_category: f.sub_category.clone(),
            metal_type: f.metal_type.clone(),
            stone_type: f.stone_type.clone(),
            style: f.style.clone(),
            size: f.size.clone(),
            color: f.color.clone(),
            min_price: f.price_range.min,
            max_price: f.price_range.max,
            search: self.search_query.trim().to_owned(),
            sort: f.sort_by,
            page: f.page,
            limit: f.limit,
            currency: f.currency,
        }
    }
}

// =============================================================================
// SharedStore
// =============================================================================

/// Thread-safe handle to a [`CatalogStore`].
///
/// Cheaply cloneable; the pipeline and views each hold a clone. Dispatches
/// are serialized by the mutex, so they apply atomically and in issue
/// order from any single call site.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<CatalogStore>>,
}

impl SharedStore {
    /// Wrap a store for shared access.
    #[must_use]
    pub fn new(store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CatalogStore> {
        // A panic mid-dispatch cannot leave partial state worth rejecting;
        // recover the guard instead of poisoning every later caller.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply an action to the underlying store.
    pub fn dispatch(&self, action: Action) {
        self.lock().dispatch(action);
    }

    /// Read from the store through a closure, holding the lock only for
    /// its duration.
    pub fn read<R>(&self, f: impl FnOnce(&CatalogStore) -> R) -> R {
        f(&self.lock())
    }
}
