//! Variant selection for the product detail page.
//!
//! The shopper's metal choice is modeled as a derived view computed from
//! `(base product, selected variant key)` - the fetched entity is never
//! mutated, and the choice is explicit and replayable. Selecting a metal
//! re-enters the overridden view with new overrides; there is no
//! revert-to-base transition. Size selection is orthogonal state that
//! gates add-to-cart.

use thiserror::Error;

use crate::store::Action;
use crate::types::{CartOptions, Product, VariantLink};

/// Why an add-to-cart request was rejected before any dispatch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The product has multiple size options and none is selected.
    #[error("select a size before adding to cart")]
    SizeRequired,
}

/// What the detail page renders: the base product with any variant
/// overrides applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView<'a> {
    /// The underlying (unmodified) product.
    pub product: &'a Product,
    /// Cover image, possibly overridden by the selected variant.
    pub cover_image: Option<&'a str>,
    /// Gallery images; the variant's list when it supplies one, else the
    /// base product's.
    pub images: &'a [String],
    /// Metal label, possibly overridden by the selected variant.
    pub metal_label: Option<&'a str>,
}

/// Per-product-page selection state.
#[derive(Debug, Clone)]
pub struct DetailSelection {
    base: Product,
    selected_metal: Option<String>,
    selected_size: Option<String>,
}

impl DetailSelection {
    /// Start at the base state: the server-returned product as fetched.
    #[must_use]
    pub const fn new(base: Product) -> Self {
        Self {
            base,
            selected_metal: None,
            selected_size: None,
        }
    }

    /// The unmodified base product.
    #[must_use]
    pub const fn base(&self) -> &Product {
        &self.base
    }

    /// The currently selected metal key, if any.
    #[must_use]
    pub fn selected_metal(&self) -> Option<&str> {
        self.selected_metal.as_deref()
    }

    /// The currently selected size, if any.
    #[must_use]
    pub fn selected_size(&self) -> Option<&str> {
        self.selected_size.as_deref()
    }

    /// Select a metal variant by key. Returns `false` (leaving the
    /// selection unchanged) if the base product has no such variant.
    pub fn select_metal(&mut self, metal: &str) -> bool {
        if self.find_variant(metal).is_none() {
            return false;
        }
        self.selected_metal = Some(metal.to_owned());
        true
    }

    /// Select a size. Returns `false` if the size is not one of the
    /// product's options.
    pub fn select_size(&mut self, size: &str) -> bool {
        if !self.base.sizes.iter().any(|s| s == size) {
            return false;
        }
        self.selected_size = Some(size.to_owned());
        true
    }

    fn find_variant(&self, metal: &str) -> Option<&VariantLink> {
        self.base.variants.iter().find(|v| v.metal == metal)
    }

    /// Compute the view the detail page should render.
    #[must_use]
    pub fn view(&self) -> ProductView<'_> {
        let variant = self
            .selected_metal
            .as_deref()
            .and_then(|metal| self.find_variant(metal));

        variant.map_or_else(
            || ProductView {
                product: &self.base,
                cover_image: self.base.cover_image.as_deref(),
                images: &self.base.images,
                metal_label: self.base.metal_type.as_deref(),
            },
            |v| ProductView {
                product: &self.base,
                cover_image: v
                    .cover_image
                    .as_deref()
                    .or(self.base.cover_image.as_deref()),
                images: if v.images.is_empty() {
                    &self.base.images
                } else {
                    &v.images
                },
                metal_label: v.label.as_deref().or(Some(v.metal.as_str())),
            },
        )
    }

    /// Build the add-to-cart action for the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::SizeRequired`] when the product has more
    /// than one size option and none is selected; no dispatch should
    /// happen in that case.
    pub fn add_to_cart_action(&self, quantity: u32) -> Result<Action, SelectionError> {
        if self.base.sizes.len() > 1 && self.selected_size.is_none() {
            return Err(SelectionError::SizeRequired);
        }

        Ok(Action::AddToCart {
            product: Box::new(self.base.clone()),
            quantity,
            options: CartOptions {
                selected_size: self.selected_size.clone(),
                selected_metal: self.selected_metal.clone(),
                engraving: None,
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use auric_core::ProductId;

    use super::*;

    fn base_product() -> Product {
        Product {
            id: ProductId::new("orn_1"),
            name: "Eternity Ring".to_owned(),
            description: String::new(),
            price: Decimal::new(30000, 0),
            original_price: None,
            discount_percent: None,
            prices: std::collections::HashMap::new(),
            category: Some("rings".to_owned()),
            sub_category: None,
            metal_type: Some("Yellow Gold".to_owned()),
            stone_type: None,
            style: None,
            sizes: vec!["6".to_owned(), "7".to_owned()],
            colors: Vec::new(),
            stock: 5,
            cover_image: Some("base-cover.jpg".to_owned()),
            images: vec!["base-1.jpg".to_owned(), "base-2.jpg".to_owned()],
            variants: vec![
                VariantLink {
                    metal: "rose-gold".to_owned(),
                    product_id: Some(ProductId::new("orn_2")),
                    label: Some("18K Rose Gold".to_owned()),
                    cover_image: Some("rose-cover.jpg".to_owned()),
                    images: vec!["rose-1.jpg".to_owned()],
                },
                VariantLink {
                    metal: "white-gold".to_owned(),
                    product_id: None,
                    label: None,
                    cover_image: None,
                    images: Vec::new(),
                },
            ],
            rating: None,
            review_count: 0,
        }
    }

    #[test]
    fn test_base_view_uses_product_fields() {
        let selection = DetailSelection::new(base_product());
        let view = selection.view();

        assert_eq!(view.cover_image, Some("base-cover.jpg"));
        assert_eq!(view.images.len(), 2);
        assert_eq!(view.metal_label, Some("Yellow Gold"));
    }

    #[test]
    fn test_variant_overrides_images_and_metal() {
        let mut selection = DetailSelection::new(base_product());
        assert!(selection.select_metal("rose-gold"));

        let view = selection.view();
        assert_eq!(view.cover_image, Some("rose-cover.jpg"));
        assert_eq!(view.images, ["rose-1.jpg".to_owned()]);
        assert_eq!(view.metal_label, Some("18K Rose Gold"));
        // The base entity itself is untouched.
        assert_eq!(selection.base().cover_image.as_deref(), Some("base-cover.jpg"));
    }

    #[test]
    fn test_variant_without_images_falls_back_to_base() {
        let mut selection = DetailSelection::new(base_product());
        assert!(selection.select_metal("white-gold"));

        let view = selection.view();
        assert_eq!(view.cover_image, Some("base-cover.jpg"));
        assert_eq!(view.images.len(), 2);
        // No label on the variant: the metal key itself is shown.
        assert_eq!(view.metal_label, Some("white-gold"));
    }

    #[test]
    fn test_reselecting_swaps_overrides() {
        let mut selection = DetailSelection::new(base_product());
        selection.select_metal("rose-gold");
        selection.select_metal("white-gold");

        assert_eq!(selection.selected_metal(), Some("white-gold"));
        assert_eq!(selection.view().cover_image, Some("base-cover.jpg"));
    }

    #[test]
    fn test_unknown_metal_is_rejected() {
        let mut selection = DetailSelection::new(base_product());
        assert!(!selection.select_metal("platinum"));
        assert_eq!(selection.selected_metal(), None);
    }

    #[test]
    fn test_add_to_cart_requires_size_when_multiple() {
        let selection = DetailSelection::new(base_product());
        assert_eq!(
            selection.add_to_cart_action(1).unwrap_err(),
            SelectionError::SizeRequired
        );
    }

    #[test]
    fn test_add_to_cart_with_size_carries_options() {
        let mut selection = DetailSelection::new(base_product());
        assert!(selection.select_size("7"));
        selection.select_metal("rose-gold");

        let action = selection.add_to_cart_action(2).unwrap();
        match action {
            Action::AddToCart {
                product,
                quantity,
                options,
            } => {
                assert_eq!(product.id.as_str(), "orn_1");
                assert_eq!(quantity, 2);
                assert_eq!(options.selected_size.as_deref(), Some("7"));
                assert_eq!(options.selected_metal.as_deref(), Some("rose-gold"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_single_size_product_needs_no_selection() {
        let mut product = base_product();
        product.sizes = vec!["one-size".to_owned()];
        let selection = DetailSelection::new(product);

        assert!(selection.add_to_cart_action(1).is_ok());
    }

    #[test]
    fn test_invalid_size_rejected() {
        let mut selection = DetailSelection::new(base_product());
        assert!(!selection.select_size("12"));
        assert_eq!(selection.selected_size(), None);
    }
}
