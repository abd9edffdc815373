//! Shopping cart.
//!
//! A cart is a list of lines keyed by product id and format. The storefront
//! keeps one cart per visitor session and replaces it wholesale on each
//! mutation, so every operation here is a plain in-memory transformation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ProductId;
use crate::catalog::{self, AffirmationFormat, CatalogError};

/// Session key under which the cart is persisted.
pub const CART_STORAGE_KEY: &str = "lunarituals_cart";

/// What kind of product a cart line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Affirmation,
    Affiliate,
}

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<AffirmationFormat>,
    pub image: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

impl CartItem {
    /// Identity of this line: `"{id}-{format or 'default'}"`.
    #[must_use]
    pub fn line_key(&self) -> String {
        line_key(&self.id, self.format)
    }

    /// Price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Build a line key from its parts.
#[must_use]
pub fn line_key(id: &ProductId, format: Option<AffirmationFormat>) -> String {
    format!(
        "{}-{}",
        id,
        format.map_or("default", AffirmationFormat::label)
    )
}

/// A cart line before it has a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub format: Option<AffirmationFormat>,
    pub image: String,
    pub item_type: ItemType,
}

impl NewCartItem {
    /// Resolve a cart line from the catalog, taking title, price and image
    /// from the catalog entry.
    ///
    /// Affirmations default to the Digital Download format. Lifestyle products
    /// take no format.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] if the id is not in the
    /// catalog, or [`CatalogError::UnsupportedFormat`] if the product is not
    /// sold in the requested format.
    pub fn from_catalog(
        id: &ProductId,
        format: Option<AffirmationFormat>,
    ) -> Result<Self, CatalogError> {
        if let Some(aff) = catalog::find_affirmation(id) {
            let format = format.unwrap_or(AffirmationFormat::DigitalDownload);
            if !aff.formats().contains(&format) {
                return Err(CatalogError::UnsupportedFormat {
                    product: id.to_string(),
                    format: format.to_string(),
                });
            }
            return Ok(Self {
                id: id.clone(),
                title: aff.title.to_owned(),
                price: format.price(),
                format: Some(format),
                image: aff.image.to_owned(),
                item_type: ItemType::Affirmation,
            });
        }

        if let Some(product) = catalog::find_lifestyle(id) {
            if let Some(format) = format {
                return Err(CatalogError::UnsupportedFormat {
                    product: id.to_string(),
                    format: format.to_string(),
                });
            }
            return Ok(Self {
                id: id.clone(),
                title: product.name.to_owned(),
                price: product.price(),
                format: None,
                image: product.image.to_owned(),
                item_type: ItemType::Affiliate,
            });
        }

        Err(CatalogError::UnknownProduct(id.to_string()))
    }
}

/// A visitor's cart plus the open state of the cart drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub is_open: bool,
}

impl Cart {
    /// Add one unit of an item. An existing line with the same key is
    /// incremented; otherwise a new line with quantity 1 is appended.
    /// Always opens the cart.
    pub fn add_item(&mut self, item: NewCartItem) {
        let key = line_key(&item.id, item.format);
        if let Some(existing) = self.items.iter_mut().find(|i| i.line_key() == key) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                id: item.id,
                title: item.title,
                price: item.price,
                quantity: 1,
                format: item.format,
                image: item.image,
                item_type: item.item_type,
            });
        }
        self.open();
    }

    /// Remove the line with the given key. Unknown keys are ignored.
    pub fn remove_item(&mut self, key: &str) {
        self.items.retain(|i| i.line_key() != key);
    }

    /// Set a line's quantity. Zero or negative removes the line.
    pub fn update_quantity(&mut self, key: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(key);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|i| i.line_key() == key) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    pub const fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub const fn open(&mut self) {
        self.is_open = true;
    }

    pub const fn close(&mut self) {
        self.is_open = false;
    }
}
