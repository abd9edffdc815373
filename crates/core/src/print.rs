//! Print-on-demand listing configuration.
//!
//! Each affirmation can be listed as up to three physical print products.
//! This module holds the fixed pricing table and renders the listing payload
//! for one affirmation and product; submitting it to the fulfilment service
//! is left to the caller.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Affirmation;
use crate::types::{CurrencyCode, Price};

/// Physical print product offered through the fulfilment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrintProduct {
    #[serde(rename = "poster_unframed_18x24")]
    PosterUnframed18x24,
    #[serde(rename = "poster_canvas_18x24")]
    PosterCanvas18x24,
    #[serde(rename = "poster_framed_18x24")]
    PosterFramed18x24,
}

/// Pricing and catalog ids for a print product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintProductConfig {
    /// Product id in the fulfilment catalog.
    pub catalog_product_id: u32,
    /// Size variant id in the fulfilment catalog.
    pub variant_id: u32,
    /// Retail price charged to the customer.
    pub base_price: Decimal,
    /// Fulfilment cost.
    pub cost: Decimal,
    pub profit: Decimal,
    /// Whether listings are created for this product.
    pub enabled: bool,
}

impl PrintProduct {
    pub const ALL: [Self; 3] = [
        Self::PosterUnframed18x24,
        Self::PosterCanvas18x24,
        Self::PosterFramed18x24,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PosterUnframed18x24 => "poster_unframed_18x24",
            Self::PosterCanvas18x24 => "poster_canvas_18x24",
            Self::PosterFramed18x24 => "poster_framed_18x24",
        }
    }

    /// Display label used in listing titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PosterUnframed18x24 => "Unframed Poster",
            Self::PosterCanvas18x24 => "Canvas Print",
            Self::PosterFramed18x24 => "Framed Poster",
        }
    }

    #[must_use]
    pub fn config(self) -> PrintProductConfig {
        match self {
            Self::PosterUnframed18x24 => PrintProductConfig {
                catalog_product_id: 1,
                variant_id: 1,
                base_price: Decimal::new(4307, 2),
                cost: Decimal::new(1289, 2),
                profit: Decimal::new(2369, 2),
                enabled: true,
            },
            Self::PosterCanvas18x24 => PrintProductConfig {
                catalog_product_id: 3,
                variant_id: 7,
                base_price: Decimal::new(9811, 2),
                cost: Decimal::new(3366, 2),
                profit: Decimal::new(5396, 2),
                enabled: true,
            },
            Self::PosterFramed18x24 => PrintProductConfig {
                catalog_product_id: 2,
                variant_id: 3,
                base_price: Decimal::new(13307, 2),
                cost: Decimal::new(4539, 2),
                profit: Decimal::new(7319, 2),
                enabled: true,
            },
        }
    }

    const fn details(self) -> &'static str {
        match self {
            Self::PosterUnframed18x24 => {
                "This premium unframed poster (18\"×24\") is printed on high-quality enhanced matte paper with vibrant, long-lasting colors. Perfect for framing yourself or displaying as-is."
            }
            Self::PosterCanvas18x24 => {
                "This premium canvas print (18\"×24\") features a vivid, fade-resistant print on 1.25\" thick poly-cotton blend canvas, hand-stretched over solid wood stretcher bars. Mounting brackets included. Ready to hang."
            }
            Self::PosterFramed18x24 => {
                "This premium framed poster (18\"×24\") features enhanced matte paper in a sleek black frame. Ready to hang immediately—perfect for your home, office, or as a thoughtful gift."
            }
        }
    }

    /// Listing title: `"{title} - Premium {label}"`.
    #[must_use]
    pub fn title(self, affirmation_title: &str) -> String {
        format!("{affirmation_title} - Premium {}", self.label())
    }

    /// Listing description: the affirmation description, product details,
    /// and a closing quality line.
    #[must_use]
    pub fn description(self, affirmation_description: &str) -> String {
        format!(
            "{affirmation_description}\n\n{}\n\nPrinted on high-quality materials with vibrant, long-lasting colors.",
            self.details()
        )
    }
}

impl fmt::Display for PrintProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Products for which listings should be created.
#[must_use]
pub fn enabled_products() -> Vec<PrintProduct> {
    PrintProduct::ALL
        .into_iter()
        .filter(|p| p.config().enabled)
        .collect()
}

/// A listing payload ready to submit to the fulfilment service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintListing {
    pub affirmation_id: String,
    pub product: PrintProduct,
    pub title: String,
    pub description: String,
    pub catalog_product_id: u32,
    pub variant_id: u32,
    /// Two-decimal retail price, e.g. `"98.11"`.
    pub retail_price: String,
    pub image: String,
}

/// Render the listing for one affirmation and product.
#[must_use]
pub fn build_listing(affirmation: &Affirmation, product: PrintProduct) -> PrintListing {
    let config = product.config();
    PrintListing {
        affirmation_id: affirmation.id.to_owned(),
        product,
        title: product.title(affirmation.title),
        description: product.description(affirmation.description),
        catalog_product_id: config.catalog_product_id,
        variant_id: config.variant_id,
        retail_price: Price::new(config.base_price, CurrencyCode::USD).to_fixed(),
        image: affirmation.image.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::affirmations;

    #[test]
    fn test_all_products_enabled() {
        assert_eq!(enabled_products(), PrintProduct::ALL);
    }

    #[test]
    fn test_pricing_table() {
        let canvas = PrintProduct::PosterCanvas18x24.config();
        assert_eq!(canvas.catalog_product_id, 3);
        assert_eq!(canvas.variant_id, 7);
        assert_eq!(canvas.base_price.to_string(), "98.11");

        let framed = PrintProduct::PosterFramed18x24.config();
        assert_eq!(framed.cost.to_string(), "45.39");
        assert_eq!(framed.profit.to_string(), "73.19");
    }

    #[test]
    fn test_listing_templates() {
        let aff = &affirmations()[0];
        let listing = build_listing(aff, PrintProduct::PosterUnframed18x24);

        assert_eq!(listing.title, "I am worthy of rest - Premium Unframed Poster");
        assert!(listing.description.starts_with(aff.description));
        assert!(listing.description.contains("enhanced matte paper"));
        assert!(listing.description.ends_with(
            "\n\nPrinted on high-quality materials with vibrant, long-lasting colors."
        ));
        assert_eq!(listing.retail_price, "43.07");
        assert_eq!(listing.variant_id, 1);
    }

    #[test]
    fn test_listing_serializes_product_key() {
        let listing = build_listing(&affirmations()[1], PrintProduct::PosterCanvas18x24);
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["product"], "poster_canvas_18x24");
        assert_eq!(json["retail_price"], "98.11");
    }
}
