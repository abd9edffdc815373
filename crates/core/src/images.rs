//! Product image ordering and selection.
//!
//! Image rows live in the storefront database; this module holds the pure
//! rules applied to them once fetched: preference ordering per category, the
//! locally bundled digital renders for affirmations, and display-variation
//! fallback.

use core::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::LifestyleKind;
use crate::{ImageId, ProductId};

/// Product family an image row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Affirmations,
    Candles,
    Books,
    Supplements,
    Fashion,
}

impl ProductCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Affirmations => "affirmations",
            Self::Candles => "candles",
            Self::Books => "books",
            Self::Supplements => "supplements",
            Self::Fashion => "fashion",
        }
    }

    /// Variation types in display preference order.
    #[must_use]
    pub const fn preference_order(self) -> &'static [ImageVariation] {
        match self {
            Self::Affirmations => AFFIRMATION_ORDER,
            Self::Candles | Self::Books | Self::Supplements | Self::Fashion => LIFESTYLE_ORDER,
        }
    }
}

const AFFIRMATION_ORDER: &[ImageVariation] = &[
    ImageVariation::Digital,
    ImageVariation::Canvas,
    ImageVariation::Unframed,
    ImageVariation::Framed,
];

const LIFESTYLE_ORDER: &[ImageVariation] = &[
    ImageVariation::Original,
    ImageVariation::Lifestyle,
    ImageVariation::Detail,
    ImageVariation::Styled,
];

impl From<LifestyleKind> for ProductCategory {
    fn from(kind: LifestyleKind) -> Self {
        match kind {
            LifestyleKind::Candle => Self::Candles,
            LifestyleKind::Book => Self::Books,
            LifestyleKind::Supplement => Self::Supplements,
            LifestyleKind::Fashion => Self::Fashion,
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`ProductCategory`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown product category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "affirmations" => Ok(Self::Affirmations),
            "candles" => Ok(Self::Candles),
            "books" => Ok(Self::Books),
            "supplements" => Ok(Self::Supplements),
            "fashion" => Ok(Self::Fashion),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}

/// Kind of render stored for a product.
///
/// Unrecognized values read from the database are kept verbatim in
/// [`ImageVariation::Other`] and sort after every known variation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageVariation {
    Digital,
    Canvas,
    Unframed,
    Framed,
    Original,
    Lifestyle,
    Detail,
    Styled,
    Other(String),
}

impl ImageVariation {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Digital => "digital",
            Self::Canvas => "canvas",
            Self::Unframed => "unframed",
            Self::Framed => "framed",
            Self::Original => "original",
            Self::Lifestyle => "lifestyle",
            Self::Detail => "detail",
            Self::Styled => "styled",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ImageVariation {
    fn from(s: String) -> Self {
        match s.as_str() {
            "digital" => Self::Digital,
            "canvas" => Self::Canvas,
            "unframed" => Self::Unframed,
            "framed" => Self::Framed,
            "original" => Self::Original,
            "lifestyle" => Self::Lifestyle,
            "detail" => Self::Detail,
            "styled" => Self::Styled,
            _ => Self::Other(s),
        }
    }
}

impl From<ImageVariation> for String {
    fn from(v: ImageVariation) -> Self {
        v.as_str().to_owned()
    }
}

impl fmt::Display for ImageVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical variation shown as an affirmation's primary image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayVariation {
    Canvas,
    Unframed,
    Framed,
}

impl DisplayVariation {
    pub const ALL: [Self; 3] = [Self::Canvas, Self::Unframed, Self::Framed];

    #[must_use]
    pub const fn variation(self) -> ImageVariation {
        match self {
            Self::Canvas => ImageVariation::Canvas,
            Self::Unframed => ImageVariation::Unframed,
            Self::Framed => ImageVariation::Framed,
        }
    }

    /// Inverse of [`Self::variation`].
    #[must_use]
    pub const fn from_variation(v: &ImageVariation) -> Option<Self> {
        match v {
            ImageVariation::Canvas => Some(Self::Canvas),
            ImageVariation::Unframed => Some(Self::Unframed),
            ImageVariation::Framed => Some(Self::Framed),
            _ => None,
        }
    }
}

/// A stored product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// `None` for images that are bundled with the storefront rather than
    /// stored as rows.
    pub id: Option<ImageId>,
    pub product_id: ProductId,
    pub product_category: ProductCategory,
    pub variation_type: ImageVariation,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Position of a variation within a category's preference order. Unknown
/// variations rank 999.
#[must_use]
pub fn variation_rank(category: ProductCategory, variation: &ImageVariation) -> usize {
    category
        .preference_order()
        .iter()
        .position(|v| v == variation)
        .unwrap_or(999)
}

/// Stable-sort images by their category's preference order.
pub fn sort_images(category: ProductCategory, images: &mut [ProductImage]) {
    images.sort_by_key(|img| variation_rank(category, &img.variation_type));
}

// =============================================================================
// Bundled digital renders
// =============================================================================

/// Affirmations that ship with a bundled high-resolution digital render.
const LOCAL_DIGITAL_IDS: &[&str] = &[
    "aff-001", "aff-002", "aff-003", "aff-004", "aff-005", "aff-006", "aff-007", "aff-009",
    "aff-010", "aff-011", "aff-012", "aff-013", "aff-015", "aff-016", "aff-017", "aff-018",
    "aff-019", "aff-020", "aff-021", "aff-022", "aff-023", "aff-024",
];

/// URL of the bundled digital render for an affirmation, if one exists.
#[must_use]
pub fn local_digital_image(product_id: &ProductId) -> Option<String> {
    LOCAL_DIGITAL_IDS
        .contains(&product_id.as_str())
        .then(|| format!("/static/images/affirmations/digital/affirmation-digital-{product_id}.png"))
}

/// Full ordered image list for a product.
///
/// For affirmations without a `digital` row, the bundled digital render (if
/// any) is prepended as a synthetic entry before ordering.
#[must_use]
pub fn assemble_images(
    product_id: &ProductId,
    category: ProductCategory,
    mut images: Vec<ProductImage>,
    now: DateTime<Utc>,
) -> Vec<ProductImage> {
    let has_digital = images
        .iter()
        .any(|i| i.variation_type == ImageVariation::Digital);
    if category == ProductCategory::Affirmations
        && !has_digital
        && let Some(url) = local_digital_image(product_id)
    {
        images.insert(
            0,
            ProductImage {
                id: None,
                product_id: product_id.clone(),
                product_category: category,
                variation_type: ImageVariation::Digital,
                image_url: url,
                created_at: now,
            },
        );
    }
    sort_images(category, &mut images);
    images
}

/// Pick the display image for `target`, falling back to any physical
/// variation.
#[must_use]
pub fn select_display_image(
    images: &[ProductImage],
    target: DisplayVariation,
) -> Option<(DisplayVariation, &ProductImage)> {
    let wanted = target.variation();
    images
        .iter()
        .find(|i| i.variation_type == wanted)
        .map(|i| (target, i))
        .or_else(|| {
            images.iter().find_map(|i| {
                DisplayVariation::from_variation(&i.variation_type).map(|v| (v, i))
            })
        })
}

/// Candidate URLs for a random product image: the bundled digital render
/// for affirmations, then every stored image.
#[must_use]
pub fn random_image_pool(
    product_id: &ProductId,
    category: ProductCategory,
    images: &[ProductImage],
) -> Vec<String> {
    let local = (category == ProductCategory::Affirmations)
        .then(|| local_digital_image(product_id))
        .flatten();
    local
        .into_iter()
        .chain(images.iter().map(|i| i.image_url.clone()))
        .collect()
}
