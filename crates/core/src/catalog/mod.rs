//! Static product catalog.
//!
//! The catalog is compiled into the binary: affirmation art (sold in four
//! formats) and curated lifestyle products sold through affiliate links.
//! Listing, search, and lookup all operate on `&'static` data.

mod affirmations;
mod lifestyle;

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ProductId;

/// Errors raised when resolving catalog entries.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product with this id exists.
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// The product is not sold in the requested format.
    #[error("product {product} is not available as {format}")]
    UnsupportedFormat {
        /// Product id.
        product: String,
        /// Requested format label.
        format: String,
    },

    /// Unrecognized category name.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Unrecognized format label.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// Unrecognized lifestyle kind.
    #[error("unknown lifestyle kind: {0}")]
    UnknownKind(String),
}

// =============================================================================
// Affirmations
// =============================================================================

/// Affirmation collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffirmationCategory {
    #[serde(rename = "Self-Love")]
    SelfLove,
    Abundance,
    Rest,
    Joy,
    Strength,
}

impl AffirmationCategory {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::SelfLove,
        Self::Abundance,
        Self::Rest,
        Self::Joy,
        Self::Strength,
    ];

    /// Display name, e.g. `"Self-Love"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SelfLove => "Self-Love",
            Self::Abundance => "Abundance",
            Self::Rest => "Rest",
            Self::Joy => "Joy",
            Self::Strength => "Strength",
        }
    }
}

impl fmt::Display for AffirmationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AffirmationCategory {
    type Err = CatalogError;

    /// Accepts the display name or its lowercase slug (`self-love`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_owned()))
    }
}

/// A purchasable format of an affirmation design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffirmationFormat {
    #[serde(rename = "Digital Download")]
    DigitalDownload,
    #[serde(rename = "Canvas Print")]
    CanvasPrint,
    #[serde(rename = "Unframed Poster")]
    UnframedPoster,
    #[serde(rename = "Framed Poster")]
    FramedPoster,
}

impl AffirmationFormat {
    /// Every affirmation is sold in all four formats.
    pub const ALL: [Self; 4] = [
        Self::DigitalDownload,
        Self::CanvasPrint,
        Self::UnframedPoster,
        Self::FramedPoster,
    ];

    /// Display label, also used as the cart line format.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DigitalDownload => "Digital Download",
            Self::CanvasPrint => "Canvas Print",
            Self::UnframedPoster => "Unframed Poster",
            Self::FramedPoster => "Framed Poster",
        }
    }

    /// Fixed retail price in USD.
    #[must_use]
    pub fn price(self) -> Decimal {
        match self {
            Self::DigitalDownload => Decimal::new(1199, 2),
            Self::CanvasPrint => Decimal::new(8999, 2),
            Self::UnframedPoster => Decimal::new(3999, 2),
            Self::FramedPoster => Decimal::new(12999, 2),
        }
    }
}

impl fmt::Display for AffirmationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AffirmationFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownFormat(s.to_owned()))
    }
}

/// An affirmation art design.
#[derive(Debug, Clone, Serialize)]
pub struct Affirmation {
    pub id: &'static str,
    pub title: &'static str,
    pub category: AffirmationCategory,
    pub description: &'static str,
    pub image: &'static str,
    pub featured: bool,
    pub tags: &'static [&'static str],
    pub rating: f32,
    pub review_count: u32,
    pub badge: Option<&'static str>,
}

impl Affirmation {
    /// Base price, which is the Digital Download price.
    #[must_use]
    pub fn price(&self) -> Decimal {
        AffirmationFormat::DigitalDownload.price()
    }

    /// Formats this design is sold in.
    #[must_use]
    pub const fn formats(&self) -> &'static [AffirmationFormat] {
        &AffirmationFormat::ALL
    }
}

// =============================================================================
// Lifestyle products
// =============================================================================

/// Kind of curated lifestyle product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifestyleKind {
    Candle,
    Book,
    Supplement,
    Fashion,
}

impl FromStr for LifestyleKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "candle" | "candles" => Ok(Self::Candle),
            "book" | "books" => Ok(Self::Book),
            "supplement" | "supplements" => Ok(Self::Supplement),
            "fashion" => Ok(Self::Fashion),
            _ => Err(CatalogError::UnknownKind(s.to_owned())),
        }
    }
}

/// A third-party product sold through an affiliate link.
#[derive(Debug, Clone, Serialize)]
pub struct LifestyleProduct {
    pub id: &'static str,
    pub kind: LifestyleKind,
    pub name: &'static str,
    /// Brand or author.
    pub maker: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub price_cents: u32,
    pub image: &'static str,
    pub affiliate_url: Option<&'static str>,
}

impl LifestyleProduct {
    /// Listed price in USD.
    #[must_use]
    pub fn price(&self) -> Decimal {
        Decimal::new(i64::from(self.price_cents), 2)
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    /// Reverse catalog order.
    Newest,
}

/// Affirmation listing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// `None` lists every category.
    pub category: Option<AffirmationCategory>,
    pub search: Option<String>,
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Build a query from raw listing parameters. `"All"` disables the
    /// category filter.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] for an unrecognized category.
    pub fn from_params(
        category: Option<&str>,
        search: Option<String>,
        sort: SortOption,
    ) -> Result<Self, CatalogError> {
        let category = match category.map(str::trim) {
            None | Some("") => None,
            Some(c) if c.eq_ignore_ascii_case("all") => None,
            Some(c) => Some(c.parse()?),
        };
        Ok(Self {
            category,
            search,
            sort,
        })
    }
}

/// All affirmations in catalog order.
#[must_use]
pub fn affirmations() -> &'static [Affirmation] {
    affirmations::AFFIRMATIONS
}

/// All lifestyle products in catalog order.
#[must_use]
pub fn lifestyle_products() -> &'static [LifestyleProduct] {
    lifestyle::LIFESTYLE
}

/// Lifestyle products, optionally restricted to one kind.
#[must_use]
pub fn lifestyle_by_kind(kind: Option<LifestyleKind>) -> Vec<&'static LifestyleProduct> {
    lifestyle_products()
        .iter()
        .filter(|p| kind.is_none_or(|k| p.kind == k))
        .collect()
}

/// Look up an affirmation by id.
#[must_use]
pub fn find_affirmation(id: &ProductId) -> Option<&'static Affirmation> {
    affirmations().iter().find(|a| a.id == id.as_str())
}

/// Look up a lifestyle product by id.
#[must_use]
pub fn find_lifestyle(id: &ProductId) -> Option<&'static LifestyleProduct> {
    lifestyle_products().iter().find(|p| p.id == id.as_str())
}

/// Filter, search and sort the affirmation catalog.
#[must_use]
pub fn list_affirmations(query: &CatalogQuery) -> Vec<&'static Affirmation> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut items: Vec<&'static Affirmation> = affirmations()
        .iter()
        .filter(|a| query.category.is_none_or(|c| a.category == c))
        .filter(|a| {
            needle.as_deref().is_none_or(|n| {
                a.title.to_lowercase().contains(n) || a.description.to_lowercase().contains(n)
            })
        })
        .collect();

    match query.sort {
        SortOption::Featured => {}
        SortOption::PriceLow => items.sort_by_key(|a| a.price()),
        SortOption::PriceHigh => items.sort_by_key(|a| core::cmp::Reverse(a.price())),
        SortOption::Newest => items.reverse(),
    }

    items
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    #[test]
    fn test_catalog_ids_are_valid_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for a in affirmations() {
            assert!(ProductId::parse(a.id).is_ok(), "{}", a.id);
            assert!(seen.insert(a.id), "duplicate {}", a.id);
        }
        for p in lifestyle_products() {
            assert!(ProductId::parse(p.id).is_ok(), "{}", p.id);
            assert!(seen.insert(p.id), "duplicate {}", p.id);
        }
        assert_eq!(affirmations().len(), 24);
    }

    #[test]
    fn test_format_pricing() {
        assert_eq!(AffirmationFormat::DigitalDownload.price().to_string(), "11.99");
        assert_eq!(AffirmationFormat::CanvasPrint.price().to_string(), "89.99");
        assert_eq!(AffirmationFormat::UnframedPoster.price().to_string(), "39.99");
        assert_eq!(AffirmationFormat::FramedPoster.price().to_string(), "129.99");
        assert_eq!(affirmations()[0].price(), Decimal::new(1199, 2));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(
            "Self-Love".parse::<AffirmationCategory>().unwrap(),
            AffirmationCategory::SelfLove
        );
        assert_eq!(
            "self-love".parse::<AffirmationCategory>().unwrap(),
            AffirmationCategory::SelfLove
        );
        assert!("Gratitude".parse::<AffirmationCategory>().is_err());
        assert_eq!(
            serde_json::to_string(&AffirmationCategory::SelfLove).unwrap(),
            "\"Self-Love\""
        );
    }

    #[test]
    fn test_all_category_means_no_filter() {
        let q = CatalogQuery::from_params(Some("All"), None, SortOption::Featured).unwrap();
        assert_eq!(q.category, None);
        assert_eq!(list_affirmations(&q).len(), affirmations().len());
    }

    #[test]
    fn test_category_filter() {
        let q = CatalogQuery::from_params(Some("Rest"), None, SortOption::Featured).unwrap();
        let items = list_affirmations(&q);
        assert!(!items.is_empty());
        assert!(items.iter().all(|a| a.category == AffirmationCategory::Rest));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let q = CatalogQuery {
            search: Some("WORTHY OF REST".into()),
            ..CatalogQuery::default()
        };
        let items = list_affirmations(&q);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "aff-001");
    }

    #[test]
    fn test_search_matches_description() {
        let q = CatalogQuery {
            search: Some("birthright".into()),
            ..CatalogQuery::default()
        };
        let ids: Vec<_> = list_affirmations(&q).iter().map(|a| a.id).collect();
        assert!(ids.contains(&"aff-001"));
        assert!(ids.contains(&"aff-002"));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let q = CatalogQuery {
            search: Some("   ".into()),
            ..CatalogQuery::default()
        };
        assert_eq!(list_affirmations(&q).len(), affirmations().len());
    }

    #[test]
    fn test_newest_reverses_catalog_order() {
        let q = CatalogQuery {
            sort: SortOption::Newest,
            ..CatalogQuery::default()
        };
        let items = list_affirmations(&q);
        assert_eq!(items[0].id, affirmations().last().unwrap().id);
        assert_eq!(items.last().unwrap().id, "aff-001");
    }

    #[test]
    fn test_price_sort_is_stable() {
        let q = CatalogQuery {
            sort: SortOption::PriceHigh,
            ..CatalogQuery::default()
        };
        let items = list_affirmations(&q);
        assert_eq!(items[0].id, "aff-001");
    }

    #[test]
    fn test_sort_option_serde() {
        let s: SortOption = serde_json::from_str("\"price-low\"").unwrap();
        assert_eq!(s, SortOption::PriceLow);
    }

    #[test]
    fn test_find_and_kind_filter() {
        assert!(find_affirmation(&pid("aff-010")).is_some());
        assert!(find_affirmation(&pid("aff-999")).is_none());
        assert!(find_lifestyle(&pid("book-001")).is_some());

        let books = lifestyle_by_kind(Some(LifestyleKind::Book));
        assert_eq!(books.len(), 6);
        assert_eq!(lifestyle_by_kind(None).len(), lifestyle_products().len());
        assert_eq!("Supplements".parse::<LifestyleKind>().unwrap(), LifestyleKind::Supplement);
    }

    #[test]
    fn test_fashion_products() {
        assert_eq!("fashion".parse::<LifestyleKind>().unwrap(), LifestyleKind::Fashion);

        let fashion = lifestyle_by_kind(Some(LifestyleKind::Fashion));
        assert_eq!(fashion.len(), 24);
        assert!(fashion.iter().all(|p| p.id.starts_with("fsh-")));

        let blouse = find_lifestyle(&pid("fsh-001")).unwrap();
        assert_eq!(blouse.name, "Elegant Lace Sleeve Blouse");
        assert_eq!(blouse.price().to_string(), "9.99");
    }
}
