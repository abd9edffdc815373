//! Seed product image rows from a YAML file.
//!
//! # File Format
//!
//! ```yaml
//! images:
//!   - product_id: aff-001
//!     category: affirmations
//!     variation: canvas
//!     url: https://cdn.lunarituals.com/aff-001/canvas.jpg
//! ```

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info, warn};

use luna_rituals_core::ProductId;
use luna_rituals_core::images::{ImageVariation, ProductCategory};
use luna_rituals_storefront::db::{self, ProductImageRepository, RepositoryError};
use luna_rituals_storefront::db::product_images::NewProductImage;

/// Top-level seed file.
#[derive(Debug, Deserialize)]
pub struct ImageSeedFile {
    pub images: Vec<ImageSeed>,
}

/// One image entry.
#[derive(Debug, Deserialize)]
pub struct ImageSeed {
    pub product_id: ProductId,
    pub category: ProductCategory,
    pub variation: ImageVariation,
    pub url: String,
}

impl From<ImageSeed> for NewProductImage {
    fn from(seed: ImageSeed) -> Self {
        Self {
            product_id: seed.product_id,
            product_category: seed.category,
            variation_type: seed.variation,
            image_url: seed.url,
        }
    }
}

/// Seeding outcome counts.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub inserted: usize,
    pub skipped: usize,
    pub cleared: u64,
}

/// Problems that make a seed file unusable before touching the database.
#[must_use]
pub fn validate(file: &ImageSeedFile) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();

    for (i, image) in file.images.iter().enumerate() {
        if image.url.trim().is_empty() {
            errors.push(format!("entry {i} ({}): empty url", image.product_id));
        }
        let key = (
            image.product_id.as_str(),
            image.category.as_str(),
            image.variation.as_str(),
            image.url.as_str(),
        );
        if !seen.insert(key) {
            errors.push(format!("entry {i} ({}): duplicate image", image.product_id));
        }
    }

    errors
}

/// Parse a seed file.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or an entry has an invalid
/// product id or category.
pub fn parse(content: &str) -> Result<ImageSeedFile, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

/// Seed product images from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML seed file
/// * `clear_existing` - If true, delete existing rows of each seeded product first
///
/// # Errors
///
/// Returns an error if the file cannot be read or validated, or the database
/// is unreachable. Duplicate rows are skipped, not errors.
pub async fn images(
    file_path: &Path,
    clear_existing: bool,
) -> Result<SeedSummary, Box<dyn std::error::Error>> {
    info!(path = %file_path.display(), "Loading product images from file");

    let content = tokio::fs::read_to_string(file_path).await?;
    let file = parse(&content)?;
    info!(images = file.images.len(), "Parsed seed file");

    let errors = validate(&file);
    if !errors.is_empty() {
        error!("Seed file validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(format!("{} validation errors found", errors.len()).into());
    }

    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let repo = ProductImageRepository::new(&pool);
    let mut summary = SeedSummary::default();

    if clear_existing {
        let products: HashSet<(ProductId, ProductCategory)> = file
            .images
            .iter()
            .map(|i| (i.product_id.clone(), i.category))
            .collect();
        for (product_id, category) in &products {
            summary.cleared += repo.delete_for_product(product_id, *category).await?;
        }
        info!(rows = summary.cleared, "Cleared existing images");
    }

    for seed in file.images {
        let image = NewProductImage::from(seed);
        match repo.insert(&image).await {
            Ok(_) => summary.inserted += 1,
            Err(RepositoryError::Conflict(msg)) => {
                warn!("Skipping existing image: {msg}");
                summary.skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!("Seeding complete!");
    info!("  Images inserted: {}", summary.inserted);
    info!("  Images skipped (already exist): {}", summary.skipped);

    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const SEED: &str = r"
images:
  - product_id: aff-001
    category: affirmations
    variation: canvas
    url: https://cdn.example.com/aff-001/canvas.jpg
  - product_id: cnd-002
    category: candles
    variation: lifestyle
    url: https://cdn.example.com/cnd-002/lifestyle.jpg
";

    #[test]
    fn test_parse_seed_file() {
        let file = parse(SEED).unwrap();
        assert_eq!(file.images.len(), 2);
        assert_eq!(file.images[0].variation, ImageVariation::Canvas);
        assert_eq!(file.images[1].category, ProductCategory::Candles);
        assert!(validate(&file).is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_ids_and_categories() {
        let bad_id = SEED.replace("aff-001", "AFF 001");
        assert!(parse(&bad_id).is_err());

        let bad_category = SEED.replace("candles", "crystals");
        assert!(parse(&bad_category).is_err());
    }

    #[test]
    fn test_validate_flags_duplicates_and_empty_urls() {
        let file = parse(
            r"
images:
  - product_id: aff-001
    category: affirmations
    variation: framed
    url: https://cdn.example.com/a.jpg
  - product_id: aff-001
    category: affirmations
    variation: framed
    url: https://cdn.example.com/a.jpg
  - product_id: aff-002
    category: affirmations
    variation: framed
    url: ''
",
        )
        .unwrap();

        let errors = validate(&file);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("duplicate"));
        assert!(errors[1].contains("empty url"));
    }

    #[test]
    fn test_unknown_variation_is_kept() {
        let file = parse(&SEED.replace("lifestyle", "flatlay")).unwrap();
        assert_eq!(
            file.images[1].variation,
            ImageVariation::Other("flatlay".to_string())
        );
    }
}
