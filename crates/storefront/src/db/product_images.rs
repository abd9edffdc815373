//! Product image repository.
//!
//! Queries use runtime-checked `sqlx::query_as` so the crate builds without a
//! live database.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use luna_rituals_core::images::{ImageVariation, ProductCategory, ProductImage};
use luna_rituals_core::{ImageId, ProductId};

use super::RepositoryError;

/// Raw `storefront.product_images` row.
#[derive(Debug, sqlx::FromRow)]
struct ProductImageRow {
    id: ImageId,
    product_id: String,
    product_category: String,
    variation_type: String,
    image_url: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductImageRow> for ProductImage {
    type Error = RepositoryError;

    fn try_from(row: ProductImageRow) -> Result<Self, Self::Error> {
        let product_id = ProductId::parse(&row.product_id).map_err(|e| {
            RepositoryError::DataCorruption(format!(
                "invalid product_id {:?} in product_images: {e}",
                row.product_id
            ))
        })?;
        let product_category = row
            .product_category
            .parse::<ProductCategory>()
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

        Ok(Self {
            id: Some(row.id),
            product_id,
            product_category,
            variation_type: ImageVariation::from(row.variation_type),
            image_url: row.image_url,
            created_at: row.created_at,
        })
    }
}

/// Image to insert.
#[derive(Debug, Clone)]
pub struct NewProductImage {
    pub product_id: ProductId,
    pub product_category: ProductCategory,
    pub variation_type: ImageVariation,
    pub image_url: String,
}

/// Repository for product image database operations.
pub struct ProductImageRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductImageRepository<'a> {
    /// Create a new product image repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All images of one category, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row holds an invalid id or category.
    pub async fn list_by_category(
        &self,
        category: ProductCategory,
    ) -> Result<Vec<ProductImage>, RepositoryError> {
        let rows: Vec<ProductImageRow> = sqlx::query_as(
            r"
            SELECT id, product_id, product_category, variation_type, image_url, created_at
            FROM storefront.product_images
            WHERE product_category = $1
            ORDER BY created_at, id
            ",
        )
        .bind(category.as_str())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(ProductImage::try_from).collect()
    }

    /// Insert an image row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the same image is already stored.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&self, image: &NewProductImage) -> Result<ProductImage, RepositoryError> {
        let row: ProductImageRow = sqlx::query_as(
            r"
            INSERT INTO storefront.product_images
                (product_id, product_category, variation_type, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, product_id, product_category, variation_type, image_url, created_at
            ",
        )
        .bind(&image.product_id)
        .bind(image.product_category.as_str())
        .bind(image.variation_type.as_str())
        .bind(&image.image_url)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Conflict(
                format!("{} {} already stored", image.product_id, image.variation_type),
            ),
            _ => RepositoryError::Database(e),
        })?;

        ProductImage::try_from(row)
    }

    /// Delete all images of a product in a category. Returns the number of
    /// rows removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_for_product(
        &self,
        product_id: &ProductId,
        category: ProductCategory,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM storefront.product_images
            WHERE product_id = $1 AND product_category = $2
            ",
        )
        .bind(product_id)
        .bind(category.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
