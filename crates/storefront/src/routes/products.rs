//! Affirmation catalog and product image handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use luna_rituals_core::ProductId;
use luna_rituals_core::catalog::{
    self, Affirmation, AffirmationFormat, CatalogError, CatalogQuery, SortOption,
};
use luna_rituals_core::images::{ProductCategory, ProductImage};

use crate::error::Result;
use crate::models::session;
use crate::services::DisplayImage;
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// A purchasable format with its price.
#[derive(Debug, Serialize)]
pub struct FormatView {
    pub format: AffirmationFormat,
    pub price: Decimal,
}

/// An affirmation with its base price and format prices.
#[derive(Debug, Serialize)]
pub struct AffirmationView {
    #[serde(flatten)]
    pub affirmation: &'static Affirmation,
    pub price: Decimal,
    pub formats: Vec<FormatView>,
}

impl From<&'static Affirmation> for AffirmationView {
    fn from(affirmation: &'static Affirmation) -> Self {
        Self {
            affirmation,
            price: affirmation.price(),
            formats: affirmation
                .formats()
                .iter()
                .map(|&format| FormatView {
                    format,
                    price: format.price(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductList {
    pub count: usize,
    pub products: Vec<AffirmationView>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub product: AffirmationView,
    pub images: Vec<ProductImage>,
    pub display_image: DisplayImage,
}

#[derive(Debug, Serialize)]
pub struct ImageList {
    pub product_id: ProductId,
    pub category: ProductCategory,
    pub images: Vec<ProductImage>,
}

#[derive(Debug, Serialize)]
pub struct RandomImage {
    pub product_id: ProductId,
    pub image_url: String,
}

// =============================================================================
// Query Parameters
// =============================================================================

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub q: Option<String>,
    #[serde(default)]
    pub sort: SortOption,
}

#[derive(Debug, Deserialize)]
pub struct ImageParams {
    pub category: Option<ProductCategory>,
}

#[derive(Debug, Deserialize)]
pub struct RandomImageParams {
    pub category: Option<ProductCategory>,
    pub fallback: Option<String>,
}

/// Image category of a catalog product.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownProduct`] if the id is not in the catalog.
fn catalog_category(id: &ProductId) -> std::result::Result<ProductCategory, CatalogError> {
    if catalog::find_affirmation(id).is_some() {
        return Ok(ProductCategory::Affirmations);
    }
    catalog::find_lifestyle(id)
        .map(|p| ProductCategory::from(p.kind))
        .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))
}

// =============================================================================
// Handlers
// =============================================================================

/// List affirmations.
#[instrument]
pub async fn index(Query(params): Query<ListParams>) -> Result<Json<ProductList>> {
    let query = CatalogQuery::from_params(params.category.as_deref(), params.q, params.sort)?;
    let products: Vec<AffirmationView> = catalog::list_affirmations(&query)
        .into_iter()
        .map(AffirmationView::from)
        .collect();

    Ok(Json(ProductList {
        count: products.len(),
        products,
    }))
}

/// Affirmation detail with ordered images and the visitor's display image.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<ProductDetail>> {
    let id = ProductId::parse(&id)?;
    let affirmation = catalog::find_affirmation(&id)
        .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))?;

    let variation = session::display_variation(&session, &id).await?;
    let images = state
        .images()
        .product_images(&id, ProductCategory::Affirmations)
        .await;
    let display_image = state.images().display_image(&id, variation).await;

    Ok(Json(ProductDetail {
        product: AffirmationView::from(affirmation),
        images,
        display_image,
    }))
}

/// Ordered image list for a product.
#[instrument(skip(state))]
pub async fn images(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ImageParams>,
) -> Result<Json<ImageList>> {
    let id = ProductId::parse(&id)?;
    let category = match params.category {
        Some(category) => category,
        None => catalog_category(&id)?,
    };

    let images = state.images().product_images(&id, category).await;
    Ok(Json(ImageList {
        product_id: id,
        category,
        images,
    }))
}

/// A random image for a product.
#[instrument(skip(state))]
pub async fn random_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RandomImageParams>,
) -> Result<Json<RandomImage>> {
    let id = ProductId::parse(&id)?;
    let category = match params.category {
        Some(category) => category,
        None => catalog_category(&id)?,
    };

    let image_url = state
        .images()
        .random_image(&id, category, params.fallback.as_deref())
        .await;
    Ok(Json(RandomImage {
        product_id: id,
        image_url,
    }))
}
