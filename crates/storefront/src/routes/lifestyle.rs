//! Curated lifestyle (affiliate) product handlers.

use axum::{Json, extract::Query};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use luna_rituals_core::catalog::{self, LifestyleKind, LifestyleProduct};

use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct LifestyleView {
    #[serde(flatten)]
    pub product: &'static LifestyleProduct,
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct LifestyleList {
    pub count: usize,
    pub products: Vec<LifestyleView>,
}

/// Listing query parameters. `kind` accepts singular or plural names.
#[derive(Debug, Deserialize)]
pub struct LifestyleParams {
    pub kind: Option<String>,
}

/// List lifestyle products, optionally of one kind.
#[instrument]
pub async fn index(Query(params): Query<LifestyleParams>) -> Result<Json<LifestyleList>> {
    let kind = params
        .kind
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .map(str::parse::<LifestyleKind>)
        .transpose()?;

    let products: Vec<LifestyleView> = catalog::lifestyle_by_kind(kind)
        .into_iter()
        .map(|product| LifestyleView {
            product,
            price: product.price(),
        })
        .collect();

    Ok(Json(LifestyleList {
        count: products.len(),
        products,
    }))
}
