//! Wishlist handlers.

use axum::{Json, extract::Path};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use luna_rituals_core::ProductId;
use luna_rituals_core::catalog::{self, CatalogError};
use luna_rituals_core::wishlist::Wishlist;

use crate::error::Result;
use crate::models::session;

#[derive(Debug, Serialize)]
pub struct WishlistView {
    pub items: Vec<ProductId>,
    pub count: usize,
}

impl From<Wishlist> for WishlistView {
    fn from(wishlist: Wishlist) -> Self {
        Self {
            count: wishlist.len(),
            items: wishlist.items().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: ProductId,
    pub in_wishlist: bool,
    pub wishlist: WishlistView,
}

#[derive(Debug, Deserialize)]
pub struct WishlistItemRequest {
    pub id: ProductId,
}

fn ensure_in_catalog(id: &ProductId) -> std::result::Result<(), CatalogError> {
    if catalog::find_affirmation(id).is_some() || catalog::find_lifestyle(id).is_some() {
        Ok(())
    } else {
        Err(CatalogError::UnknownProduct(id.to_string()))
    }
}

#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<WishlistView>> {
    let wishlist = session::load_wishlist(&session).await?;
    Ok(Json(WishlistView::from(wishlist)))
}

/// Add a product. Adding an id twice is a no-op.
#[instrument(skip(session))]
pub async fn add(
    session: Session,
    Json(req): Json<WishlistItemRequest>,
) -> Result<Json<WishlistView>> {
    ensure_in_catalog(&req.id)?;
    let mut wishlist = session::load_wishlist(&session).await?;
    if wishlist.add(req.id) {
        session::save_wishlist(&session, &wishlist).await?;
    }
    Ok(Json(WishlistView::from(wishlist)))
}

#[instrument(skip(session))]
pub async fn toggle(
    session: Session,
    Json(req): Json<WishlistItemRequest>,
) -> Result<Json<ToggleResponse>> {
    ensure_in_catalog(&req.id)?;
    let mut wishlist = session::load_wishlist(&session).await?;
    let in_wishlist = wishlist.toggle(req.id.clone());
    session::save_wishlist(&session, &wishlist).await?;

    Ok(Json(ToggleResponse {
        id: req.id,
        in_wishlist,
        wishlist: WishlistView::from(wishlist),
    }))
}

#[instrument(skip(session))]
pub async fn remove(session: Session, Path(id): Path<String>) -> Result<Json<WishlistView>> {
    let id = ProductId::parse(&id)?;
    let mut wishlist = session::load_wishlist(&session).await?;
    if wishlist.remove(&id) {
        session::save_wishlist(&session, &wishlist).await?;
    }
    Ok(Json(WishlistView::from(wishlist)))
}

#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<WishlistView>> {
    let mut wishlist = session::load_wishlist(&session).await?;
    wishlist.clear();
    session::save_wishlist(&session, &wishlist).await?;
    Ok(Json(WishlistView::from(wishlist)))
}
