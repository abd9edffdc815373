//! Cart handlers.
//!
//! The cart lives in the visitor's session. Prices always come from the
//! catalog; the client only names the product and format.

use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use luna_rituals_core::ProductId;
use luna_rituals_core::cart::{Cart, CartItem, NewCartItem};
use luna_rituals_core::catalog::AffirmationFormat;

use crate::error::{Result, add_breadcrumb};
use crate::models::session;

/// Cart with derived totals.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub item_count: u32,
    pub is_open: bool,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        Self {
            total: cart.total(),
            item_count: cart.item_count(),
            is_open: cart.is_open,
            items: cart.items,
        }
    }
}

/// Add to cart request.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub id: ProductId,
    /// Defaults to Digital Download for affirmations; must be absent for
    /// lifestyle products.
    pub format: Option<AffirmationFormat>,
}

/// Update quantity request.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub key: String,
    pub quantity: i64,
}

/// Remove line request.
#[derive(Debug, Deserialize)]
pub struct RemoveItemRequest {
    pub key: String,
}

/// Load the cart, apply `f`, store it and return the new view.
async fn modify_cart(session: &Session, f: impl FnOnce(&mut Cart)) -> Result<Json<CartView>> {
    let mut cart = session::load_cart(session).await?;
    f(&mut cart);
    session::save_cart(session, &cart).await?;
    Ok(Json(CartView::from(cart)))
}

/// Current cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = session::load_cart(&session).await?;
    Ok(Json(CartView::from(cart)))
}

/// Add one unit of a catalog product.
#[instrument(skip(session))]
pub async fn add(session: Session, Json(req): Json<AddItemRequest>) -> Result<Json<CartView>> {
    let item = NewCartItem::from_catalog(&req.id, req.format)?;
    let format = item.format.map_or("default", AffirmationFormat::label);
    add_breadcrumb(
        "cart",
        "Added item",
        Some(&[("product_id", req.id.as_str()), ("format", format)]),
    );

    modify_cart(&session, |cart| cart.add_item(item)).await
}

/// Set a line's quantity; zero or less removes it.
#[instrument(skip(session))]
pub async fn update_quantity(
    session: Session,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<Json<CartView>> {
    modify_cart(&session, |cart| cart.update_quantity(&req.key, req.quantity)).await
}

#[instrument(skip(session))]
pub async fn remove(session: Session, Json(req): Json<RemoveItemRequest>) -> Result<Json<CartView>> {
    modify_cart(&session, |cart| cart.remove_item(&req.key)).await
}

#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<CartView>> {
    modify_cart(&session, Cart::clear).await
}

#[instrument(skip(session))]
pub async fn toggle(session: Session) -> Result<Json<CartView>> {
    modify_cart(&session, Cart::toggle).await
}

#[instrument(skip(session))]
pub async fn open(session: Session) -> Result<Json<CartView>> {
    modify_cart(&session, Cart::open).await
}

#[instrument(skip(session))]
pub async fn close(session: Session) -> Result<Json<CartView>> {
    modify_cart(&session, Cart::close).await
}
