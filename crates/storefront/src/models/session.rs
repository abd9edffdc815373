//! Session-stored visitor state.
//!
//! The cart, the wishlist and the per-product display variation all live in
//! the visitor's session. Each request reads the value, changes it, and writes
//! it back whole.

use std::collections::HashMap;

use rand::seq::IndexedRandom;
use tower_sessions::Session;

use luna_rituals_core::ProductId;
use luna_rituals_core::cart::Cart;
use luna_rituals_core::images::DisplayVariation;
use luna_rituals_core::wishlist::Wishlist;

/// Session keys for visitor data.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = luna_rituals_core::cart::CART_STORAGE_KEY;

    /// Key for the visitor's wishlist.
    pub const WISHLIST: &str = luna_rituals_core::wishlist::WISHLIST_STORAGE_KEY;

    /// Key for the product id to display variation map.
    pub const DISPLAY_VARIATIONS: &str = "lunarituals_display_variations";
}

type SessionResult<T> = Result<T, tower_sessions::session::Error>;

/// Load the visitor's cart, empty if none is stored.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_cart(session: &Session) -> SessionResult<Cart> {
    Ok(session
        .get::<Cart>(keys::CART)
        .await?
        .unwrap_or_default())
}

/// Replace the visitor's cart.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn save_cart(session: &Session, cart: &Cart) -> SessionResult<()> {
    session.insert(keys::CART, cart).await
}

/// Load the visitor's wishlist, empty if none is stored.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_wishlist(session: &Session) -> SessionResult<Wishlist> {
    Ok(session
        .get::<Wishlist>(keys::WISHLIST)
        .await?
        .unwrap_or_default())
}

/// Replace the visitor's wishlist.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn save_wishlist(session: &Session, wishlist: &Wishlist) -> SessionResult<()> {
    session.insert(keys::WISHLIST, wishlist).await
}

/// The display variation this visitor sees for a product.
///
/// Chosen at random on first view and kept for the rest of the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be read or written.
pub async fn display_variation(
    session: &Session,
    product_id: &ProductId,
) -> SessionResult<DisplayVariation> {
    let mut chosen: HashMap<ProductId, DisplayVariation> = session
        .get(keys::DISPLAY_VARIATIONS)
        .await?
        .unwrap_or_default();

    if let Some(variation) = chosen.get(product_id) {
        return Ok(*variation);
    }

    let variation = DisplayVariation::ALL
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(DisplayVariation::Canvas);
    chosen.insert(product_id.clone(), variation);
    session.insert(keys::DISPLAY_VARIATIONS, &chosen).await?;

    tracing::debug!(product_id = %product_id, ?variation, "Assigned display variation");
    Ok(variation)
}
