//! End-to-end visitor flows over the storefront HTTP API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::{Value, json};

use luna_rituals_core::ProductId;
use luna_rituals_core::images::{ImageVariation, ProductCategory, ProductImage};
use luna_rituals_integration_tests::{Visitor, test_state};

fn row(product: &str, variation: ImageVariation, url: &str) -> ProductImage {
    ProductImage {
        id: None,
        product_id: ProductId::parse(product).unwrap(),
        product_category: ProductCategory::Affirmations,
        variation_type: variation,
        image_url: url.to_string(),
        created_at: Utc::now(),
    }
}

fn urls(images: &Value) -> Vec<&str> {
    images
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["image_url"].as_str().unwrap())
        .collect()
}

// =============================================================================
// Shopping
// =============================================================================

#[tokio::test]
async fn test_browse_add_and_adjust_cart() {
    let mut visitor = Visitor::new(test_state());

    let (status, listing) = visitor.get("/api/products?category=Rest&sort=newest").await;
    assert_eq!(status, StatusCode::OK);
    let first = listing["products"][0]["id"].as_str().unwrap().to_string();

    let (status, cart) = visitor
        .post("/api/cart/items", json!({"id": first, "format": "Framed Poster"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["items"][0]["price"], "129.99");

    visitor.post("/api/cart/items", json!({"id": "cnd-001"})).await;
    let key = format!("{first}-Framed Poster");
    let (_, cart) = visitor
        .post("/api/cart/items/quantity", json!({"key": key, "quantity": 2}))
        .await;
    assert_eq!(cart["item_count"], 3);
    assert_eq!(cart["total"], "274.97");

    visitor.post("/api/cart/close", json!({})).await;
    let (_, cart) = visitor.get("/api/cart").await;
    assert_eq!(cart["is_open"], false);
    assert_eq!(cart["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_cart_and_wishlist_share_one_session() {
    let mut visitor = Visitor::new(test_state());

    visitor.post("/api/wishlist/items", json!({"id": "aff-005"})).await;
    visitor.post("/api/cart/items", json!({"id": "aff-005"})).await;

    let (_, wishlist) = visitor.get("/api/wishlist").await;
    let (_, cart) = visitor.get("/api/cart").await;
    assert_eq!(wishlist["items"], json!(["aff-005"]));
    assert_eq!(cart["items"][0]["format"], "Digital Download");

    let (_, wishlist) = visitor.delete("/api/wishlist/items/aff-005").await;
    assert_eq!(wishlist["count"], 0);
    let (_, cart) = visitor.get("/api/cart").await;
    assert_eq!(cart["item_count"], 1);
}

#[tokio::test]
async fn test_visitors_are_isolated() {
    let mut alice = Visitor::new(test_state());
    let mut bob = alice.sibling();

    alice.post("/api/cart/items", json!({"id": "aff-001"})).await;
    alice.post("/api/wishlist/toggle", json!({"id": "sup-001"})).await;

    let (_, cart) = bob.get("/api/cart").await;
    let (_, wishlist) = bob.get("/api/wishlist").await;
    assert_eq!(cart["item_count"], 0);
    assert_eq!(wishlist["count"], 0);
}

// =============================================================================
// Images
// =============================================================================

#[tokio::test]
async fn test_cached_rows_are_ordered_and_displayed() {
    let state = test_state();
    state
        .images()
        .prime(
            ProductCategory::Affirmations,
            vec![
                row("aff-008", ImageVariation::Framed, "/img/aff-008-framed.jpg"),
                row("aff-008", ImageVariation::Canvas, "/img/aff-008-canvas.jpg"),
                row("aff-008", ImageVariation::Digital, "/img/aff-008-digital.png"),
                row("aff-001", ImageVariation::Canvas, "/img/aff-001-canvas.jpg"),
            ],
        )
        .await;
    let mut visitor = Visitor::new(state);

    let (status, body) = visitor.get("/api/products/aff-008/images").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        urls(&body["images"]),
        vec!["/img/aff-008-digital.png", "/img/aff-008-canvas.jpg", "/img/aff-008-framed.jpg"]
    );

    let (_, first) = visitor.get("/api/products/aff-008").await;
    let shown = first["display_image"]["image_url"].as_str().unwrap();
    assert!(shown == "/img/aff-008-canvas.jpg" || shown == "/img/aff-008-framed.jpg");
    for _ in 0..5 {
        let (_, again) = visitor.get("/api/products/aff-008").await;
        assert_eq!(again["display_image"], first["display_image"]);
    }

    // aff-001 has a bundled digital render that leads its list.
    let (_, body) = visitor.get("/api/products/aff-001/images").await;
    assert_eq!(
        urls(&body["images"]),
        vec![
            "/static/images/affirmations/digital/affirmation-digital-aff-001.png",
            "/img/aff-001-canvas.jpg",
        ]
    );
}

#[tokio::test]
async fn test_unreachable_database_falls_back_to_default_image() {
    let mut visitor = Visitor::new(test_state());

    let (status, body) = visitor.get("/api/products/aff-014").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display_image"]["image_url"], "/static/images/placeholder.jpg");
    assert!(body["display_image"]["variation"].is_null());

    let (status, body) = visitor
        .get("/api/products/aff-014/random-image?fallback=/img/x.jpg")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["image_url"], "/img/x.jpg");
}
