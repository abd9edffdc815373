//! Business logic services for storefront.
//!
//! # Services
//!
//! - `images` - Product image lookup backed by the database and an in-process cache

pub mod images;

pub use images::{DisplayImage, ImageService};
