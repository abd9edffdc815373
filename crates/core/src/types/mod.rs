//! Core types for Luna Rituals.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product_id;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product_id::{ProductId, ProductIdError};
