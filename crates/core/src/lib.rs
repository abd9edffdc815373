//! Luna Rituals Core - shared domain library.
//!
//! This crate provides the types and rules used across all Luna Rituals
//! components:
//! - `storefront` - Public JSON storefront API
//! - `cli` - Command-line tools for migrations, seeding and batch jobs
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and prices
//! - [`catalog`] - Static affirmation and lifestyle catalog
//! - [`cart`] / [`wishlist`] - Visitor cart and wishlist state
//! - [`images`] - Product image ordering and selection rules
//! - [`design`] - Deterministic design specs for affirmation artwork
//! - [`print`] - Print-on-demand listing configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod design;
pub mod images;
pub mod print;
pub mod types;
pub mod wishlist;

pub use types::*;
