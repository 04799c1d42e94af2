//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - Catalog lookup, cart mutation and order placement

pub mod cart;

pub use cart::{Cart, OrderOutcome, PlacedOrder, Storefront, StorefrontError};
