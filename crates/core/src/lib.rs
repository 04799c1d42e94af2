//! Food Delivery Core - Shared types library.
//!
//! This crate provides common types used across all food delivery components:
//! - `accounts` - User record storage, credential validation, registration
//! - `storefront` - Local food ordering site launched after login
//! - `cli` - Login shell
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated usernames and passwords, user records, products, prices, IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
