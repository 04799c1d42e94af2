//! Core types for the food delivery app.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod password;
pub mod price;
pub mod product;
pub mod user;
pub mod username;

pub use id::*;
pub use password::{Password, PasswordError};
pub use price::{CurrencyCode, Price};
pub use product::Product;
pub use user::UserRecord;
pub use username::{Username, UsernameError};
