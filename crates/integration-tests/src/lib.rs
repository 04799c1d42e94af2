//! Integration tests for the food delivery app.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p food-delivery-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `accounts_flow` - Registration and login against a real records file
//! - `storefront_orders` - Cart and order flow through the HTTP router
//!
//! Helpers shared by the test binaries live here.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use food_delivery_accounts::{AccountsConfig, AuthService, RegistrationForm, StoreError};
use food_delivery_storefront::{
    catalog::Catalog,
    config::{ConfigError, StorefrontConfig},
    services::Storefront,
    state::AppState,
};

/// Auth service reading and writing `users_file`, with default settings.
///
/// # Errors
///
/// Returns `StoreError` if `users_file` exists but cannot be loaded.
pub fn auth_service(users_file: &Path) -> Result<AuthService, StoreError> {
    let config = AccountsConfig {
        users_file: users_file.to_path_buf(),
        ..AccountsConfig::default()
    };
    AuthService::from_config(&config)
}

/// A complete registration form.
#[must_use]
pub fn form(username: &str, password: &str) -> RegistrationForm {
    RegistrationForm {
        username: username.to_string(),
        password: password.to_string(),
        name: format!("{username} tester"),
        contact: "555-0100".to_string(),
        address: "1 Test Lane".to_string(),
    }
}

/// Storefront state over the standard menu, bound to the default address.
///
/// # Errors
///
/// Returns `ConfigError` if the default storefront configuration is rejected.
pub fn storefront_state() -> Result<AppState, ConfigError> {
    let config = StorefrontConfig::from_lookup(|_| None)?;
    Ok(AppState::new(config, Storefront::new(Catalog::food())))
}
