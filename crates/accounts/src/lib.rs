//! Food Delivery Accounts library.
//!
//! Everything the login shell needs before handing off to the storefront:
//!
//! - [`store`] - Flat JSON file of user records
//! - [`auth`] - Ordered credential checks and the registration flow
//! - [`launcher`] - Spawning the storefront process after login
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod launcher;
pub mod store;

pub use auth::{AuthError, AuthService, CredentialValidator, RegistrationForm};
pub use config::{AccountsConfig, ConfigError, FallbackAccount};
pub use launcher::{LaunchError, Launcher, StorefrontLauncher};
pub use store::{RecordStore, StoreError};
