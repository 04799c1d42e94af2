//! Accounts configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FOOD_USERS_FILE` - Path of the user record file (default: users.json)
//! - `FOOD_FALLBACK_USERNAME` - Built-in account username (default: manager)
//! - `FOOD_FALLBACK_PASSWORD` - Built-in account password (default: pass)
//! - `FOOD_REQUIRE_UNIQUE_USERNAMES` - Reject duplicate usernames at registration (default: false)
//! - `FOOD_STOREFRONT_BIN` - Command launched after a successful login (default:
//!   `food-delivery-storefront` next to the running executable, else looked up on `PATH`)

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const DEFAULT_USERS_FILE: &str = "users.json";
const DEFAULT_FALLBACK_USERNAME: &str = "manager";
const DEFAULT_FALLBACK_PASSWORD: &str = "pass";
const DEFAULT_STOREFRONT_BIN: &str = "food-delivery-storefront";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Accounts configuration.
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// Path of the JSON user record file
    pub users_file: PathBuf,
    /// Account accepted after every stored record fails to match
    pub fallback: FallbackAccount,
    /// Whether registration rejects a username that is already stored
    pub require_unique_usernames: bool,
    /// Storefront command spawned after login
    pub storefront_bin: PathBuf,
}

/// Built-in account checked last during login.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct FallbackAccount {
    pub username: String,
    pub password: SecretString,
}

impl FallbackAccount {
    /// Returns `true` if the pair matches this account exactly.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

impl Default for FallbackAccount {
    fn default() -> Self {
        Self {
            username: DEFAULT_FALLBACK_USERNAME.to_string(),
            password: SecretString::from(DEFAULT_FALLBACK_PASSWORD),
        }
    }
}

impl std::fmt::Debug for FallbackAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackAccount")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            fallback: FallbackAccount::default(),
            require_unique_usernames: false,
            storefront_bin: default_storefront_bin(),
        }
    }
}

impl AccountsConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let users_file = PathBuf::from(
            lookup("FOOD_USERS_FILE").unwrap_or_else(|| DEFAULT_USERS_FILE.to_string()),
        );
        let fallback = FallbackAccount {
            username: lookup("FOOD_FALLBACK_USERNAME")
                .unwrap_or_else(|| DEFAULT_FALLBACK_USERNAME.to_string()),
            password: SecretString::from(
                lookup("FOOD_FALLBACK_PASSWORD")
                    .unwrap_or_else(|| DEFAULT_FALLBACK_PASSWORD.to_string()),
            ),
        };
        let require_unique_usernames = match lookup("FOOD_REQUIRE_UNIQUE_USERNAMES") {
            Some(value) => parse_bool("FOOD_REQUIRE_UNIQUE_USERNAMES", &value)?,
            None => false,
        };
        let storefront_bin = lookup("FOOD_STOREFRONT_BIN")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(default_storefront_bin, PathBuf::from);

        Ok(Self {
            users_file,
            fallback,
            require_unique_usernames,
            storefront_bin,
        })
    }
}

/// The storefront binary installed beside the running executable, falling
/// back to the bare name for a `PATH` lookup.
fn default_storefront_bin() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| sibling_binary(&exe, DEFAULT_STOREFRONT_BIN))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STOREFRONT_BIN))
}

/// `name` in the same directory as `exe`, if that file exists.
fn sibling_binary(exe: &Path, name: &str) -> Option<PathBuf> {
    let candidate = exe
        .parent()?
        .join(format!("{name}{}", std::env::consts::EXE_SUFFIX));
    candidate.is_file().then_some(candidate)
}

/// Parse a boolean flag (`true`/`false`/`1`/`0`, case-insensitive).
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected true or false, got '{other}'"),
        )),
    }
}
