//! Login shell commands.
//!
//! Every command writes its user-facing messages to a caller-supplied
//! writer and returns `Ok(true)` on success, `Ok(false)` when the input was
//! rejected.

pub mod login;
pub mod register;
pub mod shell;

use std::io;

use thiserror::Error;

use food_delivery_accounts::{ConfigError, LaunchError, StoreError};

/// Errors that abort a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Record file could not be loaded.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Storefront could not be started.
    #[error("{0}")]
    Launch(#[from] LaunchError),

    /// Terminal read or write failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}
