//! Authentication error types.

use thiserror::Error;

use food_delivery_core::{PasswordError, UsernameError};

use crate::store::StoreError;

/// Errors that can occur during login or registration.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username contains characters other than letters and digits.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Password too short.
    #[error("password validation failed: {0}")]
    WeakPassword(#[from] PasswordError),

    /// Username already registered (only when uniqueness is enforced).
    #[error("username already taken: {0}")]
    UsernameTaken(String),

    /// No stored record or fallback account matches.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Record file could not be written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Message suitable for showing to the person at the keyboard.
    ///
    /// Store failures are reported generically; the details go to the log.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUsername(_) => "Invalid Username".to_string(),
            Self::WeakPassword(PasswordError::TooShort { min }) => {
                format!("Password should be at least {min} characters long")
            }
            Self::UsernameTaken(_) => "Username is already taken".to_string(),
            Self::InvalidCredentials => "Invalid username or password".to_string(),
            Self::Store(_) => "Could not save your account, please try again".to_string(),
        }
    }
}
