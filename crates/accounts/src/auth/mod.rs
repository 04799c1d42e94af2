//! Authentication service.
//!
//! Provides login against the record store (plus the fallback account) and
//! the registration flow.

mod error;
pub mod validator;

pub use error::AuthError;
pub use validator::{CredentialCheck, CredentialValidator, FallbackAccountCheck, StoredRecordCheck};

use food_delivery_core::{Password, UserRecord, Username};

use crate::config::AccountsConfig;
use crate::store::{RecordStore, StoreError};

/// Raw input from the registration form.
#[derive(Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub name: String,
    pub contact: String,
    pub address: String,
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("contact", &self.contact)
            .field("address", &self.address)
            .finish()
    }
}

/// Authentication service.
///
/// Owns the record store it was constructed with; there is no process-wide
/// instance.
#[derive(Debug)]
pub struct AuthService {
    store: RecordStore,
    validator: CredentialValidator,
    require_unique_usernames: bool,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(
        store: RecordStore,
        validator: CredentialValidator,
        require_unique_usernames: bool,
    ) -> Self {
        Self {
            store,
            validator,
            require_unique_usernames,
        }
    }

    /// Open the configured record file and build the default check chain.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record file exists but cannot be loaded.
    pub fn from_config(config: &AccountsConfig) -> Result<Self, StoreError> {
        let store = RecordStore::open(&config.users_file)?;
        let validator = CredentialValidator::with_fallback(config.fallback.clone());
        Ok(Self::new(store, validator, config.require_unique_usernames))
    }

    /// The underlying record store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Returns `true` if the pair is accepted by any check in the chain.
    ///
    /// Never fails; there is no lockout.
    #[must_use]
    pub fn validate(&self, username: &str, password: &str) -> bool {
        match self
            .validator
            .accepted_by(self.store.records(), username, password)
        {
            Some(check) => {
                tracing::info!(username, check, "Login accepted");
                true
            }
            None => {
                tracing::warn!(username, "Login rejected");
                false
            }
        }
    }

    /// Login with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no check accepts the pair.
    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if self.validate(username, password) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a new user and persist the full record collection.
    ///
    /// Nothing changes, in memory or on disk, unless every rule passes and
    /// the file is written.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username is not alphanumeric.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::UsernameTaken` if uniqueness is enforced and the
    /// username exists.
    /// Returns `AuthError::Store` if the record file cannot be written.
    pub fn register(&mut self, form: RegistrationForm) -> Result<UserRecord, AuthError> {
        let username = Username::parse(&form.username)?;
        let password = Password::parse(&form.password)?;

        if self.store.find_by_username(username.as_str()).is_some() {
            if self.require_unique_usernames {
                return Err(AuthError::UsernameTaken(username.into_inner()));
            }
            tracing::warn!(
                username = %username,
                "Registering a username that is already stored"
            );
        }

        let record = UserRecord::new(username, password, form.name, form.contact, form.address);
        self.store.add(record.clone());

        if let Err(e) = self.store.save() {
            self.store.pop();
            tracing::error!(error = %e, "Failed to persist registration");
            return Err(e.into());
        }

        tracing::info!(
            username = %record.username,
            total = self.store.len(),
            "Registration successful"
        );
        Ok(record)
    }
}
