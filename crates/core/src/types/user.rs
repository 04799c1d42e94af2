//! User record as stored in the credential file.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{Password, Username};

/// A registered user.
///
/// Fields are plain strings because records loaded from disk are taken as-is;
/// validation happens only at registration, via [`UserRecord::new`].
///
/// The password is stored in plaintext. `Debug` redacts it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name.
    pub name: String,
    /// Phone number or other contact detail.
    pub contact: String,
    /// Delivery address.
    pub address: String,
    /// Login name.
    pub username: String,
    /// Login password (plaintext).
    pub password: String,
}

impl UserRecord {
    /// Build a record from validated credentials and free-text profile fields.
    #[must_use]
    pub fn new(
        username: Username,
        password: Password,
        name: impl Into<String>,
        contact: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            address: address.into(),
            username: username.into_inner(),
            password: password.into_inner(),
        }
    }

    /// Returns `true` if both username and password match exactly.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("name", &self.name)
            .field("contact", &self.contact)
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
