//! Password type used at registration.

use core::fmt;

/// Errors that can occur when parsing a [`Password`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// The password is shorter than the minimum length.
    #[error("password must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
}

/// A password that satisfies the registration length rule.
///
/// Length is counted in characters, not bytes. `Debug` never prints the
/// value.
///
/// ```
/// use food_delivery_core::Password;
///
/// assert!(Password::parse("secret").is_ok());
/// assert!(Password::parse("short").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Minimum number of characters.
    pub const MIN_LENGTH: usize = 6;

    /// Parse a `Password` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::TooShort`] if the input has fewer than
    /// [`Password::MIN_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, PasswordError> {
        if s.chars().count() < Self::MIN_LENGTH {
            return Err(PasswordError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the password as a string slice.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Consumes the `Password` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl std::str::FromStr for Password {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
