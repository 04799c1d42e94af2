//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// The input contains something other than ASCII letters and digits.
    #[error("username may only contain letters and digits (found {found:?})")]
    InvalidCharacters {
        /// First offending character.
        found: char,
    },
}

/// A username accepted by registration.
///
/// ## Constraints
///
/// - Only ASCII letters (`A-Z`, `a-z`) and digits (`0-9`)
/// - The empty string is accepted
///
/// Login does not go through this type: stored records and login input are
/// compared as plain strings.
///
/// ## Examples
///
/// ```
/// use food_delivery_core::Username;
///
/// assert!(Username::parse("alice42").is_ok());
/// assert!(Username::parse("").is_ok());
///
/// assert!(Username::parse("alice_42").is_err());
/// assert!(Username::parse("bob smith").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Parse a `Username` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`UsernameError::InvalidCharacters`] if the input contains any
    /// character outside `[A-Za-z0-9]`.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        if let Some(found) = s.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(UsernameError::InvalidCharacters { found });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_usernames() {
        assert!(Username::parse("alice").is_ok());
        assert!(Username::parse("ALICE").is_ok());
        assert!(Username::parse("alice42").is_ok());
        assert!(Username::parse("42").is_ok());
    }

    #[test]
    fn test_parse_empty_is_accepted() {
        let username = Username::parse("").unwrap();
        assert_eq!(username.as_str(), "");
    }

    #[test]
    fn test_parse_rejects_punctuation() {
        assert_eq!(
            Username::parse("alice_42"),
            Err(UsernameError::InvalidCharacters { found: '_' })
        );
        assert!(Username::parse("alice.b").is_err());
        assert!(Username::parse("a@b").is_err());
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert!(Username::parse("bob smith").is_err());
        assert!(Username::parse(" bob").is_err());
        assert!(Username::parse("bob\n").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_letters() {
        assert_eq!(
            Username::parse("josé"),
            Err(UsernameError::InvalidCharacters { found: 'é' })
        );
    }

    #[test]
    fn test_display() {
        let username = Username::parse("alice").unwrap();
        assert_eq!(format!("{username}"), "alice");
    }

    #[test]
    fn test_from_str() {
        let username: Username = "bob7".parse().unwrap();
        assert_eq!(username.as_str(), "bob7");
    }
}
