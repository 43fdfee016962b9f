//! Display Name Value Object
//!
//! The human-readable name of an identity. NFC-normalized so visually
//! identical names compare equal regardless of input method.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::domain::value_object::email::Email;

/// Maximum display name length in characters
const NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new display name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name: String = name.into().trim().nfc().collect();

        if name.is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }

        if name.chars().count() > NAME_MAX_CHARS {
            return Err(AppError::validation(format!(
                "Name must be at most {} characters",
                NAME_MAX_CHARS
            )));
        }

        Ok(Self(name))
    }

    /// Derive a name from the local part of an email address, with the
    /// first letter capitalized ("alice.b@example.com" becomes "Alice.b").
    ///
    /// Used when login synthesizes an identity and no real name exists.
    pub fn from_email(email: &Email) -> Self {
        let local = email.local_part();
        let mut chars = local.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            // Email validation rejects an empty local part; unreachable in
            // practice but total anyway.
            None => "Member".to_string(),
        };
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_valid() {
        assert!(DisplayName::new("Alice Johnson").is_ok());
        assert!(DisplayName::new("  Bob  ").is_ok());
    }

    #[test]
    fn test_display_name_invalid() {
        assert!(DisplayName::new("").is_err());
        assert!(DisplayName::new("   ").is_err());
        assert!(DisplayName::new("x".repeat(101)).is_err());
    }

    #[test]
    fn test_display_name_trims() {
        let name = DisplayName::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_from_email_capitalizes_local_part() {
        let email = Email::new("alice@example.com").unwrap();
        assert_eq!(DisplayName::from_email(&email).as_str(), "Alice");

        let email = Email::new("jean-luc@example.com").unwrap();
        assert_eq!(DisplayName::from_email(&email).as_str(), "Jean-luc");

        let email = Email::new("bob.smith@example.com").unwrap();
        assert_eq!(DisplayName::from_email(&email).as_str(), "Bob.smith");
    }
}
