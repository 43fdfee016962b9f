//! Phone Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_LENGTH: usize = 20;

/// Phone number value object
///
/// Lenient by design: the number is contact data shown back to the user,
/// never dialed by the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    /// Create a new phone number with validation
    pub fn new(phone: impl Into<String>) -> AppResult<Self> {
        let phone = phone.into().trim().to_string();

        if phone.is_empty() {
            return Err(AppError::validation("Phone cannot be empty"));
        }

        if phone.len() > PHONE_MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Phone must be at most {} characters",
                PHONE_MAX_LENGTH
            )));
        }

        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if digits < PHONE_MIN_DIGITS {
            return Err(AppError::validation(format!(
                "Phone must contain at least {} digits",
                PHONE_MIN_DIGITS
            )));
        }

        let valid_chars = phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
        if !valid_chars {
            return Err(AppError::validation("Phone contains invalid characters"));
        }

        Ok(Self(phone))
    }

    /// Create from a trusted source (config placeholder, stored session)
    pub fn from_stored(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
