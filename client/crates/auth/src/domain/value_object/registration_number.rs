//! Registration Number Value Object
//!
//! The student-only membership number (e.g. "REG-2024-001"). Owners never
//! carry one; the `RoleProfile` sum type makes that structural.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

const REGISTRATION_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistrationNumber(String);

impl RegistrationNumber {
    /// Create a new registration number with validation
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(AppError::validation("Registration number cannot be empty"));
        }

        if value.len() > REGISTRATION_MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Registration number must be at most {} characters",
                REGISTRATION_MAX_LENGTH
            )));
        }

        Ok(Self(value))
    }

    /// Create from a trusted source (config placeholder, stored session)
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegistrationNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_number_valid() {
        let reg = RegistrationNumber::new(" REG-2024-001 ").unwrap();
        assert_eq!(reg.as_str(), "REG-2024-001");
    }

    #[test]
    fn test_registration_number_invalid() {
        assert!(RegistrationNumber::new("").is_err());
        assert!(RegistrationNumber::new("   ").is_err());
        assert!(RegistrationNumber::new("x".repeat(65)).is_err());
    }
}
