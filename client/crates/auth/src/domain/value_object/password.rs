//! Raw Password Value Object
//!
//! Holds the plaintext password between the signup form and verification.
//! It is never serialized and never written to the session document; the
//! buffer is zeroized when the registration draft is dropped or promoted.

use kernel::error::app_error::{AppError, AppResult};
use zeroize::{Zeroize, ZeroizeOnDrop};

const PASSWORD_MIN_LENGTH: usize = 6;
const PASSWORD_MAX_LENGTH: usize = 256;

/// Plaintext password, write-only by construction.
///
/// Deliberately implements neither `Serialize` nor `Display`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RawPassword(String);

impl RawPassword {
    /// Create a new password with validation
    pub fn new(password: impl Into<String>) -> AppResult<Self> {
        let password = password.into();

        if password.len() < PASSWORD_MIN_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                PASSWORD_MIN_LENGTH
            )));
        }

        if password.len() > PASSWORD_MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at most {} characters",
                PASSWORD_MAX_LENGTH
            )));
        }

        Ok(Self(password))
    }
}

impl std::fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RawPassword(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_valid() {
        assert!(RawPassword::new("secret1").is_ok());
        assert!(RawPassword::new("123456").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        assert!(RawPassword::new("12345").is_err());
        assert!(RawPassword::new("").is_err());
    }

    #[test]
    fn test_password_too_long() {
        assert!(RawPassword::new("x".repeat(257)).is_err());
    }

    #[test]
    fn test_password_debug_masked() {
        let pw = RawPassword::new("supersecret").unwrap();
        assert_eq!(format!("{:?}", pw), "RawPassword(***)");
    }
}
