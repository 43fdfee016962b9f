//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. The gate itself
//! surfaces every operation as a boolean outcome; these variants exist
//! for logging and for callers inside the crate.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Verification code does not match the expected code
    #[error("Invalid verification code")]
    InvalidVerificationCode,

    /// No registration is awaiting verification
    #[error("No registration awaiting verification")]
    VerificationNotPending,

    /// Another auth operation is still in flight (double submit)
    #[error("Another request is still in flight")]
    OperationInFlight,

    /// Invalid input reached a use case (malformed email, etc.)
    #[error("Invalid input: {0}")]
    Validation(#[from] AppError),

    /// Session store failure
    #[error("Session storage error: {0}")]
    Storage(#[from] platform::kv::StoreError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidVerificationCode | AuthError::VerificationNotPending => {
                ErrorKind::Unauthorized
            }
            AuthError::OperationInFlight => ErrorKind::Conflict,
            AuthError::Validation(e) => e.kind(),
            AuthError::Storage(_) => ErrorKind::Storage,
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether the user can resolve this by correcting their input
    pub fn is_user_error(&self) -> bool {
        self.kind().is_user_error()
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Session store error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::OperationInFlight => {
                tracing::warn!("Auth operation rejected: another request in flight");
            }
            AuthError::InvalidVerificationCode => {
                tracing::debug!("Verification failed: wrong code");
            }
            AuthError::VerificationNotPending => {
                tracing::debug!("Verification failed: nothing pending");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}
