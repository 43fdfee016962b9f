//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use crate::domain::value_object::{
    library_ref::LibraryRef, phone::Phone, registration_number::RegistrationNumber,
};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The verification code every signup must confirm with
    pub verification_code: String,
    /// Library a synthesized student is placed into
    pub default_library: LibraryRef,
    /// Registration number assigned to a synthesized student
    pub default_registration: RegistrationNumber,
    /// Contact phone assigned to a synthesized student
    pub default_phone: Phone,
    /// Artificial delay before each auth operation resolves
    pub simulated_latency: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            verification_code: "0000".to_string(),
            default_library: LibraryRef::new("lib-001"),
            default_registration: RegistrationNumber::from_stored("REG-2024-001"),
            default_phone: Phone::from_stored("+1234567890"),
            simulated_latency: Duration::from_millis(1000),
        }
    }
}

impl AuthConfig {
    /// Config without artificial latency (for tests)
    pub fn immediate() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
            ..Default::default()
        }
    }
}
