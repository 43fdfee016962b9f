//! Sign Up Use Case
//!
//! Buffers a registration draft until the verification code confirms it.
//! No identity exists and nothing is persisted until verification.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::pending_registration::{PendingRegistration, PendingRole};
use crate::domain::repository::PendingRegistrationStore;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, password::RawPassword, phone::Phone,
};
use crate::error::AuthResult;

/// Sign up input, already validated by the form layer
#[derive(Debug)]
pub struct SignUpInput {
    pub name: DisplayName,
    pub email: Email,
    pub phone: Phone,
    pub password: RawPassword,
    pub details: PendingRole,
}

/// Sign up use case
pub struct SignUpUseCase<P>
where
    P: PendingRegistrationStore,
{
    pending_store: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<P> SignUpUseCase<P>
where
    P: PendingRegistrationStore,
{
    pub fn new(pending_store: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            pending_store,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<()> {
        platform::latency::simulate(self.config.simulated_latency).await;

        let draft = PendingRegistration::new(
            input.name,
            input.email,
            input.phone,
            input.password,
            input.details,
        );

        tracing::info!(email = %draft.email, role = %draft.role(), "Registration pending verification");

        // Replaces any earlier draft; only one signup is in flight at a time.
        self.pending_store.put(draft).await?;

        Ok(())
    }
}
