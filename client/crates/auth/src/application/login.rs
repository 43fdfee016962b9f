//! Login Use Case
//!
//! Establishes a session for an email address. If the stored session
//! belongs to the same email, that identity is adopted as-is; otherwise a
//! fresh student identity is synthesized from the address and persisted.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::identity::{Identity, RoleProfile};
use crate::domain::repository::SessionStore;
use crate::domain::value_object::{display_name::DisplayName, email::Email};
use crate::error::AuthResult;

/// Login input
#[derive(Debug)]
pub struct LoginInput {
    pub email: Email,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LoginUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_store,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<Identity> {
        platform::latency::simulate(self.config.simulated_latency).await;

        // Adopt the stored identity when the email matches, whatever its
        // role. Roles are otherwise only assigned through signup.
        if let Some(stored) = self.session_store.load().await? {
            if stored.email == input.email {
                tracing::info!(email = %input.email, role = %stored.role(), "Adopted stored identity");
                self.session_store.save(&stored).await?;
                return Ok(stored);
            }
        }

        let identity = Identity::new(
            DisplayName::from_email(&input.email),
            input.email,
            Some(self.config.default_phone.clone()),
            RoleProfile::Student {
                library_id: self.config.default_library.clone(),
                registration_number: self.config.default_registration.clone(),
            },
        );

        self.session_store.save(&identity).await?;

        tracing::info!(email = %identity.email, "Synthesized student identity");

        Ok(identity)
    }
}
