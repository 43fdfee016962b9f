//! Verify Code Use Case
//!
//! Confirms a pending registration with the verification code and promotes
//! the draft to a persisted identity. A wrong code leaves the draft in
//! place so the user can retry; a correct code consumes it.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::identity::{Identity, RoleProfile};
use crate::domain::entity::pending_registration::PendingRole;
use crate::domain::repository::{PendingRegistrationStore, SessionStore};
use crate::error::{AuthError, AuthResult};

/// Verify code use case
pub struct VerifyCodeUseCase<S, P>
where
    S: SessionStore,
    P: PendingRegistrationStore,
{
    session_store: Arc<S>,
    pending_store: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<S, P> VerifyCodeUseCase<S, P>
where
    S: SessionStore,
    P: PendingRegistrationStore,
{
    pub fn new(session_store: Arc<S>, pending_store: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_store,
            pending_store,
            config,
        }
    }

    pub async fn execute(&self, code: &str) -> AuthResult<Identity> {
        platform::latency::simulate(self.config.simulated_latency).await;

        // Check the code before touching the draft: a wrong code must not
        // consume the registration.
        if code != self.config.verification_code {
            return Err(AuthError::InvalidVerificationCode);
        }

        let draft = self
            .pending_store
            .take()
            .await?
            .ok_or(AuthError::VerificationNotPending)?;

        let profile = match draft.details {
            // The owner's library is created out of band; the identity
            // itself carries no library membership.
            PendingRole::Owner { .. } => RoleProfile::Owner,
            PendingRole::Student {
                registration_number,
            } => RoleProfile::Student {
                library_id: self.config.default_library.clone(),
                registration_number,
            },
        };

        let identity = Identity::new(draft.name, draft.email, Some(draft.phone), profile);

        self.session_store.save(&identity).await?;

        tracing::info!(email = %identity.email, role = %identity.role(), "Registration verified");

        Ok(identity)
    }
}
