//! Sign Out Use Case
//!
//! Clears the stored session and any pending registration. Resolves
//! immediately, with no simulated latency.

use std::sync::Arc;

use crate::domain::repository::{PendingRegistrationStore, SessionStore};
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S, P>
where
    S: SessionStore,
    P: PendingRegistrationStore,
{
    session_store: Arc<S>,
    pending_store: Arc<P>,
}

impl<S, P> SignOutUseCase<S, P>
where
    S: SessionStore,
    P: PendingRegistrationStore,
{
    pub fn new(session_store: Arc<S>, pending_store: Arc<P>) -> Self {
        Self {
            session_store,
            pending_store,
        }
    }

    pub async fn execute(&self) -> AuthResult<()> {
        self.pending_store.clear().await?;
        self.session_store.clear().await?;

        tracing::info!("Signed out");

        Ok(())
    }
}
