//! Store Traits
//!
//! Interfaces for session and registration persistence. Implementations
//! are in the infrastructure layer and injected into the gate.

use crate::domain::entity::{identity::Identity, pending_registration::PendingRegistration};
use crate::error::AuthResult;

/// Session store trait
///
/// Holds at most one identity, the authenticated member of this device.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Persist the identity, replacing any previous one
    async fn save(&self, identity: &Identity) -> AuthResult<()>;

    /// Load the stored identity, if any
    async fn load(&self) -> AuthResult<Option<Identity>>;

    /// Remove the stored identity. Idempotent.
    async fn clear(&self) -> AuthResult<()>;
}

/// Pending registration store trait
///
/// Holds at most one signup draft awaiting verification. A new signup
/// replaces the previous draft.
#[trait_variant::make(PendingRegistrationStore: Send)]
pub trait LocalPendingRegistrationStore {
    /// Store a draft, replacing any previous one
    async fn put(&self, draft: PendingRegistration) -> AuthResult<()>;

    /// Peek at the current draft without consuming it
    async fn get(&self) -> AuthResult<Option<PendingRegistration>>;

    /// Take the draft out of the store, leaving it empty
    async fn take(&self) -> AuthResult<Option<PendingRegistration>>;

    /// Discard the draft. Idempotent.
    async fn clear(&self) -> AuthResult<()>;
}
