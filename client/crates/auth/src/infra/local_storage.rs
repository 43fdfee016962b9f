//! Store Implementations
//!
//! The file-backed session store persists across restarts, playing the
//! part of the device's local storage. The pending registration slot is
//! memory-only: a draft holds the raw password and must not outlive the
//! process.

use std::sync::{Mutex, PoisonError};

use platform::kv::JsonDocumentStore;

use crate::domain::entity::identity::Identity;
use crate::domain::entity::pending_registration::PendingRegistration;
use crate::domain::entity::session::StoredSession;
use crate::domain::repository::{PendingRegistrationStore, SessionStore};
use crate::error::AuthResult;

/// Session store backed by a JSON document on disk
pub struct FileSessionStore {
    store: JsonDocumentStore,
}

impl FileSessionStore {
    pub fn new(store: JsonDocumentStore) -> Self {
        Self { store }
    }
}

impl SessionStore for FileSessionStore {
    async fn save(&self, identity: &Identity) -> AuthResult<()> {
        let session = StoredSession::new(identity.clone());
        self.store.write(&session).await?;
        Ok(())
    }

    async fn load(&self) -> AuthResult<Option<Identity>> {
        // Missing or corrupt documents read back as None; a damaged
        // session file means logging in again, not a startup failure.
        let session: Option<StoredSession> = self.store.read().await;
        Ok(session.map(|s| s.identity))
    }

    async fn clear(&self) -> AuthResult<()> {
        self.store.remove().await?;
        Ok(())
    }
}

/// In-memory session store, used by tests
#[derive(Default)]
pub struct InMemorySessionStore {
    slot: Mutex<Option<Identity>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Identity>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for InMemorySessionStore {
    async fn save(&self, identity: &Identity) -> AuthResult<()> {
        *self.slot() = Some(identity.clone());
        Ok(())
    }

    async fn load(&self) -> AuthResult<Option<Identity>> {
        Ok(self.slot().clone())
    }

    async fn clear(&self) -> AuthResult<()> {
        *self.slot() = None;
        Ok(())
    }
}

/// In-memory pending registration slot
///
/// The production implementation as well as the test one: drafts never
/// touch disk.
#[derive(Default)]
pub struct InMemoryPendingSlot {
    slot: Mutex<Option<PendingRegistration>>,
}

impl InMemoryPendingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<PendingRegistration>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PendingRegistrationStore for InMemoryPendingSlot {
    async fn put(&self, draft: PendingRegistration) -> AuthResult<()> {
        *self.slot() = Some(draft);
        Ok(())
    }

    async fn get(&self) -> AuthResult<Option<PendingRegistration>> {
        Ok(self.slot().clone())
    }

    async fn take(&self) -> AuthResult<Option<PendingRegistration>> {
        Ok(self.slot().take())
    }

    async fn clear(&self) -> AuthResult<()> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::identity::RoleProfile;
    use crate::domain::entity::pending_registration::PendingRole;
    use crate::domain::repository::{PendingRegistrationStore, SessionStore};
    use crate::domain::value_object::{
        display_name::DisplayName, email::Email, password::RawPassword, phone::Phone,
        registration_number::RegistrationNumber,
    };

    fn owner_identity() -> Identity {
        Identity::new(
            DisplayName::new("Bob").unwrap(),
            Email::new("bob@example.com").unwrap(),
            None,
            RoleProfile::Owner,
        )
    }

    fn student_draft() -> PendingRegistration {
        PendingRegistration::new(
            DisplayName::new("Alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Phone::new("+1234567890").unwrap(),
            RawPassword::new("secret123").unwrap(),
            PendingRole::Student {
                registration_number: RegistrationNumber::new("REG-2024-042").unwrap(),
            },
        )
    }

    #[tokio::test]
    async fn test_in_memory_session_round_trip() {
        let store = InMemorySessionStore::new();
        assert!(store.load().await.unwrap().is_none());

        let identity = owner_identity();
        store.save(&identity).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(identity));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        // clear is idempotent
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_pending_slot_take_consumes() {
        let slot = InMemoryPendingSlot::new();
        slot.put(student_draft()).await.unwrap();

        assert!(slot.get().await.unwrap().is_some());
        assert!(slot.take().await.unwrap().is_some());
        assert!(slot.take().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_pending_slot_put_replaces() {
        let slot = InMemoryPendingSlot::new();
        slot.put(student_draft()).await.unwrap();

        let mut other = student_draft();
        other.email = Email::new("carol@example.com").unwrap();
        slot.put(other).await.unwrap();

        let draft = slot.take().await.unwrap().unwrap();
        assert_eq!(draft.email.as_str(), "carol@example.com");
    }

    #[tokio::test]
    async fn test_file_session_store_round_trip() {
        let path = std::env::temp_dir().join(format!("session-{}.json", uuid::Uuid::new_v4()));
        let store = FileSessionStore::new(JsonDocumentStore::new(&path));

        assert!(store.load().await.unwrap().is_none());

        let identity = owner_identity();
        store.save(&identity).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(identity));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        let _ = tokio::fs::remove_file(&path).await;
    }
}
