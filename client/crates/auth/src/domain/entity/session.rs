//! Stored Session Entity
//!
//! The document shape persisted by the session store. Wraps the identity
//! with the time it was saved, for diagnostics on restore.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::identity::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub identity: Identity,
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::identity::RoleProfile;
    use crate::domain::value_object::{display_name::DisplayName, email::Email};

    #[test]
    fn test_stored_session_round_trip() {
        let session = StoredSession::new(Identity::new(
            DisplayName::new("Bob").unwrap(),
            Email::new("bob@example.com").unwrap(),
            None,
            RoleProfile::Owner,
        ));
        let json = serde_json::to_string(&session).unwrap();
        let back: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
