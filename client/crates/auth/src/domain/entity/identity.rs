//! Identity Entity
//!
//! The authenticated member of the current session. Role-specific data
//! lives in `RoleProfile` so an owner can never carry student fields.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, identity_id::IdentityId, library_ref::LibraryRef,
    phone::Phone, registration_number::RegistrationNumber, role::Role,
};

/// Role-specific profile data
///
/// Serialized with an internal `role` tag so the persisted session keeps
/// the flat `{ "role": "student", ... }` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum RoleProfile {
    Owner,
    Student {
        library_id: LibraryRef,
        registration_number: RegistrationNumber,
    },
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Owner => Role::Owner,
            RoleProfile::Student { .. } => Role::Student,
        }
    }
}

/// Identity entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: IdentityId,
    pub name: DisplayName,
    pub email: Email,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl Identity {
    /// Create a new identity with a fresh id
    pub fn new(
        name: DisplayName,
        email: Email,
        phone: Option<Phone>,
        profile: RoleProfile,
    ) -> Self {
        Self {
            id: IdentityId::new(),
            name,
            email,
            phone,
            profile,
        }
    }

    pub fn role(&self) -> Role {
        self.profile.role()
    }

    /// Registration number, present only for students
    pub fn registration_number(&self) -> Option<&RegistrationNumber> {
        match &self.profile {
            RoleProfile::Student {
                registration_number,
                ..
            } => Some(registration_number),
            RoleProfile::Owner => None,
        }
    }

    /// Library membership, present only for students
    pub fn library(&self) -> Option<&LibraryRef> {
        match &self.profile {
            RoleProfile::Student { library_id, .. } => Some(library_id),
            RoleProfile::Owner => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Identity {
        Identity::new(
            DisplayName::new("Alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Some(Phone::new("+1234567890").unwrap()),
            RoleProfile::Student {
                library_id: LibraryRef::new("lib-001"),
                registration_number: RegistrationNumber::new("REG-2024-001").unwrap(),
            },
        )
    }

    fn owner() -> Identity {
        Identity::new(
            DisplayName::new("Bob").unwrap(),
            Email::new("bob@example.com").unwrap(),
            None,
            RoleProfile::Owner,
        )
    }

    #[test]
    fn test_student_accessors() {
        let identity = student();
        assert_eq!(identity.role(), Role::Student);
        assert_eq!(identity.library().unwrap().as_str(), "lib-001");
        assert_eq!(
            identity.registration_number().unwrap().as_str(),
            "REG-2024-001"
        );
    }

    #[test]
    fn test_owner_carries_no_student_fields() {
        let identity = owner();
        assert_eq!(identity.role(), Role::Owner);
        assert!(identity.library().is_none());
        assert!(identity.registration_number().is_none());
    }

    #[test]
    fn test_identity_serde_flat_shape() {
        let identity = student();
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["role"], "student");
        assert_eq!(json["libraryId"], "lib-001");
        assert_eq!(json["registrationNumber"], "REG-2024-001");
        assert_eq!(json["email"], "alice@example.com");

        let back: Identity = serde_json::from_value(json).unwrap();
        assert_eq!(back, identity);
    }

    #[test]
    fn test_owner_serde_omits_student_fields() {
        let identity = owner();
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["role"], "owner");
        assert!(json.get("libraryId").is_none());
        assert!(json.get("registrationNumber").is_none());
        assert!(json.get("phone").is_none());
    }
}
