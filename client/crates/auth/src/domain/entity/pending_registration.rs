//! Pending Registration Entity
//!
//! The signup draft held between form submission and code verification.
//! Deliberately not serializable: the draft carries the raw password and
//! must only ever live in process memory.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, password::RawPassword, phone::Phone,
    registration_number::RegistrationNumber, role::Role,
};

/// Role-specific signup details, collected before verification
#[derive(Debug, Clone)]
pub enum PendingRole {
    Owner {
        library_name: String,
        library_description: Option<String>,
    },
    Student {
        registration_number: RegistrationNumber,
    },
}

impl PendingRole {
    pub fn role(&self) -> Role {
        match self {
            PendingRole::Owner { .. } => Role::Owner,
            PendingRole::Student { .. } => Role::Student,
        }
    }
}

/// Pending registration entity
#[derive(Debug, Clone)]
pub struct PendingRegistration {
    pub name: DisplayName,
    pub email: Email,
    pub phone: Phone,
    pub password: RawPassword,
    pub details: PendingRole,
    pub created_at: DateTime<Utc>,
}

impl PendingRegistration {
    pub fn new(
        name: DisplayName,
        email: Email,
        phone: Phone,
        password: RawPassword,
        details: PendingRole,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            password,
            details,
            created_at: Utc::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.details.role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_registration_role() {
        let draft = PendingRegistration::new(
            DisplayName::new("Alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Phone::new("+1234567890").unwrap(),
            RawPassword::new("secret123").unwrap(),
            PendingRole::Student {
                registration_number: RegistrationNumber::new("REG-2024-042").unwrap(),
            },
        );
        assert_eq!(draft.role(), Role::Student);

        let draft = PendingRegistration::new(
            DisplayName::new("Bob").unwrap(),
            Email::new("bob@example.com").unwrap(),
            Phone::new("+1234567890").unwrap(),
            RawPassword::new("secret123").unwrap(),
            PendingRole::Owner {
                library_name: "City Library".to_string(),
                library_description: None,
            },
        );
        assert_eq!(draft.role(), Role::Owner);
    }
}
