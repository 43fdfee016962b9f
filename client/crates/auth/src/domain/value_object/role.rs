//! Role Value Object
//!
//! Exactly two membership roles exist: a library owner and a student.
//! The role of an identity never changes once the identity is created.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Student,
}

impl Role {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Student => "student",
        }
    }

    /// Parse a role code. Stored and form data are untrusted, so unknown
    /// codes are `None` rather than a panic.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "owner" => Some(Role::Owner),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_owner(&self) -> bool {
        matches!(self, Role::Owner)
    }

    #[inline]
    pub const fn is_student(&self) -> bool {
        matches!(self, Role::Student)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
