//! Library Reference Value Object
//!
//! Opaque identifier of the library a student belongs to ("lib-001").
//! The client never mints these; they come from configuration or storage,
//! so construction is infallible.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryRef(String);

impl LibraryRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LibraryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LibraryRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_ref_roundtrip() {
        let lib = LibraryRef::new("lib-001");
        assert_eq!(lib.as_str(), "lib-001");
        assert_eq!(lib.to_string(), "lib-001");
    }
}
