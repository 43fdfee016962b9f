//! Session DTOs

use serde::Serialize;

use crate::domain::entity::identity::Identity;

/// Session status, the shape views render from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_id: Option<String>,
}

impl From<Option<&Identity>> for SessionStatus {
    fn from(identity: Option<&Identity>) -> Self {
        match identity {
            Some(identity) => Self {
                authenticated: true,
                name: Some(identity.name.to_string()),
                email: Some(identity.email.to_string()),
                role: Some(identity.role().to_string()),
                library_id: identity.library().map(|l| l.to_string()),
            },
            None => Self {
                authenticated: false,
                name: None,
                email: None,
                role: None,
                library_id: None,
            },
        }
    }
}
