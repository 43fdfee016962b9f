//! Domain Layer
//!
//! Contains entities, value objects, and store traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    identity::{Identity, RoleProfile},
    pending_registration::{PendingRegistration, PendingRole},
    session::StoredSession,
};
pub use repository::{PendingRegistrationStore, SessionStore};
