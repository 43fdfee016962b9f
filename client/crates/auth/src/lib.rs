//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, store traits
//! - `application/` - Use cases and the auth gate
//! - `infra/` - Store implementations
//! - `presentation/` - Route table, guard, forms, DTOs
//!
//! ## Features
//! - Email login with session adoption or a synthesized student identity
//! - Two-step signup: registration draft confirmed by a verification code
//! - Persisted session restored across restarts
//! - Role-based route guarding (Owner, Student)
//!
//! ## Model
//! - The verification code is a fixed demo code; no codes are delivered
//! - Passwords are collected, never verified or persisted
//! - At most one auth operation resolves at a time; a concurrent second
//!   submission fails fast

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::gate::AuthGate;
pub use error::{AuthError, AuthResult};
pub use infra::local_storage::{FileSessionStore, InMemoryPendingSlot, InMemorySessionStore};
pub use presentation::routes::Route;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod guard {
    pub use crate::presentation::guard::*;
}

pub mod forms {
    pub use crate::presentation::forms::*;
}
