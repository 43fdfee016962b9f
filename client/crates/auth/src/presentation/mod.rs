//! Presentation Layer
//!
//! Route table, guard, form validation, and view DTOs.

pub mod dto;
pub mod forms;
pub mod guard;
pub mod routes;

// Re-exports
pub use dto::SessionStatus;
pub use forms::{CodeForm, LoginForm, SignupForm, ValidationError};
pub use guard::{Access, authorize, guard_route, guard_view};
pub use routes::Route;
