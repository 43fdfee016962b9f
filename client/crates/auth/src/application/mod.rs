//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod gate;
pub mod login;
pub mod sign_out;
pub mod sign_up;
pub mod verify_code;

// Re-exports
pub use config::AuthConfig;
pub use gate::AuthGate;
pub use login::{LoginInput, LoginUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use verify_code::VerifyCodeUseCase;
