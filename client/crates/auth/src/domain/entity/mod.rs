//! Entity Module

pub mod identity;
pub mod pending_registration;
pub mod session;
