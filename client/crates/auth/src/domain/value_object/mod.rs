//! Value Object Module

pub mod display_name;
pub mod email;
pub mod identity_id;
pub mod library_ref;
pub mod password;
pub mod phone;
pub mod registration_number;
pub mod role;
