//! Infrastructure Layer
//!
//! Store implementations for the domain traits.

pub mod local_storage;

pub use local_storage::{FileSessionStore, InMemoryPendingSlot, InMemorySessionStore};
