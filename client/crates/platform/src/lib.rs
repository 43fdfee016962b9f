//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the client:
//! - Best-effort JSON fetching from the backend HTTP API
//! - Durable local JSON document storage (the browser-storage analog)
//! - Simulated network latency for the mock auth flows
//! - View-scoped task lifetimes for fire-and-forget fetches

pub mod http;
pub mod kv;
pub mod latency;
pub mod scope;
