//! Catalog (Library Data) Client Module
//!
//! Read-only views over the backend JSON API: students, books, payments,
//! notifications, plans, and dashboard stats. Every fetch is best-effort;
//! an unreachable backend renders as empty lists, never as an error.

pub mod client;
pub mod records;

pub use client::CatalogClient;
