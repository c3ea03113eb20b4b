//! Networking modules for the backend REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls with bearer-token injection, `error` defines
//! the failure taxonomy, and `types` holds the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
