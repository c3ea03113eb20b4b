//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth gating, cache observation,
//! mutation dispatch) and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod register;
