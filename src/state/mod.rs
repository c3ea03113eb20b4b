//! Shared application state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the token + identity lifecycle, `sweets` owns the cached
//! product list. Both are `RwSignal`-wrapped at the app root so pages and
//! components share one copy without globals.

pub mod session;
pub mod sweets;
