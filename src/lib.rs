//! # sweetshop-client
//!
//! Leptos + WASM frontend for the sweet shop inventory tool. Users register
//! and log in, browse the sweet list, purchase items, and — when their role
//! allows — add or delete sweets.
//!
//! Session handling (bearer token in localStorage, identity from
//! `/auth/me`) lives in `state::session`; the sweet list flows through the
//! invalidation-driven cache in `state::sweets`; all HTTP goes through
//! `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire up panic reporting and console logging, then
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
