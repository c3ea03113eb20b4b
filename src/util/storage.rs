//! Browser localStorage persistence for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only client-persisted state. Centralizing the web-sys
//! glue here keeps hydrate-only storage access out of pages and the adapter.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely no-op
//! so server rendering stays deterministic.

/// Storage key holding the bearer token across reloads.
pub const TOKEN_KEY: &str = "sweetshop_token";

/// Read the stored bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token for subsequent requests and reloads.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token. Always succeeds from the caller's point of view,
/// so logout can never be blocked by storage state.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
