//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is provided via context from the app root and
//! injected into pages; there is no ambient global session access. Route
//! guards and role-gated components read it to coordinate login redirects and
//! privileged rendering.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage;

/// Session token plus resolved identity, with its init/teardown lifecycle.
///
/// `loading` is true while identity resolution for a stored token is still in
/// flight, so guards can avoid both flashing protected content and bouncing
/// an authenticated user to login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Init lifecycle: rebuild the session from the persisted token.
    /// Identity stays unresolved until `/auth/me` answers.
    pub fn hydrate() -> Self {
        let token = storage::read_token();
        let loading = token.is_some();
        Self {
            token,
            user: None,
            loading,
        }
    }

    /// Record a fresh login token. Persisted immediately so the very next
    /// request (the identity fetch) already carries the bearer header;
    /// `loading` stays true until that fetch resolves.
    pub fn adopt_token(&mut self, token: String) {
        storage::write_token(&token);
        self.token = Some(token);
        self.user = None;
        self.loading = true;
    }

    /// Adopt a resolved identity for the already-stored token.
    pub fn resolve_user(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Identity resolution failed without invalidating the token: keep the
    /// session but stop treating the user as privileged.
    pub fn degrade(&mut self) {
        self.user = None;
        self.loading = false;
    }

    /// Teardown lifecycle: drop the token and identity everywhere, storage
    /// included. Used by logout and by stale-token handling.
    pub fn clear(&mut self) {
        storage::clear_token();
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Whether a token is present. Presence alone gates protected routes;
    /// privileges additionally need a resolved identity.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether privileged controls (create, delete) should render. Role comes
    /// only from the resolved identity, never from local assumptions.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}
