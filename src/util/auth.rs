//! Shared auth-gate helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical redirect behavior: no stored
//! token means an immediate bounce to `/login` before protected content can
//! flash, and a stale token discovered during identity resolution clears the
//! session first.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::session::SessionState;

/// Whether a protected route must bounce to the login page.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    !session.is_authenticated()
}

/// What identity-resolution failure does to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnauthorizedAction {
    /// The backend rejected the token: clear it and redirect to login.
    ClearSession,
    /// Transient failure: keep the session, drop privileged rendering only.
    DegradeOnly,
}

impl UnauthorizedAction {
    /// Only a definitive 401 logs the user out; anything else (network blips,
    /// backend 5xx) must not cause a false-positive logout.
    pub fn from_error(err: &ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::ClearSession,
            ApiError::Rejected { .. } | ApiError::Network(_) => Self::DegradeOnly,
        }
    }
}

/// Redirect to `/login` whenever the session holds no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Resolve identity for the stored token and keep the session honest:
/// a 401 clears the session (the redirect effect then fires), any other
/// failure is logged and degrades privileged rendering only.
pub fn install_identity_resolution(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        if !session.get_untracked().loading {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Ok(user) => session.update(|s| s.resolve_user(user)),
                Err(err) => match UnauthorizedAction::from_error(&err) {
                    UnauthorizedAction::ClearSession => {
                        log::warn!("stored token rejected, logging out: {err}");
                        session.update(SessionState::clear);
                    }
                    UnauthorizedAction::DegradeOnly => {
                        log::warn!("identity resolution failed, keeping session: {err}");
                        session.update(SessionState::degrade);
                    }
                },
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
