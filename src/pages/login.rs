//! Login page: username + password for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionState;

/// Trim credentials and require both fields before a request goes out.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Login form. On success stores the token, resolves the identity, and lands
/// on the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username_value, &password_value).await {
                    Ok(token) => {
                        session.update(|s| s.adopt_token(token.access_token));
                        // Resolve the identity now so role gating is settled
                        // before the dashboard renders. A transient failure
                        // here degrades privileges but keeps the session.
                        match crate::net::api::fetch_current_user().await {
                            Ok(user) => session.update(|s| s.resolve_user(user)),
                            Err(e) => {
                                log::warn!("identity resolution after login failed: {e}");
                                session.update(SessionState::degrade);
                            }
                        }
                        navigate("/", NavigateOptions::default());
                    }
                    // At login a 401 means bad credentials, not a stale session.
                    Err(ApiError::Unauthorized) => {
                        info.set("Incorrect username or password.".to_owned());
                        busy.set(false);
                    }
                    Err(e) => {
                        info.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sweet Shop"</h1>
                <p class="login-card__subtitle">"Sign in to manage the shop"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
