//! Registration page: create an account, then log straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::session::SessionState;

/// Trim the registration fields and require all three; the email just needs
/// the obvious shape, real validation is the backend's job.
fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let username = username.trim();
    let email = email.trim();
    let password = password.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter username, email, and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((username.to_owned(), email.to_owned(), password.to_owned()))
}

/// Registration form. `/auth/register` returns the created user but no
/// token, so a successful registration immediately logs in with the same
/// credentials and lands on the dashboard with a live session.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
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
        let (username_value, email_value, password_value) =
            match validate_register_input(&username.get(), &email.get(), &password.get()) {
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
                let user = match crate::net::api::register(
                    &username_value,
                    &email_value,
                    &password_value,
                )
                .await
                {
                    Ok(user) => user,
                    Err(e) => {
                        info.set(e.to_string());
                        busy.set(false);
                        return;
                    }
                };
                match crate::net::api::login(&username_value, &password_value).await {
                    Ok(token) => {
                        session.update(|s| {
                            s.adopt_token(token.access_token);
                            s.resolve_user(user);
                        });
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        // Account exists but the session does not; let the
                        // user finish on the login page.
                        log::warn!("auto-login after registration failed: {e}");
                        info.set("Account created. Please sign in.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sweet Shop"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
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
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
