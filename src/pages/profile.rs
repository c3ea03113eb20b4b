//! Profile page: identity card plus admin inventory statistics.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use crate::state::session::SessionState;
use crate::state::sweets::SweetsCache;
use crate::util::auth::{install_identity_resolution, install_unauth_redirect};
use crate::util::stats::InventoryStats;

/// Single-letter avatar fallback, e.g. `"alice"` -> `"A"`.
fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

/// Capitalized role badge text, e.g. `"admin"` -> `"Admin"`.
fn role_label(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Profile page. Redirects to `/login` without a stored token; inventory
/// statistics render for admins only and are recomputed from the cache's
/// latest snapshot on every render.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cache = expect_context::<RwSignal<SweetsCache>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate.clone());
    install_identity_resolution(session);

    let is_admin = Signal::derive(move || session.get().is_admin());

    // Admins see inventory stats, so the cache observer runs here too; it
    // no-ops whenever the dashboard already fetched the current epoch.
    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        {
            let alive = alive.clone();
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }
        Effect::new(move || {
            if !is_admin.get() || !cache.get().needs_fetch() {
                return;
            }
            let epoch = cache
                .try_update(SweetsCache::begin_fetch)
                .unwrap_or_default();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::list_sweets().await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(items) => cache.update(|c| c.store(epoch, items)),
                    Err(e) => cache.update(|c| c.fail(e.to_string())),
                }
            });
        });
    }

    let stats = Signal::derive(move || InventoryStats::from_sweets(&cache.get().items));
    let username = move || {
        session
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_else(|| "—".to_owned())
    };
    let email = move || {
        session
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_else(|| "—".to_owned())
    };
    let user_id = move || {
        session
            .get()
            .user
            .map(|u| format!("#{}", u.id))
            .unwrap_or_else(|| "—".to_owned())
    };
    let role = move || {
        session
            .get()
            .user
            .map(|u| role_label(&u.role))
            .unwrap_or_else(|| "—".to_owned())
    };
    let initial = move || {
        session
            .get()
            .user
            .map(|u| avatar_initial(&u.username))
            .unwrap_or_default()
    };

    let navigate_back = navigate.clone();
    let on_back = Callback::new(move |()| {
        navigate_back("/", leptos_router::NavigateOptions::default());
    });

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| {
                view! {
                    <div class="profile-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="profile-page">
                <header class="profile-page__header toolbar">
                    <span class="toolbar__title">"User Profile"</span>
                    <span class="toolbar__spacer"></span>
                    <button class="btn" on:click=move |_| on_back.run(())>
                        "Back to Dashboard"
                    </button>
                </header>

                <Show
                    when=move || session.get().user.is_some()
                    fallback=|| view! { <p class="profile-page__loading">"Loading profile..."</p> }
                >
                    <div class="profile-card">
                        <div class="profile-card__avatar">
                            <span class="profile-card__avatar-circle">{initial}</span>
                            <Show when=move || is_admin.get()>
                                <span class="profile-card__badge">"Admin"</span>
                            </Show>
                        </div>
                        <div class="profile-card__info">
                            <h2>{username}</h2>
                            <dl class="profile-card__fields">
                                <dt>"Email"</dt>
                                <dd>{email}</dd>
                                <dt>"User ID"</dt>
                                <dd>{user_id}</dd>
                                <dt>"Role"</dt>
                                <dd>{role}</dd>
                            </dl>
                        </div>
                    </div>

                    <Show
                        when=move || is_admin.get()
                        fallback=|| {
                            view! {
                                <section class="profile-page__permissions">
                                    <h3>"User Permissions"</h3>
                                    <ul>
                                        <li>"View all sweets"</li>
                                        <li>"Purchase sweets"</li>
                                    </ul>
                                </section>
                            }
                        }
                    >
                        <section class="profile-page__admin">
                            <h3>"Admin Dashboard"</h3>
                            <div class="profile-page__stats">
                                <div class="stat-card">
                                    <span class="stat-card__value">{move || stats.get().total}</span>
                                    <span class="stat-card__label">"Total Sweets"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__value">
                                        {move || stats.get().in_stock_units}
                                    </span>
                                    <span class="stat-card__label">"Items in Stock"</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__value">
                                        {move || stats.get().out_of_stock}
                                    </span>
                                    <span class="stat-card__label">"Out of Stock"</span>
                                </div>
                            </div>
                            <div class="profile-page__permissions">
                                <h4>"Admin Permissions"</h4>
                                <ul>
                                    <li>"Create new sweets"</li>
                                    <li>"Delete sweets"</li>
                                    <li>"View all inventory statistics"</li>
                                </ul>
                            </div>
                        </section>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
