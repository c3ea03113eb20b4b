//! Dashboard page: the sweets grid with purchase, delete, and create flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It owns the single fetch
//! observer for the sweets cache and routes every mutation back through
//! cache invalidation, so the grid only ever shows backend state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use std::collections::HashSet;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use crate::components::add_sweet_modal::AddSweetModal;
use crate::components::sweet_card::SweetCard;
use crate::state::session::SessionState;
use crate::state::sweets::SweetsCache;
use crate::util::auth::{install_identity_resolution, install_unauth_redirect};

/// Dashboard page. Redirects to `/login` without a stored token.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cache = expect_context::<RwSignal<SweetsCache>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate.clone());
    install_identity_resolution(session);

    let show_add = RwSignal::new(false);
    let notice = RwSignal::new(String::new());
    let is_admin = Signal::derive(move || session.get().is_admin());

    // Discard results that resolve after this page unmounts.
    #[cfg(feature = "hydrate")]
    let alive = Arc::new(AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    // The one observer of the cache's invalidation contract: whenever the
    // current epoch has no snapshot, fetch it.
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        Effect::new(move || {
            if !cache.get().needs_fetch() {
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

    // Ids with a purchase or delete in flight; only the triggering control
    // is disabled, mutations on other sweets stay independent.
    #[cfg(feature = "hydrate")]
    let purchasing = RwSignal::new(HashSet::<i64>::new());
    #[cfg(feature = "hydrate")]
    let deleting = RwSignal::new(HashSet::<i64>::new());

    #[cfg(feature = "hydrate")]
    let alive_purchase = alive.clone();
    let on_purchase = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            if purchasing.get_untracked().contains(&id) {
                return;
            }
            purchasing.update(|p| {
                p.insert(id);
            });
            let alive = alive_purchase.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::purchase_sweet(id).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                purchasing.update(|p| {
                    p.remove(&id);
                });
                match result {
                    Ok(_) => cache.update(SweetsCache::invalidate),
                    Err(e) => notice.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    #[cfg(feature = "hydrate")]
    let alive_delete = alive.clone();
    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            if deleting.get_untracked().contains(&id) {
                return;
            }
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this sweet?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            deleting.update(|d| {
                d.insert(id);
            });
            let alive = alive_delete.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_sweet(id).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                deleting.update(|d| {
                    d.remove(&id);
                });
                match result {
                    Ok(()) => cache.update(SweetsCache::invalidate),
                    Err(e) => notice.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_add_close = Callback::new(move |()| show_add.set(false));
    let on_add_created = Callback::new(move |()| {
        show_add.set(false);
        cache.update(SweetsCache::invalidate);
    });

    let navigate_logout = navigate.clone();
    let on_logout = Callback::new(move |()| {
        // Token is cleared unconditionally; no network involved.
        session.update(SessionState::clear);
        navigate_logout("/login", NavigateOptions::default());
    });

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| {
                view! {
                    <div class="dashboard-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Sweet Shop Management System"</span>
                    <span class="toolbar__spacer"></span>
                    <Show when=move || is_admin.get()>
                        <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                            "Add Sweet"
                        </button>
                    </Show>
                    <a class="btn toolbar__profile" href="/profile">
                        "Profile"
                    </a>
                    <button class="btn toolbar__logout" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </header>

                <Show when=move || !notice.get().is_empty()>
                    <div class="dashboard-page__notice">
                        <span>{move || notice.get()}</span>
                        <button class="btn" on:click=move |_| notice.set(String::new())>
                            "Dismiss"
                        </button>
                    </div>
                </Show>

                <main class="dashboard-page__content">
                    <Show
                        when=move || !cache.get().loading || !cache.get().items.is_empty()
                        fallback=|| view! { <p class="dashboard-page__loading">"Loading sweets..."</p> }
                    >
                        <Show
                            when=move || cache.get().error.is_none()
                            fallback=move || {
                                view! {
                                    <div class="dashboard-page__error">
                                        <p>{move || cache.get().error.unwrap_or_default()}</p>
                                        <button
                                            class="btn"
                                            on:click=move |_| cache.update(SweetsCache::invalidate)
                                        >
                                            "Reload"
                                        </button>
                                    </div>
                                }
                            }
                        >
                            <Show
                                when=move || !cache.get().items.is_empty()
                                fallback=move || {
                                    view! {
                                        <div class="dashboard-page__empty">
                                            <p>
                                                "No sweets available."
                                                {move || {
                                                    is_admin
                                                        .get()
                                                        .then_some(" Add some sweets to get started!")
                                                }}
                                            </p>
                                        </div>
                                    }
                                }
                            >
                                // Rebuilt from every fetched snapshot, so a
                                // re-fetch with unchanged ids still refreshes
                                // each card's quantity and purchase gate.
                                <div class="sweets-grid">
                                    {move || {
                                        cache
                                            .get()
                                            .items
                                            .into_iter()
                                            .map(|sweet| {
                                                let id = sweet.id;
                                                #[cfg(feature = "hydrate")]
                                                let purchase_in_flight = Signal::derive(move || {
                                                    purchasing.get().contains(&id)
                                                });
                                                #[cfg(feature = "hydrate")]
                                                let delete_in_flight = Signal::derive(move || {
                                                    deleting.get().contains(&id)
                                                });
                                                #[cfg(not(feature = "hydrate"))]
                                                let (purchase_in_flight, delete_in_flight) = {
                                                    let _ = id;
                                                    (Signal::derive(|| false), Signal::derive(|| false))
                                                };
                                                view! {
                                                    <SweetCard
                                                        sweet=sweet
                                                        purchasing=purchase_in_flight
                                                        deleting=delete_in_flight
                                                        on_purchase=on_purchase
                                                        on_delete=on_delete
                                                        is_admin=is_admin
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </div>
                            </Show>
                        </Show>
                    </Show>
                </main>

                <Show when=move || show_add.get()>
                    <AddSweetModal on_close=on_add_close on_created=on_add_created/>
                </Show>
            </div>
        </Show>
    }
}
