//! Modal form for creating a new sweet (admin only).

#[cfg(test)]
#[path = "add_sweet_modal_test.rs"]
mod add_sweet_modal_test;

use leptos::prelude::*;

use crate::net::types::NewSweet;
use crate::util::form::{parse_price, parse_quantity};

/// Coerce the raw form fields into a create payload, or explain what's wrong.
fn build_new_sweet(
    name: &str,
    category: &str,
    price: &str,
    quantity: &str,
) -> Result<NewSweet, String> {
    let name = name.trim();
    let category = category.trim();
    if name.is_empty() || category.is_empty() {
        return Err("Enter a name and a category.".to_owned());
    }
    let price = parse_price(price).map_err(str::to_owned)?;
    let quantity = parse_quantity(quantity).map_err(str::to_owned)?;
    Ok(NewSweet {
        name: name.to_owned(),
        category: category.to_owned(),
        price,
        quantity,
    })
}

/// Add-sweet dialog. `on_created` fires after the backend accepts the sweet
/// so the opener can invalidate the list; `on_close` dismisses without
/// creating.
#[component]
pub fn AddSweetModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_backdrop = move |_| on_close.run(());
    let on_cancel = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_new_sweet(&name.get(), &category.get(), &price.get(), &quantity.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_sweet(&payload).await {
                Ok(_) => on_created.run(()),
                // Rejection leaves the form editable for another attempt.
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--add-sweet"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Add New Sweet"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__field">
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        "Category"
                        <input
                            type="text"
                            prop:value=move || category.get()
                            on:input=move |ev| category.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        "Price"
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        "Quantity"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || quantity.get()
                            on:input=move |ev| quantity.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="dialog__error">{move || error.get()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Adding..." } else { "Add Sweet" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
