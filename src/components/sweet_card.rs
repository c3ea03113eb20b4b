//! Card component for one sweet in the dashboard grid.
//!
//! DESIGN
//! ======
//! Purely presentational: renders the sweet it was given and emits purchase
//! and delete intents upward. Stock gating lives in a pure helper so the
//! disable rule is testable without a DOM.

#[cfg(test)]
#[path = "sweet_card_test.rs"]
mod sweet_card_test;

use leptos::prelude::*;

use crate::net::types::Sweet;

/// Dollar formatting with two decimals, e.g. `$9.99`.
fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Stock label shown under the price.
fn stock_label(quantity: u32) -> String {
    if quantity == 0 {
        "Out of stock".to_owned()
    } else {
        format!("{quantity} in stock")
    }
}

/// A purchase is never submittable for an out-of-stock sweet or while this
/// card's own purchase is still in flight.
fn purchase_disabled(quantity: u32, purchasing: bool) -> bool {
    quantity == 0 || purchasing
}

/// A delete is never re-submittable while this card's own delete is still in
/// flight; deletes on other cards stay independent.
fn delete_disabled(deleting: bool) -> bool {
    deleting
}

/// A sweet card with a buy button and, for admins, a delete button.
#[component]
pub fn SweetCard(
    sweet: Sweet,
    purchasing: Signal<bool>,
    deleting: Signal<bool>,
    on_purchase: Callback<i64>,
    on_delete: Callback<i64>,
    is_admin: Signal<bool>,
) -> impl IntoView {
    let id = sweet.id;
    let quantity = sweet.quantity;
    let out_of_stock = quantity == 0;

    view! {
        <div class="sweet-card">
            <div class="sweet-card__header">
                <h3 class="sweet-card__name">{sweet.name}</h3>
                <span class="sweet-card__category">{sweet.category}</span>
            </div>
            <div class="sweet-card__details">
                <span class="sweet-card__price">{format_price(sweet.price)}</span>
                <span
                    class="sweet-card__stock"
                    class:sweet-card__stock--empty=out_of_stock
                >
                    {stock_label(quantity)}
                </span>
            </div>
            <div class="sweet-card__actions">
                <button
                    class="btn btn--primary sweet-card__buy"
                    disabled=move || purchase_disabled(quantity, purchasing.get())
                    on:click=move |_| on_purchase.run(id)
                >
                    {move || if purchasing.get() { "Purchasing..." } else { "Buy Now" }}
                </button>
                <Show when=move || is_admin.get()>
                    <button
                        class="btn sweet-card__delete"
                        disabled=move || delete_disabled(deleting.get())
                        on:click=move |_| on_delete.run(id)
                        title="Delete sweet"
                        aria-label="Delete sweet"
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
