//! Cart Modal Component
//!
//! Cart list with per-row remove buttons, the running total, and the
//! clear-cart control.

use leptos::prelude::*;

use crate::cart;
use crate::format;
use crate::store::{
    store_clear_cart, store_remove_cart_item, use_app_store, AppStateStoreFields,
};

#[component]
pub fn CartModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();

    let total = move || format::currency(cart::total(&store.cart().read()));

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| set_open.set(false)>
                <div class="modal cart-modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close-btn" on:click=move |_| set_open.set(false)>
                        "✕"
                    </button>
                    <h3>"Your Cart"</h3>

                    {move || {
                        let items = store.cart().get();
                        if items.is_empty() {
                            view! { <div class="cart-empty">"Cart is empty."</div> }.into_any()
                        } else {
                            view! {
                                <ul class="cart-list">
                                    {items
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, item)| {
                                            view! {
                                                <li class="cart-row">
                                                    <div class="cart-row-info">
                                                        <span class="cart-row-icon">"🌱"</span>
                                                        <div>
                                                            <div class="cart-row-name">
                                                                {item.name.clone()}
                                                            </div>
                                                            <div class="cart-row-price">
                                                                "$ " {format::currency(item.price)}
                                                            </div>
                                                        </div>
                                                    </div>
                                                    <button
                                                        class="cart-remove-btn"
                                                        on:click=move |_| {
                                                            store_remove_cart_item(&store, index)
                                                        }
                                                    >
                                                        "❌"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any()
                        }
                    }}

                    <div class="cart-footer">
                        <span class="cart-total">"Total: $" {total}</span>
                        <button class="clear-cart-btn" on:click=move |_| store_clear_cart(&store)>
                            "Clear Cart"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
