//! Title Bar Component
//!
//! Top bar with the app title, the light/dark theme toggle, and the cart
//! button with its item-count badge.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Header bar shown on every page
#[component]
pub fn TitleBar(set_cart_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let (dark, set_dark) = signal(false);

    // Cosmetic only: flips the data-theme attribute on the document element
    let toggle_theme = move |_| {
        let next = !dark.get();
        set_dark.set(next);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("data-theme", if next { "dark" } else { "light" });
            }
        }
    };

    let cart_count = move || store.cart().read().len();

    view! {
        <header class="title-bar">
            <span class="title-bar-logo">"🌿"</span>
            <span class="title-bar-title">"Green Earth"</span>

            <div class="title-bar-controls">
                <button
                    class="theme-toggle-btn"
                    title=move || if dark.get() { "Switch to light" } else { "Switch to dark" }
                    on:click=toggle_theme
                >
                    {move || if dark.get() { "🌙" } else { "☀️" }}
                </button>
                <button class="cart-btn" on:click=move |_| set_cart_open.set(true)>
                    "🛒 Cart"
                    <span class="cart-count">{cart_count}</span>
                </button>
            </div>
        </header>
    }
}
