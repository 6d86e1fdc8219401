//! Search Bar Component
//!
//! Name search over the currently loaded plants. Display-only: typing
//! narrows the grid without touching the stored list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn SearchBar(query: ReadSignal<String>, set_query: WriteSignal<String>) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search plants..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_query.set(input.value());
                }
            />
        </div>
    }
}
