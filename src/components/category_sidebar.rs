//! Category Sidebar Component
//!
//! Left column of category buttons with the active one highlighted, plus
//! the "All Plants" reset control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::store::{
    store_set_active_category, store_set_categories, use_app_store, AppStateStoreFields,
};

#[component]
pub fn CategorySidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Load categories once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(categories) => store_set_categories(&store, categories),
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("[CategorySidebar] Failed to load categories: {}", error).into(),
                    );
                }
            }
        });
    });

    let select_category = move |id: String| {
        store_set_active_category(&store, Some(id));
        ctx.reload();
    };

    let reset = move |_| {
        store_set_active_category(&store, None);
        ctx.reload();
    };

    view! {
        <aside class="category-sidebar">
            <div class="category-header">"Categories"</div>

            <button
                class=move || {
                    if store.active_category().read().is_none() {
                        "category-btn active"
                    } else {
                        "category-btn"
                    }
                }
                on:click=reset
            >
                "All Plants"
            </button>

            {move || {
                store
                    .categories()
                    .get()
                    .into_iter()
                    .map(|category| {
                        let id = category.id.clone();
                        let is_active = {
                            let id = id.clone();
                            move || {
                                store.active_category().read().as_deref() == Some(id.as_str())
                            }
                        };
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "category-btn active" } else { "category-btn" }
                                }
                                on:click=move |_| select_category(id.clone())
                            >
                                {category.name.clone()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </aside>
    }
}
