//! Green Earth App
//!
//! Main application component: provides the store and context, loads data,
//! and lays out the sidebar + grid with the modals on top.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    CartModal, CategorySidebar, DetailsModal, PlantGrid, SearchBar, Spinner, TitleBar,
};
use crate::context::AppContext;
use crate::models::PlantDetails;
use crate::store::{store_set_plants, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (loading, set_loading) = signal(0u32);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((loading, set_loading), (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    let (query, set_query) = signal(String::new());
    let (details, set_details) = signal::<Option<PlantDetails>>(None);
    let (cart_open, set_cart_open) = signal(false);

    // Load plants on mount and again whenever the trigger fires or the
    // active category changes. A ticket taken before the await keeps a slow
    // earlier response from overwriting a newer list.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let active = store.active_category().get();
        web_sys::console::log_1(
            &format!("[App] Loading plants, category={:?}, trigger={}", active, trigger).into(),
        );
        let ticket = ctx.plant_requests.next();
        spawn_local(async move {
            let _guard = ctx.begin_loading();
            let result = match active.as_deref() {
                Some(id) => api::fetch_plants_by_category(id).await,
                None => api::fetch_all_plants().await,
            };
            if !ctx.plant_requests.is_current(ticket) {
                return;
            }
            match result {
                Ok(plants) => {
                    store_set_plants(&store, plants);
                    // A fresh list starts unfiltered; the search box only
                    // narrows the view it was typed against
                    set_query.set(String::new());
                }
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("[App] Failed to load plants: {}", error).into(),
                    );
                }
            }
        });
    });

    view! {
        <TitleBar set_cart_open=set_cart_open />

        <div class="app-layout">
            <CategorySidebar />

            <main class="main-content">
                <SearchBar query=query set_query=set_query />
                <PlantGrid query=query set_details=set_details />
            </main>
        </div>

        <DetailsModal details=details set_details=set_details />
        <CartModal open=cart_open set_open=set_cart_open />
        <Spinner />

        <footer class="app-footer">
            <span>"© " {js_sys::Date::new_0().get_full_year()} " Green Earth"</span>
        </footer>
    }
}
