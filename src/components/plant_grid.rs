//! Plant Grid Component
//!
//! Card grid over the (possibly search-filtered) plant list, the grid
//! header with the refresh control, and the card itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::filter;
use crate::format;
use crate::models::{CartItem, Plant, PlantDetails};
use crate::store::{store_add_cart_item, use_app_store, AppStateStoreFields};

/// A single catalog card
#[component]
fn PlantCard(plant: Plant, set_details: WriteSignal<Option<PlantDetails>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let item = CartItem::from_plant(&plant);
    let detail_id = plant.id.clone();

    // Clicking the name fetches full details and opens the dialog. The
    // ticket drops responses that lost the race to a later click.
    let open_details = move |_| {
        let id = detail_id.clone();
        let ticket = ctx.detail_requests.next();
        spawn_local(async move {
            let _guard = ctx.begin_loading();
            match api::fetch_plant_details(&id).await {
                Ok(details) => {
                    if ctx.detail_requests.is_current(ticket) {
                        set_details.set(Some(details));
                    }
                }
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("[PlantCard] Failed to load details for {}: {}", id, error)
                            .into(),
                    );
                }
            }
        });
    };

    let add_to_cart = move |_| store_add_cart_item(&store, item.clone());

    view! {
        <div class="card">
            <figure class="card-figure">
                <img src=plant.image.clone() alt=plant.name.clone() />
            </figure>
            <div class="card-body">
                <h3 class="card-title">
                    <button class="plant-name" on:click=open_details>{plant.name.clone()}</button>
                </h3>
                <p class="card-description">
                    {format::truncate(&plant.description, format::DESCRIPTION_LIMIT)}
                </p>
                <div class="card-meta">
                    <span class="badge">{plant.category.clone()}</span>
                    <span class="card-price">"$" {format::currency(plant.price)}</span>
                </div>
                <div class="card-actions">
                    <button class="add-to-cart-btn" on:click=add_to_cart>"Add to Cart"</button>
                </div>
            </div>
        </div>
    }
}

/// Card grid with header, refresh control, and empty-state placeholder
#[component]
pub fn PlantGrid(
    query: ReadSignal<String>,
    set_details: WriteSignal<Option<PlantDetails>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Display-only view of the stored list
    let visible_plants = move || filter::by_name(&store.plants().read(), &query.get());

    let heading = move || match store.active_category().get() {
        Some(id) => store
            .categories()
            .read()
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.clone())
            .unwrap_or_else(|| "Plants".to_string()),
        None => "All Plants".to_string(),
    };

    view! {
        <section class="plant-grid-section">
            <div class="grid-header">
                <h2>{heading}</h2>
                <button class="refresh-btn" on:click=move |_| ctx.reload()>"Refresh"</button>
            </div>

            {move || {
                let plants = visible_plants();
                if plants.is_empty() {
                    view! { <div class="no-plants-message">"No plants found."</div> }.into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {plants
                                .into_iter()
                                .map(|plant| {
                                    view! { <PlantCard plant=plant set_details=set_details /> }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
