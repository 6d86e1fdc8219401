//! Details Modal Component
//!
//! Overlay dialog with the full record for one plant, shown while a
//! details fetch result is present. Clicking the backdrop or the close
//! button dismisses it.

use leptos::prelude::*;

use crate::format;
use crate::models::{CartItem, PlantDetails};
use crate::store::{store_add_cart_item, use_app_store};

#[component]
pub fn DetailsModal(
    details: ReadSignal<Option<PlantDetails>>,
    set_details: WriteSignal<Option<PlantDetails>>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || {
            details
                .get()
                .map(|d| {
                    let item = CartItem::from_plant(&d.plant);
                    let stock = d.stock.clone().unwrap_or_else(|| "—".to_string());
                    let rating = d.rating.clone().unwrap_or_else(|| "—".to_string());
                    view! {
                        <div class="modal-backdrop" on:click=move |_| set_details.set(None)>
                            <div class="modal details-modal" on:click=|ev| ev.stop_propagation()>
                                <button
                                    class="modal-close-btn"
                                    on:click=move |_| set_details.set(None)
                                >
                                    "✕"
                                </button>
                                <div class="details-layout">
                                    <img
                                        class="details-image"
                                        src=d.plant.image.clone()
                                        alt=d.plant.name.clone()
                                    />
                                    <div class="details-info">
                                        <h3>{d.plant.name.clone()}</h3>
                                        <div class="details-badges">
                                            <span class="badge">{d.plant.category.clone()}</span>
                                            <span class="badge">"⭐ " {rating}</span>
                                            <span class="badge">"Stock: " {stock}</span>
                                        </div>
                                        <p class="details-description">
                                            {d.plant.description.clone()}
                                        </p>
                                        <div class="details-price">
                                            "$ " {format::currency(d.plant.price)}
                                        </div>
                                        <button
                                            class="add-to-cart-btn"
                                            on:click=move |_| {
                                                store_add_cart_item(&store, item.clone())
                                            }
                                        >
                                            "Add to Cart"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
