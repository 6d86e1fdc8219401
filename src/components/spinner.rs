//! Spinner Component
//!
//! Full-screen busy overlay, visible while any guarded network operation
//! is in flight.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Spinner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Show when=move || ctx.loading.get() > 0>
            <div class="spinner-overlay">
                <div class="spinner">"Loading..."</div>
            </div>
        </Show>
    }
}
