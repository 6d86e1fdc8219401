//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! goes through the helpers below; dependent views re-render reactively, so
//! a mutation is never visible without its redraw.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart;
use crate::models::{CartItem, Category, Plant};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Plants currently shown in the grid
    pub plants: Vec<Plant>,
    /// All categories
    pub categories: Vec<Category>,
    /// Currently selected category (None = all plants)
    pub active_category: Option<String>,
    /// Cart entries in insertion order; duplicates allowed
    pub cart: Vec<CartItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the plant list
pub fn store_set_plants(store: &AppStore, plants: Vec<Plant>) {
    *store.plants().write() = plants;
}

/// Replace the category list
pub fn store_set_categories(store: &AppStore, categories: Vec<Category>) {
    *store.categories().write() = categories;
}

/// Select a category (None clears the selection)
pub fn store_set_active_category(store: &AppStore, id: Option<String>) {
    *store.active_category().write() = id;
}

/// Append an item to the cart; same plant may appear more than once
pub fn store_add_cart_item(store: &AppStore, item: CartItem) {
    store.cart().write().push(item);
}

/// Remove the cart entry at `index`; later entries shift down
pub fn store_remove_cart_item(store: &AppStore, index: usize) {
    cart::remove_item(&mut store.cart().write(), index);
}

/// Empty the cart
pub fn store_clear_cart(store: &AppStore) {
    store.cart().write().clear();
}
