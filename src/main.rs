#![allow(warnings)]
//! Green Earth Frontend Entry Point

mod models;
mod normalize;
mod api;
mod cart;
mod filter;
mod format;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
