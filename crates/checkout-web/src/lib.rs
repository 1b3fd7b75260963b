//! Payment screen web frontend
//!
//! Leptos-based WASM frontend for plan selection and hosted checkout.

mod app;
mod pages;
mod components;
mod api;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
