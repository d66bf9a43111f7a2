//! Recipe Book Web App (Leptos + WASM)

mod api;
mod app;
mod auth;
mod components;
mod pages;
pub mod config;
pub mod logging;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(app::App);
}
