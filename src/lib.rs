pub mod app;
pub mod board;
pub mod classifier;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod submit;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
