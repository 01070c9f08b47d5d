//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! The server renders every page through `app::shell`; the browser build
//! (`hydrate` feature) attaches listeners, scroll observers, and theme
//! handling to that markup. Interactive behavior lives in plain state types
//! under `state` so it can be unit-tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
