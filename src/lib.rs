//! # pictora
//!
//! Leptos + WASM frontend for the Pictora AI image-generation chat product.
//!
//! This crate contains pages, components, application state, and the thin
//! network layer that proxies prompts to the image-generation backend. The
//! `state` modules hold plain data and pure transition logic so they can be
//! tested natively; browser-only side effects (timers, focus, downloads)
//! live behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
