//! # client
//!
//! Leptos + WASM frontend for the signup form.
//!
//! This crate contains the page, its components, the per-field form state,
//! and the validation rules. The `hydrate` feature builds the browser bundle;
//! the `ssr` feature lets the `server` crate render the same tree.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) reports an already-set logger; ignore it.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
