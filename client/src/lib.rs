//! Leptos client for the interactive drawing surface.
//!
//! The heavy lifting (gesture handling, scene state, rendering) lives in the
//! `canvas` crate; this crate provides the control surface around it and the
//! server/hydration plumbing.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
