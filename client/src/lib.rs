//! # client
//!
//! Leptos + WASM frontend for ComuniTarr.
//!
//! This crate contains the page shells, the session-gated route wrapper,
//! application state, and the browser implementation of the auth provider.
//! Gating rules themselves live in the `gate` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
