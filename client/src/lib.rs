//! # client
//!
//! Leptos + WASM frontend for the RegIQ marketing site and dashboard shell.
//!
//! This crate contains pages (home, login, dashboard), the three-panel
//! dashboard components, shared UI state, and the REST helpers that talk to
//! the server's proxy routes. It integrates with the `canvas` crate for the
//! decorative particle-graph hero background.
//!
//! Browser-only behavior is gated behind the `hydrate` feature; with no
//! features enabled the crate is plain Rust and hosts the unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
