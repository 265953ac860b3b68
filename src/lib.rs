//! # parking-client
//!
//! Leptos + WASM browser client for the parking-lot reservation service.
//!
//! This crate contains the session store, the route table and navigation
//! guard, the REST API client, and the pages for every route. The session
//! store and guard are plain Rust and run natively in tests; everything that
//! touches the browser sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
