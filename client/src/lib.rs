//! # portal-client
//!
//! Leptos + WASM frontend for the church website and its admin area.
//!
//! This crate contains the auth session (token storage, auth REST client,
//! session state machine), the route guard that protects account and admin
//! routes, and the pages and components that sit on top of them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
