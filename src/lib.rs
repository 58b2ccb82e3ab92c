//! # storefront-client
//!
//! Leptos + WASM frontend for the SynFood restaurant storefront and its
//! administrative back office. Renders the public menu/ordering pages and the
//! admin area over the `/api/v1` REST API.
//!
//! This crate contains pages, components, application state (session, cart,
//! notifications), the REST auth client, and the route-guard layer that
//! separates public, customer-only, checkout-eligible, and admin-only routes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then mounts
/// the application into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
