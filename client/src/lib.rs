//! # client
//!
//! Leptos + WASM frontend for the Springfield Public School site.
//!
//! This crate contains the page, its components, page state, the backend
//! wire types, and the page controller that loads collections and submits
//! the contact form.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
