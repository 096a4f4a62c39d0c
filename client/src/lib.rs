//! # client
//!
//! Leptos + WASM frontend for HCL Chat: a landing page and two chat views
//! that send a prompt to the HCL extraction API and show the answer.
//!
//! This crate contains pages, components, per-view chat state, the HTTP
//! client for the extraction endpoints, and browser helpers. The root
//! `hcl-chat` binary renders it on the server and the `hydrate` build takes
//! over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
