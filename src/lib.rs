//! # musicology-client
//!
//! Leptos + WASM front-end for the musicology research assistant. Three
//! screens — document ingestion, keyword search, and multi-decade concept
//! synthesis — render local state and talk to the research backend over REST.
//!
//! This crate contains the shell, pages, reusable components, screen state,
//! and the typed network boundary. All heavy lifting (indexing, embedding
//! search, report generation) happens in the backend service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks, injects the API base, and
/// hydrates the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    if let Some(base) = option_env!("MUSICOLOGY_API_BASE") {
        net::api::set_api_base(base);
    }
    leptos::mount::hydrate_body(app::App);
}
