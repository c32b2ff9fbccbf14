//! # crewdeck-client
//!
//! Leptos + WASM frontend for the Crewdeck workspace-management application.
//!
//! This crate contains pages, components, application state, wire types,
//! and the REST helpers for talking to the Crewdeck API. Rendering state is
//! split into small per-domain models (`session`, `workspace`, `theme`)
//! provided via context from the root [`app::App`] component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
