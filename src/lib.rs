//! # metodoteca
//!
//! Leptos + WASM single-page gallery of UX-methodology reference cards.
//! Client-side search, flip-to-reveal cards, light/dark theming, and an
//! add/edit dialog over a purely in-memory method list.
//!
//! This crate contains the page, components, application state, and the
//! browser-environment glue. State models under `state/` are plain structs
//! so the filtering and submission logic stays natively testable.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Mount the application into `<body>`. Called from the wasm entry point.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting metodoteca");
    leptos::mount::mount_to_body(app::App);
}
