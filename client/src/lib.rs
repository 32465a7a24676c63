//! # client
//!
//! Leptos + WASM frontend shell for Mindmarks.
//!
//! This crate contains the root layout, the shared presentational components
//! (loading state, delete button, dot pattern, content editor), the home page,
//! the site metadata configuration, and the small state models the components
//! pass around. The `mindmarks` server renders it with the `ssr` feature and
//! the browser bundle hydrates it with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod pages;
pub mod site;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating mindmarks shell");
    leptos::mount::hydrate_body(app::App);
}
