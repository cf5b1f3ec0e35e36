//! # client
//!
//! Leptos + WASM front end for the payroll portal.
//!
//! This crate contains the pages, components, session store, route guard,
//! and the HTTP client for the payroll backend. It is compiled to WASM for
//! the browser (`hydrate`) and linked into the host binary for server
//! rendering (`ssr`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
