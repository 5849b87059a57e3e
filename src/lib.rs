//! # clientele
//!
//! Leptos + WASM front end for the customer-relationship backend.
//! Replaces the React + MUI SPA with a Rust-native UI layer.
//!
//! This crate contains pages, components, the authentication session
//! manager, schema validation for the login/register/customer forms,
//! and the REST helpers for the external `/api` collaborator. Browser
//! integration (localStorage, HTTP, file reads) is gated behind the
//! `hydrate` feature so the core logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod validate;

/// WASM entry point — mounts the application onto `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
