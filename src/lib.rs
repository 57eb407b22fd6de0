//! # classboard
//!
//! Leptos + WASM administration console for an education-center management
//! system: role-gated dashboards over CRUD screens for teachers, students,
//! classes, and rooms, with a token-based authentication session restored
//! across reloads.
//!
//! The session lifecycle is the heart of the crate: `state` owns the auth
//! state and its mutation operations, `util::token_store` the persisted
//! credential, `net` the classified REST boundary, and `components::guard`
//! the route gating derived from all of it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
