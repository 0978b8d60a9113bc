//! # study-desk
//!
//! Leptos + WASM frontend for a chat-driven study assistant.
//!
//! The page has three resizable panes: source material, the result pane
//! (placeholder, self-check test or rendered document) and the chat
//! transcript. All decisions live in `state` and are tested natively;
//! `components` and `pages` only bind them to the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("study-desk hydrating");
    leptos::mount::hydrate_body(app::App);
}
