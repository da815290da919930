//! # bloghive-ui
//!
//! Leptos + WASM front-end for the BlogHive blog platform: pages for the
//! landing screen, authentication, post listing/creation/editing, and
//! comments. All persistence lives in external REST services (auth, posts,
//! comments) reached over HTTP with JSON bodies and bearer-token headers.
//!
//! The core of the crate is client-side session handling: the persistent
//! token store ([`session::store`]), the claims decoder
//! ([`session::claims`]), and the reactive auth context ([`state::auth`])
//! that every page consumes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Client-side entry point: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
