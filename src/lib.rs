//! Trustify login theme
//!
//! Keycloak login pages for Trustify, built with Leptos and WebAssembly.
//! The identity provider supplies the page context; this crate renders the
//! branded template around it.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let bootstrap = PageBootstrap::from_window();
    leptos::mount::hydrate_body(move || {
        provide_context(bootstrap);
        view! { <App/> }
    });
}
