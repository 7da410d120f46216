// lib.rs - Root module for the swiftcart library
//
// The listing/detail logic and the catalog client are plain Rust and build
// without any web feature. The Leptos UI sits behind `ssr` (server render)
// and `hydrate` (WASM client).

pub mod web_app;

/// Sample catalog records shared by unit and integration tests
pub mod fixtures;

/// WASM entry point: hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
