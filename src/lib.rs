// lib.rs - Root module for the pixabay_gallery library
//
// The library hosts the Leptos web application and the canned Pixabay
// responses used by the tests. The WASM build enters through `hydrate`.

/// Canned Pixabay responses shared by unit and integration tests
pub mod fixtures;

pub mod web_app;

/// WASM entry point: attaches the client-side app to the server-rendered body
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
