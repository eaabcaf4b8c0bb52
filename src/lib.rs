// lib.rs - Root module for the gem_gallery library
//
// The library holds the whole Leptos application plus the sheet loader.
// The server binary links it natively; cargo-leptos compiles it to WASM
// with the `hydrate` feature for the browser.

/// The fixtures module contains reusable sample sheets and stub sources
pub mod fixtures;

/// The gallery web application (model, loader, components, pages)
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrates the server-rendered markup
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
