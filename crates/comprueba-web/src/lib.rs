pub mod app;
pub mod config;
pub mod handler;
pub mod pages;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
