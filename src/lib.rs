#[cfg(any(feature = "ssr", feature = "csr"))]
pub mod app;
pub mod content;
pub mod icons;
#[cfg(feature = "ssr")]
pub mod server;
pub mod viewport;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(err) = content::validate() {
        log::warn!("page content is inconsistent: {err}");
    }
    leptos::mount::mount_to_body(App);
}
