#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod router;
pub mod theme;
pub mod timer;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Sets <html lang> from the saved locale.
    crate::i18n::set_lang(&crate::i18n::current_lang());
    crate::theme::apply_theme(crate::theme::saved_theme());
    yew::Renderer::<app::App>::new().render();
}
