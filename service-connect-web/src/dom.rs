use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The `<html>` element, used for document-wide classes and attributes.
#[must_use]
pub fn html_element() -> Option<Element> {
    window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
}

/// Access the browser `localStorage` handle.
///
/// Returns `None` when storage is disabled or the window is unavailable.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Read a stored preference.
#[must_use]
pub fn load_pref(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Persist a preference, reporting failures to the console.
pub fn save_pref(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(err) = storage.set_item(key, value) {
        console_error(&format!(
            "failed to persist {key}: {}",
            js_error_message(&err)
        ));
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}
