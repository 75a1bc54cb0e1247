#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Format a whole percentage, e.g. search progress.
#[must_use]
pub fn fmt_pct(pct: u8) -> String {
    format!("{}%", fmt_number(f64::from(pct)))
}

/// Format a number using the current locale via Intl
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = Array::new();
            locales.push(&JsValue::from_str(&bundle.lang));
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| num.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        num.to_string()
    }
}
