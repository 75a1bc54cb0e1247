use crate::i18n::locales::{is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

pub const LOCALE_KEY: &str = "serviceconnect.locale";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    let empty = Value::Object(serde_json::Map::new());
    I18nBundle {
        lang: "en".to_string(),
        translations: empty.clone(),
        fallback: empty,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::load_pref(LOCALE_KEY).unwrap_or_else(|| "en".to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        "en".to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(
        build_bundle(&saved_lang())
            .or_else(|| build_bundle("en"))
            .unwrap_or_else(empty_bundle)
    );
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language.
///
/// Unknown codes are ignored. In the browser the `<html lang>` attribute is
/// updated and the choice is persisted.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported locale {lang}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(html) = crate::dom::html_element() {
            let _ = html.set_attribute("lang", lang);
        }
        crate::dom::save_pref(LOCALE_KEY, lang);
    }
}

/// Two-letter code of the active locale.
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
