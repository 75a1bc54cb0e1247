// Light/dark theme persistence

use service_connect_core::Theme;

pub const THEME_KEY: &str = "serviceconnect.theme";
const DARK_CLASS: &str = "dark";

/// Read the saved theme, defaulting to light.
#[must_use]
pub fn saved_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::load_pref(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Theme::default()
    }
}

/// Toggle the `dark` class on `<html>` and persist the choice.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(html) = crate::dom::html_element() {
            let classes = html.class_list();
            let _ = if theme.is_dark() {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
        }
        crate::dom::save_pref(THEME_KEY, theme.as_str());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("theme {} ({DARK_CLASS} class: {})", theme.as_str(), theme.is_dark());
    }
}
