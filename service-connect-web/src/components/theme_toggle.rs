use crate::components::foundation as f;
use service_connect_core::Theme;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: f::Callback<()>,
}

#[f::function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> f::Html {
    let onclick = {
        let cb = props.on_toggle.clone();
        f::Callback::from(move |_| cb.emit(()))
    };
    let (icon, label) = if props.theme.is_dark() {
        ("☀", crate::i18n::t("nav.theme_light"))
    } else {
        ("☾", crate::i18n::t("nav.theme_dark"))
    };
    f::html! {
        <button
            type="button"
            class="btn btn-ghost btn-circle"
            aria-label={label}
            data-theme-toggle={props.theme.as_str()}
            {onclick}
        >
            { icon }
        </button>
    }
}
