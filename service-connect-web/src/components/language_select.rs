use crate::components::foundation as f;
use crate::i18n::{locales, t};

#[derive(f::Properties, PartialEq, Clone)]
pub struct LanguageSelectProps {
    pub current_lang: String,
    pub on_lang_change: f::Callback<String>,
}

#[f::function_component(LanguageSelect)]
pub fn language_select(props: &LanguageSelectProps) -> f::Html {
    let onchange = {
        let cb = props.on_lang_change.clone();
        f::Callback::from(move |e: web_sys::Event| {
            if let Some(lang) = f::event_value(&e) {
                cb.emit(lang);
            }
        })
    };
    f::html! {
        <select
            id="lang-select"
            class="select select-ghost select-sm w-auto"
            aria-label={t("nav.language")}
            {onchange}
        >
            { for locales().iter().map(|meta| f::html! {
                <option value={meta.code} selected={meta.code == props.current_lang}>{ meta.name }</option>
            }) }
        </select>
    }
}
