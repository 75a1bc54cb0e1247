use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "hi",
        name: "हिन्दी",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("hi", include_str!("../../i18n/hi.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|meta| meta.code == lang)
}

/// Parse the bundle for `lang`, or `None` for an unknown code or bad JSON.
pub fn load_translations(lang: &str) -> Option<Value> {
    let (_, raw) = LOCALE_TABLE.iter().find(|(code, _)| *code == lang)?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("locale {lang} failed to parse: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_locale_has_a_parsable_bundle() {
        for meta in locales() {
            let bundle = load_translations(meta.code);
            assert!(bundle.is_some_and(|v| v.is_object()), "{}", meta.code);
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(!is_supported("xx"));
        assert!(load_translations("xx").is_none());
    }
}
