use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn plural_category(count: f64) -> &'static str {
    if count.abs() < f64::EPSILON {
        "zero"
    } else if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else {
        "other"
    }
}

// Plural objects pick `zero`/`one`/`other` by the `count` arg, then `_`.
fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(forms) => {
            let category = args
                .and_then(|m| m.get("count"))
                .and_then(|raw| raw.parse::<f64>().ok())
                .map(plural_category);
            category
                .and_then(|c| forms.get(c))
                .or_else(|| forms.get("other").filter(|_| category.is_some()))
                .or_else(|| forms.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    for (name, replacement) in args.into_iter().flatten() {
        text = text.replace(&format!("{{{name}}}"), replacement);
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        lookup(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| lookup(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key in the active language, falling back to English and
/// finally to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate with `{name}` placeholders filled from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
