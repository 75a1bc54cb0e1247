pub use service_connect_core::catalog::JobStatus;
pub use service_connect_core::{Notice, NoticeLevel};
pub use wasm_bindgen::JsCast;
pub use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, MouseEvent};
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, classes, html};
pub use yew::function_component;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DaisyColor {
    Neutral,
    #[default]
    Primary,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }

    #[must_use]
    pub const fn for_status(status: JobStatus) -> Self {
        match status {
            JobStatus::Pending => Self::Warning,
            JobStatus::Active => Self::Error,
            JobStatus::InProgress => Self::Info,
            JobStatus::Completed => Self::Success,
        }
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

/// Read the value of the input/textarea/select behind an event.
#[must_use]
pub fn event_value(e: &web_sys::Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}
