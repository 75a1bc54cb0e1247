use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct PageHeaderProps {
    pub title: f::AttrValue,
    #[prop_or_default]
    pub subtitle: Option<f::AttrValue>,
    #[prop_or_default]
    pub on_back: Option<f::Callback<()>>,
    #[prop_or_default]
    pub class: f::Classes,
    /// Trailing actions, right-aligned.
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> f::Html {
    let class = f::class_list(
        &["navbar", "bg-base-100", "shadow-sm", "sticky", "top-0", "z-10"],
        &props.class,
    );
    let back = props.on_back.clone().map(|cb| {
        let onclick = f::Callback::from(move |_| cb.emit(()));
        f::html! {
            <button type="button" class="btn btn-ghost btn-circle" aria-label={crate::i18n::t("nav.back")} {onclick}>
                { "←" }
            </button>
        }
    });
    f::html! {
        <header {class}>
            <div class="flex-none">{ back.unwrap_or_default() }</div>
            <div class="flex-1 px-2">
                <h1 class="text-lg font-semibold">{ props.title.clone() }</h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-xs opacity-70">{ subtitle.clone() }</p>
                }
            </div>
            <div class="flex-none flex gap-1">{ for props.children.iter() }</div>
        </header>
    }
}
