use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct TabBarProps {
    pub labels: Vec<f::AttrValue>,
    pub active: usize,
    pub on_select: f::Callback<usize>,
    #[prop_or_default]
    pub class: f::Classes,
}

/// Controlled tab strip; the owner keeps the active index.
#[f::function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> f::Html {
    let class = f::class_list(&["tabs", "tabs-box", "w-full"], &props.class);
    f::html! {
        <div class={class} role="tablist">
            { for props.labels.iter().enumerate().map(|(idx, label)| {
                let selected = idx == props.active;
                let mut tab_class = f::classes!("tab", "flex-1");
                if selected {
                    tab_class.push("tab-active");
                }
                let onclick = {
                    let on_select = props.on_select.clone();
                    f::Callback::from(move |_| on_select.emit(idx))
                };
                f::html! {
                    <button
                        type="button"
                        class={tab_class}
                        role="tab"
                        aria-selected={selected.to_string()}
                        {onclick}
                    >
                        { label.clone() }
                    </button>
                }
            }) }
        </div>
    }
}
