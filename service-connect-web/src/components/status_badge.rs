use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct StatusBadgeProps {
    pub status: f::JobStatus,
}

#[f::function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> f::Html {
    let color = f::DaisyColor::for_status(props.status).class("badge");
    f::html! {
        <span class={f::classes!("badge", "badge-sm", color)}>{ props.status.label() }</span>
    }
}
