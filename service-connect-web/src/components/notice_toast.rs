use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct NoticeToastProps {
    pub notice: Option<f::Notice>,
    pub on_dismiss: f::Callback<()>,
}

/// Shows the latest notice; the app shell clears it after a delay.
#[f::function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> f::Html {
    let Some(notice) = &props.notice else {
        return f::Html::default();
    };
    let dismiss = {
        let cb = props.on_dismiss.clone();
        f::Callback::from(move |_| cb.emit(()))
    };
    f::html! {
        <div class="toast toast-top toast-center z-50" role="status" aria-live="polite">
            <div class={f::classes!("alert", notice.level.class(), "flex", "items-center", "gap-2")}>
                <span>{ notice.message.clone() }</span>
                <button
                    type="button"
                    class="btn btn-ghost btn-xs"
                    aria-label={crate::i18n::t("nav.dismiss")}
                    onclick={dismiss}
                >
                    { "✕" }
                </button>
            </div>
        </div>
    }
}
