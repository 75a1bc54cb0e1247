use crate::app::state::AppState;
use crate::router::Route;
use service_connect_core::{AppPath, Notice, Role};
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub role_select: Callback<Role>,
    pub navigate: Callback<AppPath>,
    pub notify: Callback<Notice>,
    pub dismiss_notice: Callback<()>,
    pub toggle_theme: Callback<()>,
    pub lang_change: Callback<String>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            role_select: build_role_select(state, navigator.clone()),
            navigate: build_navigate(navigator),
            notify: build_notify(state),
            dismiss_notice: build_dismiss_notice(state),
            toggle_theme: build_toggle_theme(state),
            lang_change: build_lang_change(state),
        }
    }
}

fn build_role_select(state: &AppState, navigator: Option<Navigator>) -> Callback<Role> {
    let session = state.session.clone();
    Callback::from(move |role: Role| {
        let mut next = *session;
        if let Err(err) = next.select_role(role) {
            log::warn!("role selection ignored: {err}");
            return;
        }
        session.set(next);
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    })
}

fn build_navigate(navigator: Option<Navigator>) -> Callback<AppPath> {
    Callback::from(move |path: AppPath| {
        log::debug!("navigate to {path}");
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::from(&path));
        }
    })
}

fn build_notify(state: &AppState) -> Callback<Notice> {
    let notice = state.notice.clone();
    Callback::from(move |next: Notice| notice.set(Some(next)))
}

fn build_dismiss_notice(state: &AppState) -> Callback<()> {
    let notice = state.notice.clone();
    Callback::from(move |()| notice.set(None))
}

fn build_toggle_theme(state: &AppState) -> Callback<()> {
    let theme = state.theme.clone();
    Callback::from(move |()| {
        let next = theme.toggled();
        crate::theme::apply_theme(next);
        theme.set(next);
    })
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}
