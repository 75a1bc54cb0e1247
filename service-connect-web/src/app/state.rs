use service_connect_core::{Catalog, Notice, Session, SimulationConfig, Theme};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<Session>,
    pub theme: UseStateHandle<Theme>,
    pub notice: UseStateHandle<Option<Notice>>,
    pub current_language: UseStateHandle<String>,
    pub config: UseStateHandle<SimulationConfig>,
    pub catalog: UseStateHandle<Rc<Catalog>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_state(Session::new),
        theme: use_state(crate::theme::saved_theme),
        notice: use_state(|| None::<Notice>),
        current_language: use_state(crate::i18n::current_lang),
        config: use_state(SimulationConfig::load_from_static),
        catalog: use_state(|| Rc::new(Catalog::load_from_static())),
    }
}
