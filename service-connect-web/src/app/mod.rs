use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod effects;
pub mod routing;
pub mod state;
pub mod view;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    effects::use_notice_expiry(&app_state.notice, app_state.config.notice_ttl_ms);

    let navigator = use_navigator();
    let route = use_route::<Route>();

    view::render_app(&app_state, route.as_ref(), navigator)
}
