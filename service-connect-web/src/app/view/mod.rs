mod handlers;

pub use handlers::AppHandlers;

use crate::app::routing::resolve_route;
use crate::app::state::AppState;
use crate::components::{LanguageSelect, NoticeToast};
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::customer_home::CustomerHomePage;
use crate::pages::emergency_request::EmergencyRequestPage;
use crate::pages::live_tracking::LiveTrackingPage;
use crate::pages::onboarding::OnboardingPage;
use crate::pages::pump_dashboard::PumpDashboardPage;
use crate::pages::service_booking::ServiceBookingPage;
use crate::pages::worker_dashboard::WorkerDashboardPage;
use crate::pages::worker_onboarding::WorkerOnboardingPage;
use crate::router::Route;
use service_connect_core::Resolution;
use service_connect_core::routing::{AdminView, CustomerView, PumpView, View, WorkerView};
use yew::prelude::*;
use yew_router::prelude::{Navigator, Redirect};

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = match resolve_route(&state.session, route) {
        Resolution::Render(view) => render_view(state, &handlers, view),
        Resolution::Redirect(target) => html! { <Redirect<Route> to={Route::from(&target)} /> },
    };

    html! {
        <>
            <NoticeToast notice={(*state.notice).clone()} on_dismiss={handlers.dismiss_notice.clone()} />
            <nav class="flex justify-end px-2 py-1 bg-base-300" aria-label={crate::i18n::t("nav.language")}>
                <LanguageSelect
                    current_lang={(*state.current_language).clone()}
                    on_lang_change={handlers.lang_change.clone()}
                />
            </nav>
            <div id="main" role="main">{ main_view }</div>
        </>
    }
}

fn render_view(state: &AppState, handlers: &AppHandlers, view: View) -> Html {
    let catalog = (*state.catalog).clone();
    let config = *state.config;
    match view {
        View::Onboarding => html! {
            <OnboardingPage
                on_role_select={handlers.role_select.clone()}
                on_notice={handlers.notify.clone()}
            />
        },
        View::Customer(CustomerView::Home) => html! {
            <CustomerHomePage
                {catalog}
                theme={*state.theme}
                on_toggle_theme={handlers.toggle_theme.clone()}
                on_navigate={handlers.navigate.clone()}
            />
        },
        View::Customer(CustomerView::ServiceBooking { category }) => html! {
            <ServiceBookingPage
                key={category.clone()}
                {category}
                {catalog}
                on_navigate={handlers.navigate.clone()}
                on_notice={handlers.notify.clone()}
            />
        },
        View::Customer(CustomerView::EmergencyRequest) => html! {
            <EmergencyRequestPage
                {catalog}
                {config}
                on_navigate={handlers.navigate.clone()}
                on_notice={handlers.notify.clone()}
            />
        },
        View::Customer(CustomerView::LiveTracking { booking_id }) => html! {
            <LiveTrackingPage
                key={booking_id.clone()}
                {booking_id}
                {catalog}
                {config}
                on_navigate={handlers.navigate.clone()}
            />
        },
        View::Worker(WorkerView::Dashboard) => html! {
            <WorkerDashboardPage
                {catalog}
                on_navigate={handlers.navigate.clone()}
                on_notice={handlers.notify.clone()}
            />
        },
        View::Worker(WorkerView::Onboarding) => html! {
            <WorkerOnboardingPage {catalog} on_navigate={handlers.navigate.clone()} />
        },
        View::Pump(PumpView::Dashboard) => html! {
            <PumpDashboardPage {catalog} on_notice={handlers.notify.clone()} />
        },
        View::Admin(AdminView::Dashboard) => html! {
            <AdminDashboardPage {catalog} />
        },
    }
}
