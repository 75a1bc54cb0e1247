use crate::components::{PageHeader, StatTiles, TabBar};
use crate::i18n::t;
use service_connect_core::catalog::PumpRequest;
use service_connect_core::dashboard::{accept_pump_request, decline_pump_request};
use service_connect_core::{Catalog, Notice, PumpTab};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PumpDashboardPageProps {
    pub catalog: Rc<Catalog>,
    pub on_notice: Callback<Notice>,
}

#[function_component(PumpDashboardPage)]
pub fn pump_dashboard_page(props: &PumpDashboardPageProps) -> Html {
    let tab = use_state(PumpTab::default);
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |idx: usize| {
            if let Some(next) = PumpTab::ALL.get(idx) {
                tab.set(*next);
            }
        })
    };
    let active = PumpTab::ALL
        .iter()
        .position(|t| *t == *tab)
        .unwrap_or_default();
    let catalog = &props.catalog;

    let content = match *tab {
        PumpTab::Incoming => html! {
            <>{ for catalog.pump_incoming.iter().map(|request| incoming_card(request, &props.on_notice)) }</>
        },
        PumpTab::Active => html! {
            <>
                { for catalog.pump_active.iter().map(|service| html! {
                    <div class="card bg-base-100 shadow-sm p-4 space-y-1">
                        <div class="flex justify-between">
                            <p class="font-semibold">{ service.customer.clone() }</p>
                            <span class="badge badge-info badge-sm">{ service.status.clone() }</span>
                        </div>
                        <p class="text-sm">{ service.issue.clone() }</p>
                        <p class="text-xs opacity-70">{ format!("{} · ETA {}", service.vehicle, service.eta) }</p>
                    </div>
                }) }
            </>
        },
        PumpTab::Completed => html! {
            <>
                { for catalog.pump_completed.iter().map(|job| html! {
                    <div class="card bg-base-100 shadow-sm p-4 flex flex-row justify-between">
                        <div>
                            <p class="font-semibold">{ job.service.clone() }</p>
                            <p class="text-xs opacity-70">{ format!("{} · {}", job.customer, job.time) }</p>
                        </div>
                        <p class="font-bold">{ job.amount.clone() }</p>
                    </div>
                }) }
            </>
        },
    };

    html! {
        <main class="min-h-screen bg-base-200" data-testid="pump-dashboard">
            <PageHeader title={t("pump.title")} subtitle={Some(AttrValue::from(catalog.location.clone()))} />
            <section class="p-4 space-y-4">
                <StatTiles tiles={catalog.pump_stats.clone()} />
                <TabBar
                    labels={PumpTab::ALL.iter().map(|t| AttrValue::from(t.label())).collect::<Vec<_>>()}
                    {active}
                    on_select={on_tab}
                />
                <div class="space-y-2">{ content }</div>
            </section>
        </main>
    }
}

fn incoming_card(request: &PumpRequest, on_notice: &Callback<Notice>) -> Html {
    let id = request.id;
    let on_accept = {
        let on_notice = on_notice.clone();
        Callback::from(move |_| on_notice.emit(accept_pump_request(id)))
    };
    let on_decline = {
        let on_notice = on_notice.clone();
        Callback::from(move |_| on_notice.emit(decline_pump_request(id)))
    };
    html! {
        <div class={classes!("card", "bg-base-100", "shadow-sm", request.urgent.then_some("border-l-4 border-error"))} data-request={id.to_string()}>
            <div class="card-body p-4 gap-2">
                <div class="flex justify-between items-start">
                    <div>
                        <p class="font-semibold">{ request.issue.clone() }</p>
                        <p class="text-xs opacity-70">{ format!("{} · {}", request.customer, request.phone) }</p>
                    </div>
                    <div class="text-right text-xs">
                        <p>{ request.time.clone() }</p>
                        if request.urgent {
                            <span class="badge badge-error badge-sm">{ t("pump.urgent") }</span>
                        }
                    </div>
                </div>
                <p class="text-sm">{ request.description.clone() }</p>
                <p class="text-xs opacity-70">{ format!("📍 {} · ETA {}", request.location, request.eta) }</p>
                <div class="card-actions justify-end">
                    <a class="btn btn-sm btn-ghost" href={format!("tel:{}", request.phone)}>{ t("pump.call") }</a>
                    <button type="button" class="btn btn-sm btn-ghost" onclick={on_decline}>{ t("pump.decline") }</button>
                    <button type="button" class="btn btn-sm btn-primary" onclick={on_accept}>{ t("pump.accept") }</button>
                </div>
            </div>
        </div>
    }
}
