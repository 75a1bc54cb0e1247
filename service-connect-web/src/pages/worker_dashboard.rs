use crate::components::{PageHeader, StatTiles, TabBar};
use crate::i18n::t;
use service_connect_core::catalog::{ActiveJob, CompletedJob, JobRequest};
use service_connect_core::dashboard::{accept_job, decline_job};
use service_connect_core::{AppPath, Catalog, Notice, WorkerDashboard, WorkerTab};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct WorkerDashboardPageProps {
    pub catalog: Rc<Catalog>,
    pub on_navigate: Callback<AppPath>,
    pub on_notice: Callback<Notice>,
    #[prop_or_default]
    pub dashboard: Option<WorkerDashboard>,
}

#[function_component(WorkerDashboardPage)]
pub fn worker_dashboard_page(props: &WorkerDashboardPageProps) -> Html {
    let dashboard = {
        let initial = props.dashboard.unwrap_or_default();
        use_state(move || initial)
    };

    let on_toggle = {
        let dashboard = dashboard.clone();
        Callback::from(move |_| {
            let mut next = *dashboard;
            next.toggle_availability();
            dashboard.set(next);
        })
    };
    let on_tab = {
        let dashboard = dashboard.clone();
        Callback::from(move |idx: usize| {
            if let Some(tab) = WorkerTab::ALL.get(idx).copied() {
                dashboard.set(WorkerDashboard { tab, ..*dashboard });
            }
        })
    };
    let on_profile = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(AppPath::WorkerOnboard))
    };
    let active = WorkerTab::ALL
        .iter()
        .position(|tab| *tab == dashboard.tab)
        .unwrap_or_default();
    let catalog = &props.catalog;

    let content = match dashboard.tab {
        WorkerTab::Requests => html! {
            <>
                if dashboard.shows_offline_banner() {
                    <div class="alert alert-warning" data-testid="offline-banner">{ t("worker.offline_banner") }</div>
                }
                { for catalog.worker_requests.iter().map(|request| request_card(request, &props.on_notice)) }
            </>
        },
        WorkerTab::Active => html! {
            <>{ for catalog.worker_active.iter().map(active_card) }</>
        },
        WorkerTab::Completed => html! {
            <>{ for catalog.worker_completed.iter().map(completed_row) }</>
        },
    };

    html! {
        <main class="min-h-screen bg-base-200" data-testid="worker-dashboard">
            <PageHeader title={t("worker.title")}>
                <label class="label cursor-pointer gap-2">
                    <span class="label-text text-sm">{ dashboard.availability_label() }</span>
                    <input
                        type="checkbox"
                        class="toggle toggle-success"
                        checked={dashboard.available}
                        onchange={on_toggle}
                    />
                </label>
            </PageHeader>
            <section class="p-4 space-y-4">
                <StatTiles tiles={catalog.worker_stats.clone()} />
                <button type="button" class="btn btn-outline btn-block" onclick={on_profile}>
                    { t("worker.complete_profile") }
                </button>
                <TabBar
                    labels={WorkerTab::ALL.iter().map(|tab| AttrValue::from(tab.label())).collect::<Vec<_>>()}
                    {active}
                    on_select={on_tab}
                />
                <div class="space-y-2">{ content }</div>
            </section>
        </main>
    }
}

fn request_card(request: &JobRequest, on_notice: &Callback<Notice>) -> Html {
    let id = request.id;
    let on_accept = {
        let on_notice = on_notice.clone();
        Callback::from(move |_| on_notice.emit(accept_job(id)))
    };
    let on_decline = {
        let on_notice = on_notice.clone();
        Callback::from(move |_| on_notice.emit(decline_job(id)))
    };
    html! {
        <div class="card bg-base-100 shadow-sm" data-request={id.to_string()}>
            <div class="card-body p-4 gap-2">
                <div class="flex justify-between items-start">
                    <div>
                        <p class="font-semibold">{ request.service.clone() }</p>
                        <p class="text-xs opacity-70">{ format!("{} · {}", request.customer, request.distance) }</p>
                    </div>
                    <div class="text-right">
                        <p class="font-bold">{ request.price.clone() }</p>
                        if request.urgent {
                            <span class="badge badge-error badge-sm">{ t("worker.urgent") }</span>
                        }
                    </div>
                </div>
                <p class="text-sm">{ request.description.clone() }</p>
                <div class="card-actions justify-end">
                    <button type="button" class="btn btn-sm btn-ghost" onclick={on_decline}>{ t("worker.decline") }</button>
                    <button type="button" class="btn btn-sm btn-primary" onclick={on_accept}>{ t("worker.accept") }</button>
                </div>
            </div>
        </div>
    }
}

fn active_card(job: &ActiveJob) -> Html {
    html! {
        <div class="card bg-base-100 shadow-sm p-4 flex flex-row items-center justify-between">
            <div>
                <p class="font-semibold">{ job.service.clone() }</p>
                <p class="text-xs opacity-70">{ format!("{} · {}", job.customer, job.location) }</p>
            </div>
            <button type="button" class="btn btn-sm btn-primary">{ t("worker.navigate") }</button>
        </div>
    }
}

fn completed_row(job: &CompletedJob) -> Html {
    html! {
        <div class="card bg-base-100 shadow-sm p-4 flex flex-row items-center justify-between">
            <div>
                <p class="font-semibold">{ job.service.clone() }</p>
                <p class="text-xs opacity-70">{ format!("{} · {}", job.customer, job.time) }</p>
            </div>
            <div class="text-right">
                <p class="font-bold">{ job.amount.clone() }</p>
                <p class="text-xs text-warning">{ "★".repeat(usize::from(job.rating)) }</p>
            </div>
        </div>
    }
}
