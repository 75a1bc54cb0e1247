use crate::components::{PageHeader, StatTiles, StatusBadge, TabBar};
use crate::i18n::{t, tr};
use service_connect_core::{AdminTab, Catalog};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AdminDashboardPageProps {
    pub catalog: Rc<Catalog>,
    #[prop_or_default]
    pub tab: AdminTab,
}

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page(props: &AdminDashboardPageProps) -> Html {
    let tab = {
        let initial = props.tab;
        use_state(move || initial)
    };
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |idx: usize| {
            if let Some(next) = AdminTab::ALL.get(idx) {
                tab.set(*next);
            }
        })
    };
    let active = AdminTab::ALL
        .iter()
        .position(|t| *t == *tab)
        .unwrap_or_default();

    let content = match *tab {
        AdminTab::Overview => overview(&props.catalog),
        other => {
            let mut args = BTreeMap::new();
            args.insert("section", other.label());
            html! {
                <div class="card bg-base-100 p-6 text-center opacity-70" data-testid="admin-placeholder">
                    { tr("admin.coming_soon", Some(&args)) }
                </div>
            }
        }
    };

    html! {
        <main class="min-h-screen bg-base-200" data-testid="admin-dashboard">
            <PageHeader title={t("admin.title")} />
            <section class="p-4 space-y-4">
                <StatTiles tiles={props.catalog.admin_stats.clone()} />
                <TabBar
                    labels={AdminTab::ALL.iter().map(|t| AttrValue::from(t.label())).collect::<Vec<_>>()}
                    {active}
                    on_select={on_tab}
                    class={classes!("overflow-x-auto")}
                />
                { content }
            </section>
        </main>
    }
}

fn overview(catalog: &Catalog) -> Html {
    html! {
        <div class="space-y-4">
            <div class="card bg-base-100 shadow-sm p-4 space-y-2">
                <h2 class="font-semibold text-error">{ t("admin.emergencies") }</h2>
                { for catalog.admin_emergencies.iter().map(|e| html! {
                    <div class="flex justify-between items-center text-sm">
                        <div>
                            <p class="font-medium">{ format!("{} · {}", e.customer, e.issue) }</p>
                            <p class="text-xs opacity-70">{ format!("{} · {}", e.location, e.time) }</p>
                        </div>
                        <StatusBadge status={e.status} />
                    </div>
                }) }
            </div>
            <div class="card bg-base-100 shadow-sm p-4 space-y-2">
                <h2 class="font-semibold">{ t("admin.verifications") }</h2>
                { for catalog.admin_verifications.iter().map(|v| html! {
                    <div class="flex justify-between items-center text-sm">
                        <div>
                            <p class="font-medium">{ v.name.clone() }</p>
                            <p class="text-xs opacity-70">{ format!("{} · {} · {}", v.kind, v.category, v.submitted) }</p>
                        </div>
                        <div class="flex gap-1">
                            <button type="button" class="btn btn-xs btn-success">{ t("admin.approve") }</button>
                            <button type="button" class="btn btn-xs btn-ghost">{ t("admin.reject") }</button>
                        </div>
                    </div>
                }) }
            </div>
            <div class="card bg-base-100 shadow-sm p-4 overflow-x-auto">
                <h2 class="font-semibold mb-2">{ t("admin.bookings") }</h2>
                <table class="table table-xs">
                    <tbody>
                        { for catalog.admin_bookings.iter().map(|b| html! {
                            <tr>
                                <td class="font-mono">{ b.id.clone() }</td>
                                <td>{ b.customer.clone() }</td>
                                <td>{ b.worker.clone() }</td>
                                <td>{ b.service.clone() }</td>
                                <td>{ b.amount.clone() }</td>
                                <td><StatusBadge status={b.status} /></td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
