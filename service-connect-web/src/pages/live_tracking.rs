use crate::components::PageHeader;
use crate::i18n::{t, tr};
use crate::timer::Interval;
use service_connect_core::{AppPath, Catalog, SimulationConfig, TrackingProgress};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LiveTrackingPageProps {
    pub booking_id: AttrValue,
    pub catalog: Rc<Catalog>,
    pub config: SimulationConfig,
    pub on_navigate: Callback<AppPath>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct Tracking(TrackingProgress);

impl Reducible for Tracking {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        let mut next = self.0;
        next.tick();
        Rc::new(Self(next))
    }
}

#[function_component(LiveTrackingPage)]
pub fn live_tracking_page(props: &LiveTrackingPageProps) -> Html {
    let tracking = {
        let initial = props.config.initial_tracking();
        use_reducer(move || Tracking(initial))
    };

    // One interval for the lifetime of the view.
    {
        let dispatcher = tracking.dispatcher();
        let period = props.config.tracking_tick_ms;
        use_effect_with((), move |()| {
            let interval = Interval::start(period, move || dispatcher.dispatch(()));
            move || {
                if let Some(interval) = interval {
                    interval.cancel();
                }
            }
        });
    }

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |()| on_navigate.emit(AppPath::Root))
    };
    let progress = tracking.0;
    let minutes = progress.eta_minutes().to_string();
    let mut eta_args = BTreeMap::new();
    eta_args.insert("minutes", minutes.as_str());
    let mut booking_args = BTreeMap::new();
    booking_args.insert("id", props.booking_id.as_str());

    html! {
        <main class="min-h-screen bg-base-200" data-testid="live-tracking">
            <PageHeader
                title={t("tracking.title")}
                subtitle={Some(AttrValue::from(tr("tracking.booking", Some(&booking_args))))}
                on_back={Some(on_back)}
            />
            <section class="h-48 bg-base-300 flex items-center justify-center text-4xl" aria-hidden="true">
                { "🗺" }
            </section>
            <section class="p-4 space-y-4">
                <div class="card bg-base-100 shadow-sm p-4 space-y-2">
                    <p class="text-lg font-semibold" aria-live="polite">{ tr("tracking.eta", Some(&eta_args)) }</p>
                    <span class="text-xs opacity-70">{ t("tracking.progress") }</span>
                    <progress
                        class="progress progress-primary w-full"
                        value={progress.progress().to_string()}
                        max="100"
                        aria-valuenow={progress.progress().to_string()}
                    />
                </div>
                if let Some(worker) = &props.catalog.tracked_worker {
                    <div class="card bg-base-100 shadow-sm p-4 flex flex-row items-center gap-3" data-testid="tracked-worker">
                        <div class="flex-1">
                            <p class="font-semibold">{ worker.name.clone() }</p>
                            <p class="text-xs opacity-70">{ format!("★ {:.1} · {} jobs · {}", worker.rating, worker.jobs, worker.distance) }</p>
                        </div>
                        <button type="button" class="btn btn-sm btn-success">{ t("tracking.call") }</button>
                        <button type="button" class="btn btn-sm btn-outline">{ t("tracking.chat") }</button>
                    </div>
                }
                <div class="card bg-base-100 shadow-sm p-4 space-y-2">
                    <h2 class="font-semibold">{ t("tracking.checklist") }</h2>
                    <ul class="space-y-1">
                        // Static; it does not follow the progress bar.
                        { for props.catalog.tracking_checklist.iter().map(|item| html! {
                            <li class={classes!("flex", "gap-2", (!item.completed).then_some("opacity-50"))}>
                                <span>{ if item.completed { "✓" } else { "○" } }</span>
                                <span>{ item.label.clone() }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </section>
        </main>
    }
}
