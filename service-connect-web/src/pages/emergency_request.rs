use crate::components::PageHeader;
use crate::components::foundation::event_value;
use crate::i18n::{fmt_pct, t, tr};
use crate::timer::{Interval, Timeout};
use service_connect_core::emergency::SEARCH_COMPLETE;
use service_connect_core::{
    AppPath, Catalog, EmergencyKind, EmergencyRequest, EmergencyStep, Notice, SimulationConfig,
};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct EmergencyRequestPageProps {
    pub catalog: Rc<Catalog>,
    pub config: SimulationConfig,
    pub on_navigate: Callback<AppPath>,
    pub on_notice: Callback<Notice>,
    /// Request to resume; a fresh one by default.
    #[prop_or_default]
    pub request: Option<EmergencyRequest>,
}

pub enum EmergencyAction {
    Select(EmergencyKind),
    Describe(String),
    Submit,
    Tick,
    Settle,
}

#[derive(Clone, PartialEq)]
pub struct EmergencyState(pub EmergencyRequest);

impl Reducible for EmergencyState {
    type Action = EmergencyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            EmergencyAction::Select(kind) => next.select_kind(kind),
            EmergencyAction::Describe(text) => next.set_description(&text),
            EmergencyAction::Submit => {
                if let Err(err) = next.submit() {
                    log::debug!("emergency submit rejected: {err}");
                }
            }
            EmergencyAction::Tick => {
                let _ = next.tick_search();
            }
            EmergencyAction::Settle => {
                let _ = next.settle();
            }
        }
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

impl EmergencyState {
    /// The progress interval runs while searching below 100 %.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.0.step() == EmergencyStep::Searching && self.0.progress() < SEARCH_COMPLETE
    }

    /// Search finished; waiting for the settle delay before `Found`.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.0.step() == EmergencyStep::Searching && self.0.progress() >= SEARCH_COMPLETE
    }
}

#[function_component(EmergencyRequestPage)]
pub fn emergency_request_page(props: &EmergencyRequestPageProps) -> Html {
    let state = {
        let initial = props
            .request
            .clone()
            .unwrap_or_else(|| EmergencyRequest::with_search_step(props.config.search_step));
        use_reducer(move || EmergencyState(initial))
    };

    {
        let dispatcher = state.dispatcher();
        let period = props.config.search_tick_ms;
        use_effect_with(state.is_ticking(), move |&ticking| {
            let interval = if ticking {
                Interval::start(period, move || dispatcher.dispatch(EmergencyAction::Tick))
            } else {
                None
            };
            move || {
                if let Some(interval) = interval {
                    interval.cancel();
                }
            }
        });
    }
    {
        let dispatcher = state.dispatcher();
        let delay = props.config.search_settle_ms;
        use_effect_with(state.is_settling(), move |&settling| {
            let timeout = if settling {
                Timeout::start(delay, move || dispatcher.dispatch(EmergencyAction::Settle))
            } else {
                None
            };
            move || {
                if let Some(timeout) = timeout {
                    timeout.cancel();
                }
            }
        });
    }

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |()| on_navigate.emit(AppPath::Root))
    };
    let request = &state.0;
    let body = match request.step() {
        // `Confirm` is never entered; it renders like the form.
        EmergencyStep::Select | EmergencyStep::Confirm => select_view(&state, props),
        EmergencyStep::Searching => searching_view(request, &props.catalog),
        EmergencyStep::Found => found_view(&props.catalog, &props.on_navigate),
    };

    html! {
        <main class="min-h-screen bg-base-200" data-testid="emergency-request">
            <PageHeader title={t("emergency.title")} on_back={Some(on_back)} />
            <section class="p-4 space-y-4">{ body }</section>
        </main>
    }
}

fn select_view(state: &UseReducerHandle<EmergencyState>, props: &EmergencyRequestPageProps) -> Html {
    let request = &state.0;
    let on_describe = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                state.dispatch(EmergencyAction::Describe(value));
            }
        })
    };
    let on_send = {
        let state = state.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| match state.0.validate() {
            Ok(_) => state.dispatch(EmergencyAction::Submit),
            Err(err) => on_notice.emit(err.into()),
        })
    };

    html! {
        <>
            <h2 class="font-semibold">{ t("emergency.select_type") }</h2>
            <div class="grid grid-cols-2 gap-2">
                { for props.catalog.emergency_types.iter().map(|entry| {
                    let kind = entry.kind;
                    let active = request.kind() == Some(kind);
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_| state.dispatch(EmergencyAction::Select(kind)))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("btn", "h-auto", "py-3", "flex-col", active.then_some("btn-error"))}
                            aria-pressed={active.to_string()}
                            data-emergency={kind.id()}
                            {onclick}
                        >
                            <span class="font-semibold">{ entry.name.clone() }</span>
                            <span class="text-xs opacity-70">{ entry.description.clone() }</span>
                        </button>
                    }
                }) }
            </div>
            <label class="form-control">
                <span class="label-text font-semibold">{ t("emergency.describe") }</span>
                <textarea
                    class="textarea textarea-bordered"
                    placeholder={t("emergency.describe_placeholder")}
                    value={request.description().to_string()}
                    oninput={on_describe}
                />
            </label>
            <div class="card bg-base-100 p-3 text-sm">
                <span class="opacity-70">{ t("emergency.location") }</span>
                <span class="font-medium">{ props.catalog.location.clone() }</span>
            </div>
            <button type="button" class="btn btn-error btn-block" onclick={on_send}>
                { t("emergency.send") }
            </button>
        </>
    }
}

fn searching_view(request: &EmergencyRequest, catalog: &Catalog) -> Html {
    let count = catalog.nearby_pumps.len().to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    html! {
        <div class="flex flex-col items-center text-center gap-4 py-8" aria-live="polite" data-testid="emergency-searching">
            <span class="loading loading-ring loading-lg text-error"></span>
            <h2 class="text-lg font-semibold">{ t("emergency.searching") }</h2>
            <p class="text-sm opacity-70">{ t("emergency.searching_hint") }</p>
            <progress
                class="progress progress-error w-full"
                value={request.progress().to_string()}
                max="100"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={request.progress().to_string()}
            />
            <span class="font-mono">{ fmt_pct(request.progress()) }</span>
            <p class="text-xs opacity-60">{ tr("emergency.nearby_pumps", Some(&args)) }</p>
        </div>
    }
}

fn found_view(catalog: &Catalog, on_navigate: &Callback<AppPath>) -> Html {
    let on_track = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(EmergencyRequest::tracking_path()))
    };
    html! {
        <div class="flex flex-col items-center text-center gap-4 py-8" data-testid="emergency-found">
            <div class="text-5xl text-success">{ "✓" }</div>
            <h2 class="text-lg font-semibold">{ t("emergency.found") }</h2>
            <p class="text-sm opacity-70">{ t("emergency.found_hint") }</p>
            if let Some(pump) = catalog.nearby_pumps.first() {
                <div class="card bg-base-100 shadow-sm w-full p-4 text-left">
                    <p class="font-semibold">{ pump.name.clone() }</p>
                    <p class="text-xs opacity-70">{ format!("{} · ETA {}", pump.distance, pump.eta) }</p>
                </div>
            }
            <button type="button" class="btn btn-primary btn-block" onclick={on_track}>
                { t("emergency.track") }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: EmergencyState, action: EmergencyAction) -> EmergencyState {
        Rc::unwrap_or_clone(Rc::new(state).reduce(action))
    }

    #[test]
    fn reducer_walks_select_to_found() {
        let mut state = EmergencyState(EmergencyRequest::new());
        state = reduce(state, EmergencyAction::Select(EmergencyKind::Puncture));
        state = reduce(state, EmergencyAction::Describe("rear tyre flat".into()));
        state = reduce(state, EmergencyAction::Submit);
        assert!(state.is_ticking());

        for _ in 0..10 {
            state = reduce(state, EmergencyAction::Tick);
        }
        assert!(!state.is_ticking());
        assert!(state.is_settling());

        state = reduce(state, EmergencyAction::Settle);
        assert_eq!(state.0.step(), EmergencyStep::Found);
        assert!(!state.is_settling());
    }

    #[test]
    fn reducer_ignores_incomplete_submit() {
        let state = reduce(EmergencyState(EmergencyRequest::new()), EmergencyAction::Submit);
        assert_eq!(state.0.step(), EmergencyStep::Select);
        assert!(!state.is_ticking());
    }
}
