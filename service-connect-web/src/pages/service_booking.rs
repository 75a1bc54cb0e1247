use crate::components::PageHeader;
use crate::components::foundation::event_value;
use crate::i18n::{t, tr};
use service_connect_core::booking::BOOKING_CONFIRMED;
use service_connect_core::catalog::NearbyWorker;
use service_connect_core::{AppPath, BookingForm, BookingTiming, Catalog, Notice};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ServiceBookingPageProps {
    pub category: AttrValue,
    pub catalog: Rc<Catalog>,
    pub on_navigate: Callback<AppPath>,
    pub on_notice: Callback<Notice>,
}

fn edit(form: &UseStateHandle<BookingForm>, change: impl FnOnce(&mut BookingForm)) {
    let mut next = (**form).clone();
    change(&mut next);
    form.set(next);
}

#[function_component(ServiceBookingPage)]
pub fn service_booking_page(props: &ServiceBookingPageProps) -> Html {
    let form = {
        let category = props.category.to_string();
        use_state(move || BookingForm::new(category))
    };
    let catalog = &props.catalog;
    let title_name = catalog
        .category(&props.category)
        .map_or_else(|| props.category.to_string(), |c| c.name.clone());
    let mut title_args = BTreeMap::new();
    title_args.insert("category", title_name.as_str());

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |()| on_navigate.emit(AppPath::Root))
    };
    let on_describe = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                edit(&form, |f| f.set_description(&value));
            }
        })
    };
    let on_confirm = {
        let form = form.clone();
        let on_navigate = props.on_navigate.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| match form.confirm() {
            Ok(path) => {
                on_notice.emit(Notice::success(BOOKING_CONFIRMED));
                on_navigate.emit(path);
            }
            Err(err) => on_notice.emit(err.into()),
        })
    };
    let selected = form
        .selected_worker()
        .and_then(|id| catalog.worker(id))
        .cloned();

    html! {
        <main class="min-h-screen bg-base-200 pb-28" data-testid="service-booking">
            <PageHeader
                title={tr("booking.title", Some(&title_args))}
                subtitle={Some(AttrValue::from(catalog.service_address.clone()))}
                on_back={Some(on_back)}
            />
            <section class="p-4 space-y-2">
                <h2 class="font-semibold">{ t("booking.when") }</h2>
                <div class="grid grid-cols-2 gap-2">
                    { for BookingTiming::ALL.into_iter().map(|timing| {
                        let onclick = {
                            let form = form.clone();
                            Callback::from(move |_| edit(&form, |f| f.timing = timing))
                        };
                        let active = form.timing == timing;
                        html! {
                            <button
                                type="button"
                                class={classes!("btn", "h-auto", "py-3", "flex-col", active.then_some("btn-primary"))}
                                aria-pressed={active.to_string()}
                                {onclick}
                            >
                                <span>{ timing.label() }</span>
                                <span class="text-xs opacity-70">{ timing.hint() }</span>
                            </button>
                        }
                    }) }
                </div>
            </section>
            <section class="p-4 space-y-2">
                <label class="form-control">
                    <span class="label-text font-semibold">{ t("booking.describe") }</span>
                    <textarea
                        class="textarea textarea-bordered"
                        placeholder={t("booking.describe_placeholder")}
                        value={form.description().to_string()}
                        oninput={on_describe}
                    />
                </label>
            </section>
            <section class="p-4 space-y-2">
                <h2 class="font-semibold">{ t("booking.workers") }</h2>
                { for catalog.nearby_workers.iter().map(|worker| worker_card(worker, &form)) }
            </section>
            if let Some(worker) = selected {
                <footer class="fixed bottom-0 inset-x-0 bg-base-100 shadow-lg p-4 flex items-center justify-between" data-testid="booking-bar">
                    <div>
                        <p class="text-xs opacity-70">{ worker.name.clone() }</p>
                        <p class="text-lg font-bold">{ worker.price.clone() }</p>
                    </div>
                    <button type="button" class="btn btn-primary" onclick={on_confirm}>{ t("booking.confirm") }</button>
                </footer>
            }
        </main>
    }
}

fn worker_card(worker: &NearbyWorker, form: &UseStateHandle<BookingForm>) -> Html {
    let selected = form.selected_worker() == Some(worker.id.as_str());
    let onclick = {
        let form = form.clone();
        let worker = worker.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            if next.select_worker(&worker) {
                form.set(next);
            }
        })
    };
    let jobs = worker.jobs.to_string();
    let mut jobs_args = BTreeMap::new();
    jobs_args.insert("count", jobs.as_str());
    html! {
        <button
            type="button"
            class={classes!(
                "card", "bg-base-100", "shadow-sm", "w-full", "text-left",
                selected.then_some("ring-2 ring-primary"),
                (!worker.available).then_some("opacity-50")
            )}
            disabled={!worker.available}
            data-worker={worker.id.clone()}
            {onclick}
        >
            <div class="card-body p-3 flex-row items-center gap-3">
                <div class="avatar placeholder">
                    <div class="bg-neutral text-neutral-content rounded-full w-10">
                        <span>{ worker.initial().to_string() }</span>
                    </div>
                </div>
                <div class="flex-1">
                    <p class="font-medium">{ worker.name.clone() }</p>
                    <p class="text-xs opacity-70">
                        { format!("★ {:.1} · ", worker.rating) }{ tr("booking.jobs", Some(&jobs_args)) }{ format!(" · {}", worker.distance) }
                    </p>
                </div>
                <div class="text-right">
                    <p class="font-semibold">{ worker.price.clone() }</p>
                    if !worker.available {
                        <span class="badge badge-ghost badge-sm">{ t("booking.busy") }</span>
                    }
                </div>
            </div>
        </button>
    }
}
