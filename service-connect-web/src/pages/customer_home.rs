use crate::components::foundation::event_value;
use crate::components::{StatusBadge, ThemeToggle};
use crate::i18n::t;
use service_connect_core::{AppPath, Catalog, Theme};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CustomerHomePageProps {
    pub catalog: Rc<Catalog>,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub on_navigate: Callback<AppPath>,
}

fn go(on_navigate: &Callback<AppPath>, path: AppPath) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |_| on_navigate.emit(path.clone()))
}

#[function_component(CustomerHomePage)]
pub fn customer_home_page(props: &CustomerHomePageProps) -> Html {
    // Local only; nothing filters on it.
    let search = use_state(String::new);
    let oninput = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                search.set(value);
            }
        })
    };
    let catalog = &props.catalog;

    html! {
        <main class="min-h-screen bg-base-200 pb-24" data-testid="customer-home">
            <header class="bg-primary text-primary-content p-4 space-y-3">
                <div class="flex items-center justify-between">
                    <div>
                        <p class="text-xs opacity-80">{ t("customer.location_label") }</p>
                        <p class="font-semibold">{ "📍 " }{ catalog.location.clone() }</p>
                    </div>
                    <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                </div>
                <input
                    class="input w-full text-base-content"
                    type="search"
                    placeholder={t("customer.search_placeholder")}
                    value={(*search).clone()}
                    {oninput}
                />
            </header>

            <section class="p-4 space-y-2">
                <h2 class="font-semibold">{ t("customer.emergency_title") }</h2>
                <p class="text-xs opacity-70">{ t("customer.emergency_subtitle") }</p>
                <div class="grid grid-cols-2 gap-2">
                    { for catalog.emergency_types.iter().map(|kind| html! {
                        <button
                            type="button"
                            class="btn btn-error btn-outline h-auto py-3 flex-col"
                            data-emergency={kind.kind.id()}
                            onclick={go(&props.on_navigate, AppPath::Emergency)}
                        >
                            <span class="font-semibold">{ kind.short_name.clone() }</span>
                            <span class="text-xs opacity-70">{ kind.description.clone() }</span>
                        </button>
                    }) }
                </div>
            </section>

            <section class="p-4 space-y-2">
                <h2 class="font-semibold">{ t("customer.services_title") }</h2>
                <div class="grid grid-cols-3 gap-2">
                    { for catalog.categories.iter().map(|category| html! {
                        <button
                            type="button"
                            class="card bg-base-100 shadow-sm p-3 text-sm"
                            data-category={category.id.clone()}
                            onclick={go(&props.on_navigate, AppPath::Service { category: category.id.clone() })}
                        >
                            { category.name.clone() }
                        </button>
                    }) }
                </div>
            </section>

            <section class="p-4 space-y-2">
                <h2 class="font-semibold">{ t("customer.recent_title") }</h2>
                <ul class="space-y-2">
                    { for catalog.recent_bookings.iter().map(|booking| html! {
                        <li class="card bg-base-100 shadow-sm p-3 flex flex-row items-center justify-between">
                            <div>
                                <p class="font-medium">{ booking.service.clone() }</p>
                                <p class="text-xs opacity-70">{ booking.worker.clone() }</p>
                            </div>
                            <div class="text-right space-y-1">
                                <StatusBadge status={booking.status} />
                                if booking.rating > 0 {
                                    <p class="text-xs text-warning">{ "★".repeat(usize::from(booking.rating)) }</p>
                                }
                            </div>
                        </li>
                    }) }
                </ul>
            </section>

            <button
                type="button"
                class="btn btn-error btn-circle btn-lg fixed bottom-6 right-6 shadow-lg"
                aria-label={t("emergency.title")}
                onclick={go(&props.on_navigate, AppPath::Emergency)}
            >
                { t("customer.sos") }
            </button>
        </main>
    }
}
