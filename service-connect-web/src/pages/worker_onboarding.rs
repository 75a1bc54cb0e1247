use crate::components::PageHeader;
use crate::components::foundation::event_value;
use crate::i18n::{t, tr};
use service_connect_core::worker_onboarding::{DocumentSlot, WorkerProfileDraft};
use service_connect_core::{AppPath, Catalog, WorkerOnboarding, WorkerStep};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct WorkerOnboardingPageProps {
    pub catalog: Rc<Catalog>,
    pub on_navigate: Callback<AppPath>,
    #[prop_or_default]
    pub wizard: WorkerOnboarding,
}

type Wizard = UseStateHandle<WorkerOnboarding>;

fn change(wizard: &Wizard, edit: impl FnOnce(&mut WorkerOnboarding)) {
    let mut next = (**wizard).clone();
    edit(&mut next);
    wizard.set(next);
}

fn text_field(
    wizard: &Wizard,
    label: &str,
    input_type: &'static str,
    value: &str,
    assign: fn(&mut WorkerProfileDraft, String),
) -> Html {
    let oninput = {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(text) = event_value(&e) {
                change(&wizard, |w| assign(&mut w.draft, text));
            }
        })
    };
    html! {
        <label class="form-control">
            <span class="label-text">{ label.to_string() }</span>
            <input class="input input-bordered" type={input_type} value={value.to_string()} {oninput} />
        </label>
    }
}

#[function_component(WorkerOnboardingPage)]
pub fn worker_onboarding_page(props: &WorkerOnboardingPageProps) -> Html {
    let wizard = {
        let initial = props.wizard.clone();
        use_state(move || initial)
    };
    let step = wizard.step();

    let on_back = {
        let wizard = wizard.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |()| {
            if wizard.step().is_first() {
                on_navigate.emit(AppPath::Root);
            } else {
                change(&wizard, WorkerOnboarding::back);
            }
        })
    };
    let on_prev = {
        let wizard = wizard.clone();
        Callback::from(move |_| change(&wizard, WorkerOnboarding::back))
    };
    let on_continue = {
        let wizard = wizard.clone();
        Callback::from(move |_| change(&wizard, WorkerOnboarding::advance))
    };

    let current = step.number().to_string();
    let total = WorkerStep::TOTAL.to_string();
    let mut step_args = BTreeMap::new();
    step_args.insert("current", current.as_str());
    step_args.insert("total", total.as_str());

    let draft = &wizard.draft;
    let body = match step {
        WorkerStep::PersonalInfo => html! {
            <>
                { text_field(&wizard, &t("worker_onboarding.full_name"), "text", &draft.full_name, |d, v| d.full_name = v) }
                { text_field(&wizard, &t("worker_onboarding.mobile"), "tel", &draft.mobile, |d, v| d.mobile = v) }
                { text_field(&wizard, &t("worker_onboarding.email"), "email", &draft.email, |d, v| d.email = v) }
                { text_field(&wizard, &t("worker_onboarding.experience"), "number", &draft.years_experience, |d, v| d.years_experience = v) }
            </>
        },
        WorkerStep::ServiceCategory => html! {
            <>
                <p class="text-sm opacity-70">{ t("worker_onboarding.categories") }</p>
                <div class="grid grid-cols-2 gap-2">
                    { for props.catalog.categories.iter().map(|category| {
                        let name = category.name.clone();
                        let checked = draft.categories.contains(&name);
                        let onchange = {
                            let wizard = wizard.clone();
                            let name = name.clone();
                            Callback::from(move |_| change(&wizard, |w| w.draft.toggle_category(&name)))
                        };
                        html! {
                            <label class="label cursor-pointer card bg-base-100 p-3 justify-start gap-2">
                                <input type="checkbox" class="checkbox checkbox-primary" {checked} {onchange} />
                                <span class="label-text">{ name }</span>
                            </label>
                        }
                    }) }
                </div>
            </>
        },
        WorkerStep::Documents => html! {
            <>
                { for DocumentSlot::ALL.into_iter().map(|slot| html! {
                    <div class="card bg-base-100 border-2 border-dashed border-base-300 p-6 text-center space-y-1">
                        <p class="font-medium">{ slot.title() }</p>
                        <p class="text-xs opacity-70">{ slot.hint() }</p>
                        <span class="btn btn-sm btn-outline mt-2">{ t("worker_onboarding.upload") }</span>
                    </div>
                }) }
            </>
        },
        WorkerStep::ServiceArea => html! {
            <>
                { text_field(&wizard, &t("worker_onboarding.base_location"), "text", &draft.base_location, |d, v| d.base_location = v) }
                { text_field(&wizard, &t("worker_onboarding.radius"), "number", &draft.radius_km, |d, v| d.radius_km = v) }
            </>
        },
    };

    html! {
        <main class="min-h-screen bg-base-200 pb-24" data-testid="worker-onboarding">
            <PageHeader
                title={t("worker_onboarding.title")}
                subtitle={Some(AttrValue::from(tr("worker_onboarding.step", Some(&step_args))))}
                on_back={Some(on_back)}
            />
            <progress
                class="progress progress-primary w-full rounded-none"
                value={wizard.progress_percent().to_string()}
                max="100"
            />
            <section class="p-4 space-y-4">
                <h2 class="text-lg font-semibold">{ step.title() }</h2>
                { body }
            </section>
            <footer class="fixed bottom-0 inset-x-0 bg-base-100 shadow-lg p-4 flex gap-2">
                if !step.is_first() {
                    <button type="button" class="btn btn-ghost flex-1" onclick={on_prev}>{ t("worker_onboarding.back") }</button>
                }
                if step.is_last() {
                    // Registration is not sent anywhere.
                    <button type="button" class="btn btn-primary flex-1">{ t("worker_onboarding.submit") }</button>
                } else {
                    <button type="button" class="btn btn-primary flex-1" onclick={on_continue}>{ t("worker_onboarding.continue") }</button>
                }
            </footer>
        </main>
    }
}
