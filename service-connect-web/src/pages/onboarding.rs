use crate::components::foundation::event_value;
use crate::i18n::{t, tr};
use service_connect_core::onboarding::PHONE_MAX_LEN;
use service_connect_core::{Notice, OnboardingFlow, OnboardingStep, Role};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct OnboardingPageProps {
    pub on_role_select: Callback<Role>,
    pub on_notice: Callback<Notice>,
    /// Starting point of the stepper; the splash screen by default.
    #[prop_or_default]
    pub flow: OnboardingFlow,
}

fn update(flow: &UseStateHandle<OnboardingFlow>, edit: impl FnOnce(&mut OnboardingFlow)) {
    let mut next = (**flow).clone();
    edit(&mut next);
    flow.set(next);
}

#[function_component(OnboardingPage)]
pub fn onboarding_page(props: &OnboardingPageProps) -> Html {
    let flow = {
        let initial = props.flow.clone();
        use_state(move || initial)
    };

    let body = match flow.step() {
        OnboardingStep::Splash => {
            let onclick = {
                let flow = flow.clone();
                Callback::from(move |_| update(&flow, OnboardingFlow::get_started))
            };
            html! {
                <div class="flex flex-col items-center text-center gap-6" data-testid="onboarding-splash">
                    <img src={crate::paths::asset_path("static/assets/icon.svg")} alt="" class="w-24 h-24" />
                    <h1 class="text-3xl font-bold">{ t("app.title") }</h1>
                    <p class="opacity-70">{ t("app.tagline") }</p>
                    <button type="button" class="btn btn-primary btn-wide" {onclick}>
                        { t("onboarding.get_started") }
                    </button>
                </div>
            }
        }
        OnboardingStep::Role => html! {
            <div class="flex flex-col gap-4" data-testid="onboarding-role">
                <h2 class="text-xl font-semibold">{ t("onboarding.choose_role") }</h2>
                { for Role::ALL.into_iter().map(|role| {
                    let onclick = {
                        let flow = flow.clone();
                        Callback::from(move |_| update(&flow, |f| f.choose_role(role)))
                    };
                    html! {
                        <button type="button" class="card bg-base-100 shadow-sm text-left" data-role={role.id()} {onclick}>
                            <div class="card-body p-4">
                                <span class="card-title text-base">{ role.label() }</span>
                                <span class="text-sm opacity-70">{ role.description() }</span>
                            </div>
                        </button>
                    }
                }) }
            </div>
        },
        OnboardingStep::Login => login_view(&flow, props),
    };

    html! {
        <main class="min-h-screen bg-base-200 flex items-center justify-center p-6">
            <section class="w-full max-w-md">{ body }</section>
        </main>
    }
}

fn login_view(flow: &UseStateHandle<OnboardingFlow>, props: &OnboardingPageProps) -> Html {
    let on_back = {
        let flow = flow.clone();
        Callback::from(move |_| update(&flow, OnboardingFlow::back))
    };
    let oninput = {
        let flow = flow.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                update(&flow, |f| f.set_phone(&value));
            }
        })
    };
    let on_submit = {
        let flow = flow.clone();
        let on_role_select = props.on_role_select.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| match flow.submit() {
            Ok(role) => on_role_select.emit(role),
            Err(err) => on_notice.emit(err.into()),
        })
    };

    let count = flow.phone_len().to_string();
    let mut digits_args = BTreeMap::new();
    digits_args.insert("count", count.as_str());
    let role_label = flow.selected_role().map(Role::label).unwrap_or_default();
    let mut role_args = BTreeMap::new();
    role_args.insert("role", role_label);

    html! {
        <div class="flex flex-col gap-4" data-testid="onboarding-login">
            <button type="button" class="btn btn-ghost btn-sm self-start" onclick={on_back}>
                { "← " }{ t("onboarding.change_role") }
            </button>
            <h2 class="text-xl font-semibold">{ t("onboarding.login_title") }</h2>
            <p class="text-sm opacity-70">{ tr("onboarding.signing_in_as", Some(&role_args)) }</p>
            <label class="form-control">
                <span class="label-text">{ t("onboarding.phone_label") }</span>
                <div class="join w-full">
                    <span class="join-item btn btn-disabled">{ "+91" }</span>
                    <input
                        class="input input-bordered join-item w-full"
                        type="tel"
                        inputmode="numeric"
                        maxlength={PHONE_MAX_LEN.to_string()}
                        value={flow.phone().to_string()}
                        {oninput}
                    />
                </div>
                <span class="label-text-alt">{ tr("onboarding.digits", Some(&digits_args)) }</span>
            </label>
            <p class="text-xs opacity-60">{ t("onboarding.phone_hint") }</p>
            <button
                type="button"
                class="btn btn-primary"
                disabled={!flow.can_submit()}
                onclick={on_submit}
            >
                { t("onboarding.continue") }
            </button>
        </div>
    }
}
