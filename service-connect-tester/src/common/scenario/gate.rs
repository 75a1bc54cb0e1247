use anyhow::{Result, bail, ensure};
use service_connect_core::routing::{CustomerView, WorkerView};
use service_connect_core::{
    AppPath, FormError, OnboardingFlow, Resolution, Role, Session, View, resolve,
};

use super::ScenarioCtx;

const TEN_DIGITS: &str = "9876543210";

fn registered_paths() -> [AppPath; 6] {
    [
        AppPath::Root,
        AppPath::Service {
            category: "electrician".into(),
        },
        AppPath::Emergency,
        AppPath::Tracking {
            booking_id: "emergency-1".into(),
        },
        AppPath::WorkerOnboard,
        AppPath::parse("/admin/settings"),
    ]
}

fn log_in(role: Role) -> Result<Session> {
    let mut flow = OnboardingFlow::new();
    flow.get_started();
    flow.choose_role(role);
    flow.set_phone(TEN_DIGITS);
    let chosen = flow.submit()?;
    ensure!(chosen == role, "login yielded {chosen} instead of {role}");
    let mut session = Session::new();
    session.select_role(chosen)?;
    Ok(session)
}

fn expect_redirect(session: &Session, path: &AppPath) -> Result<()> {
    match resolve(session, path) {
        Resolution::Redirect(AppPath::Root) => Ok(()),
        other => bail!("{path} should redirect to / but resolved to {other:?}"),
    }
}

pub fn onboarding_gate(_ctx: &ScenarioCtx) -> Result<()> {
    let anonymous = Session::new();
    ensure!(
        resolve(&anonymous, &AppPath::Root) == Resolution::Render(View::Onboarding),
        "anonymous / must render onboarding"
    );
    for path in registered_paths().iter().skip(1) {
        expect_redirect(&anonymous, path)?;
    }

    let session = log_in(Role::Customer)?;
    ensure!(
        resolve(&session, &AppPath::Root) == Resolution::Render(View::Customer(CustomerView::Home)),
        "customer / must render the home view"
    );
    Ok(())
}

pub fn worker_login(_ctx: &ScenarioCtx) -> Result<()> {
    let session = log_in(Role::Worker)?;
    ensure!(
        resolve(&session, &AppPath::Root) == Resolution::Render(View::Worker(WorkerView::Dashboard)),
        "worker / must render the dashboard"
    );
    ensure!(
        resolve(&session, &AppPath::WorkerOnboard)
            == Resolution::Render(View::Worker(WorkerView::Onboarding)),
        "worker must reach registration"
    );
    expect_redirect(&session, &AppPath::Emergency)?;
    Ok(())
}

pub fn phone_validation(_ctx: &ScenarioCtx) -> Result<()> {
    let mut flow = OnboardingFlow::new();
    flow.get_started();
    flow.choose_role(Role::Pump);

    flow.set_phone("98765");
    ensure!(!flow.can_submit(), "five characters must not submit");
    ensure!(
        flow.submit() == Err(FormError::PhoneTooShort { len: 5 }),
        "short phone must be rejected with its length"
    );

    flow.set_phone("987654321012");
    ensure!(flow.phone_len() == 10, "input must truncate to ten characters");

    flow.set_phone("abcdefghij");
    ensure!(
        flow.submit() == Ok(Role::Pump),
        "any ten characters are accepted"
    );
    Ok(())
}

pub fn role_isolation(_ctx: &ScenarioCtx) -> Result<()> {
    for role in Role::ALL {
        let mut session = log_in(role)?;
        for path in registered_paths() {
            match resolve(&session, &path) {
                Resolution::Render(view) => ensure!(
                    view.role() == Some(role),
                    "{role} rendered a {:?} view at {path}",
                    view.role()
                ),
                Resolution::Redirect(target) => ensure!(
                    target == AppPath::Root,
                    "{role} redirected {path} to {target} instead of /"
                ),
            }
        }
        ensure!(
            resolve(&session, &AppPath::Root).view().is_some(),
            "{role} must render something at /"
        );

        let other = if role == Role::Admin {
            Role::Customer
        } else {
            Role::Admin
        };
        ensure!(
            session.select_role(other).is_err(),
            "{role} session accepted a second role"
        );
        ensure!(session.role() == Some(role), "{role} session changed role");
    }
    Ok(())
}
