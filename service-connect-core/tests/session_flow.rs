use service_connect_core::routing::{CustomerView, WorkerView};
use service_connect_core::{
    AppPath, FormError, OnboardingFlow, Resolution, Role, Session, SessionError, View, resolve,
};

fn complete_onboarding(session: &mut Session, role: Role, phone: &str) -> Result<(), FormError> {
    let mut flow = OnboardingFlow::new();
    flow.get_started();
    flow.choose_role(role);
    flow.set_phone(phone);
    let chosen = flow.submit()?;
    session.select_role(chosen).unwrap();
    Ok(())
}

#[test]
fn worker_login_lands_on_worker_dashboard() {
    let mut session = Session::new();
    assert_eq!(
        resolve(&session, &AppPath::parse("/")),
        Resolution::Render(View::Onboarding)
    );

    complete_onboarding(&mut session, Role::Worker, "9876543210").unwrap();

    assert_eq!(session, Session::Authenticated { role: Role::Worker });
    assert_eq!(
        resolve(&session, &AppPath::parse("/")),
        Resolution::Render(View::Worker(WorkerView::Dashboard))
    );
}

#[test]
fn short_phone_never_authenticates() {
    let mut session = Session::new();
    let err = complete_onboarding(&mut session, Role::Customer, "98765").unwrap_err();
    assert_eq!(err, FormError::PhoneTooShort { len: 5 });
    assert!(!session.is_authenticated());
    assert_eq!(
        resolve(&session, &AppPath::parse("/emergency")),
        Resolution::Redirect(AppPath::Root)
    );
}

#[test]
fn role_choice_is_final_for_the_session() {
    let mut session = Session::new();
    complete_onboarding(&mut session, Role::Customer, "9999999999").unwrap();
    assert_eq!(
        session.select_role(Role::Admin),
        Err(SessionError::AlreadyAuthenticated(Role::Customer))
    );
    assert_eq!(
        resolve(&session, &AppPath::parse("/service/painter")),
        Resolution::Render(View::Customer(CustomerView::ServiceBooking {
            category: "painter".into()
        }))
    );
}

#[test]
fn redirect_target_always_renders() {
    for role in Role::ALL {
        let mut session = Session::new();
        session.select_role(role).unwrap();
        for raw in ["/", "/emergency", "/worker/onboard", "/tracking/9", "/unknown/path"] {
            let target = match resolve(&session, &AppPath::parse(raw)) {
                Resolution::Render(_) => continue,
                Resolution::Redirect(target) => target,
            };
            assert!(
                matches!(resolve(&session, &target), Resolution::Render(_)),
                "{role} redirect from {raw} must land on a view"
            );
        }
    }
}
