use anyhow::{Context, Result, ensure};
use service_connect_core::routing::CustomerView;
use service_connect_core::{
    AppPath, BookingForm, EmergencyKind, EmergencyRequest, EmergencyStep, FormError, Resolution,
    Role, Session, View, WorkerOnboarding, WorkerStep, resolve,
};

use super::ScenarioCtx;

pub fn worker_wizard(ctx: &ScenarioCtx) -> Result<()> {
    let mut wizard = WorkerOnboarding::new();
    wizard.back();
    ensure!(
        wizard.step() == WorkerStep::PersonalInfo,
        "back on the first page must stay put"
    );
    ensure!(wizard.progress_percent() == 25, "page 1 is 25%");

    let mut seen = vec![wizard.step().number()];
    for _ in 0..5 {
        wizard.advance();
        seen.push(wizard.step().number());
    }
    ensure!(seen == [1, 2, 3, 4, 4, 4], "advance walked {seen:?}");
    ensure!(wizard.progress_percent() == 100, "last page is 100%");

    if let Some(category) = ctx.catalog.categories.first() {
        wizard.draft.toggle_category(&category.name);
        ensure!(wizard.draft.categories.contains(&category.name));
        wizard.draft.toggle_category(&category.name);
        ensure!(wizard.draft.categories.is_empty(), "second toggle clears");
    }

    wizard.back();
    ensure!(
        wizard.step() == WorkerStep::Documents && wizard.progress_percent() == 75,
        "back from page 4 lands on page 3"
    );
    Ok(())
}

pub fn emergency_validation(ctx: &ScenarioCtx) -> Result<()> {
    let mut request = EmergencyRequest::with_search_step(ctx.config.search_step);
    ensure!(
        request.submit() == Err(FormError::IncompleteEmergency),
        "empty form must be rejected"
    );

    request.select_kind(EmergencyKind::Puncture);
    ensure!(
        request.submit() == Err(FormError::IncompleteEmergency),
        "a type without a description must be rejected"
    );
    ensure!(request.step() == EmergencyStep::Select, "rejection keeps the form");

    request.set_description(" ");
    request.submit()?;
    ensure!(
        request.step() == EmergencyStep::Searching && request.progress() == 0,
        "submit starts searching from 0%"
    );

    request.select_kind(EmergencyKind::Fuel);
    ensure!(
        request.kind() == Some(EmergencyKind::Puncture),
        "type is locked once searching"
    );
    Ok(())
}

pub fn booking_flow(ctx: &ScenarioCtx) -> Result<()> {
    let category = ctx
        .catalog
        .categories
        .first()
        .context("catalog has no categories")?;
    let mut form = BookingForm::new(category.id.clone());

    if let Some(busy) = ctx.catalog.nearby_workers.iter().find(|w| !w.available) {
        ensure!(!form.select_worker(busy), "busy worker {} was selectable", busy.id);
        ensure!(form.selected_worker().is_none());
    }
    ensure!(
        form.confirm() == Err(FormError::IncompleteBooking),
        "confirm without a worker must fail"
    );

    let worker = ctx
        .catalog
        .nearby_workers
        .iter()
        .find(|w| w.available)
        .context("catalog has no available workers")?;
    ensure!(form.select_worker(worker));
    ensure!(
        form.confirm() == Err(FormError::IncompleteBooking),
        "confirm without a description must fail"
    );

    form.set_description("Kitchen tap is leaking");
    let path = form.confirm()?;
    ensure!(
        path == AppPath::Tracking {
            booking_id: worker.id.clone()
        },
        "confirm opened {path}"
    );

    let mut session = Session::new();
    session.select_role(Role::Customer)?;
    ensure!(
        resolve(&session, &path)
            == Resolution::Render(View::Customer(CustomerView::LiveTracking {
                booking_id: worker.id.clone()
            })),
        "customer must be able to open {path}"
    );
    Ok(())
}
