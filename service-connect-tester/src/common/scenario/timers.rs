use anyhow::{Result, ensure};
use service_connect_core::{
    EmergencyKind, EmergencyStep, SearchSimulation, SimClock, TrackingSimulation,
};

use super::ScenarioCtx;

fn started_search(ctx: &ScenarioCtx, clock: &mut SimClock) -> Result<SearchSimulation> {
    let mut search = SearchSimulation::mount(ctx.config);
    search.request_mut().select_kind(EmergencyKind::Engine);
    search.request_mut().set_description("Engine cranks but will not start");
    search.submit(clock)?;
    ensure!(search.is_ticking(), "submit must start the search ticker");
    Ok(search)
}

pub fn emergency_search(ctx: &ScenarioCtx) -> Result<()> {
    let mut clock = SimClock::new();
    let mut search = started_search(ctx, &mut clock)?;

    let mut last = 0;
    let mut found_at = None;
    let mut regressed = false;
    clock.run_for(ctx.config.search_duration_ms() * 2, |clock, id| {
        search.on_timer(clock, id);
        let progress = search.request().progress();
        regressed |= progress < last || progress > 100;
        last = progress;
        if found_at.is_none() && search.request().step() == EmergencyStep::Found {
            found_at = Some(clock.now());
        }
    });

    ensure!(!regressed, "progress must climb monotonically within 0..=100");
    ensure!(last == 100, "search ended at {last}%");
    ensure!(
        found_at == Some(ctx.config.search_duration_ms()),
        "found at {found_at:?}, expected {}ms",
        ctx.config.search_duration_ms()
    );
    ensure!(clock.pending() == 0, "no timer may outlive the search");
    Ok(())
}

pub fn search_unmount(ctx: &ScenarioCtx) -> Result<()> {
    let mut clock = SimClock::new();
    let mut search = started_search(ctx, &mut clock)?;
    clock.run_for(ctx.config.search_tick_ms * 3, |clock, id| {
        search.on_timer(clock, id);
    });
    let expected = ctx.config.search_step.saturating_mul(3).min(100);
    ensure!(
        search.request().progress() == expected,
        "three ticks gave {}%, expected {expected}%",
        search.request().progress()
    );

    let request = search.unmount(&mut clock);
    ensure!(clock.pending() == 0, "unmount must clear the ticker");
    clock.advance(ctx.config.search_duration_ms() * 4);
    ensure!(
        request.step() == EmergencyStep::Searching && request.progress() == expected,
        "request changed after unmount"
    );
    Ok(())
}

pub fn tracking_unmount(ctx: &ScenarioCtx) -> Result<()> {
    let mut clock = SimClock::new();
    let mut tracking = TrackingSimulation::mount(&mut clock, &ctx.config);
    let initial = *tracking.progress();
    ensure!(
        initial.progress() == ctx.config.tracking_initial_progress.min(100)
            && initial.eta_minutes() == ctx.config.tracking_initial_eta_min,
        "tracking must start from the configured values"
    );

    clock.run_for(ctx.config.tracking_tick_ms * 3, |_, id| {
        tracking.on_timer(id);
    });
    let mut expected = initial;
    for _ in 0..3 {
        expected.tick();
    }
    ensure!(
        *tracking.progress() == expected,
        "three ticks gave {:?}, expected {expected:?}",
        tracking.progress()
    );

    let frozen = tracking.unmount(&mut clock);
    ensure!(clock.pending() == 0, "unmount must clear the tracking ticker");
    clock.advance(ctx.config.tracking_tick_ms * 20);
    ensure!(frozen == expected, "tracking changed after unmount");
    Ok(())
}
