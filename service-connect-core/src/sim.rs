//! Timer-driven drivers for the emergency search and live tracking views.
//!
//! Each driver acquires its timer handles when the owning state is entered and
//! hands them back to the clock on exit or unmount, so nothing mutates the
//! state after the view is gone.
use crate::clock::{SimClock, TimerHandle, TimerId};
use crate::config::SimulationConfig;
use crate::emergency::{EmergencyRequest, EmergencyStep, SearchTick};
use crate::error::FormError;
use crate::tracking::TrackingProgress;

#[derive(Debug)]
pub struct SearchSimulation {
    request: EmergencyRequest,
    config: SimulationConfig,
    ticker: Option<TimerHandle>,
    settle: Option<TimerHandle>,
}

impl SearchSimulation {
    #[must_use]
    pub const fn mount(config: SimulationConfig) -> Self {
        Self {
            request: EmergencyRequest::with_search_step(config.search_step),
            config,
            ticker: None,
            settle: None,
        }
    }

    #[must_use]
    pub const fn request(&self) -> &EmergencyRequest {
        &self.request
    }

    pub const fn request_mut(&mut self) -> &mut EmergencyRequest {
        &mut self.request
    }

    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Submit the form and, on success, start the search ticker.
    ///
    /// # Errors
    ///
    /// Propagates the validation failure from [`EmergencyRequest::submit`].
    pub fn submit(&mut self, clock: &mut SimClock) -> Result<(), FormError> {
        let before = self.request.step();
        self.request.submit()?;
        if before == EmergencyStep::Select && self.request.step() == EmergencyStep::Searching {
            self.ticker = Some(clock.set_interval(self.config.search_tick_ms));
        }
        Ok(())
    }

    /// Apply a fired timer. Returns `false` for timers this driver does not own.
    pub fn on_timer(&mut self, clock: &mut SimClock, id: TimerId) -> bool {
        if self.ticker.as_ref().is_some_and(|handle| handle.id() == id) {
            if self.request.tick_search() == SearchTick::Complete {
                if let Some(handle) = self.ticker.take() {
                    clock.clear(handle);
                }
                self.settle = Some(clock.set_timeout(self.config.search_settle_ms));
            }
            return true;
        }
        if self.settle.as_ref().is_some_and(|handle| handle.id() == id) {
            if let Some(handle) = self.settle.take() {
                clock.clear(handle);
            }
            self.request.settle();
            return true;
        }
        false
    }

    /// Release any live timer and return the final request state.
    pub fn unmount(mut self, clock: &mut SimClock) -> EmergencyRequest {
        for handle in [self.ticker.take(), self.settle.take()].into_iter().flatten() {
            clock.clear(handle);
        }
        log::debug!("search view unmounted at {}ms", clock.now());
        self.request
    }
}

#[derive(Debug)]
pub struct TrackingSimulation {
    progress: TrackingProgress,
    ticker: Option<TimerHandle>,
}

impl TrackingSimulation {
    pub fn mount(clock: &mut SimClock, config: &SimulationConfig) -> Self {
        Self {
            progress: config.initial_tracking(),
            ticker: Some(clock.set_interval(config.tracking_tick_ms)),
        }
    }

    #[must_use]
    pub const fn progress(&self) -> &TrackingProgress {
        &self.progress
    }

    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.ticker.as_ref().is_some_and(|handle| handle.id() == id) {
            self.progress.tick();
            true
        } else {
            false
        }
    }

    pub fn unmount(mut self, clock: &mut SimClock) -> TrackingProgress {
        if let Some(handle) = self.ticker.take() {
            clock.clear(handle);
        }
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emergency::EmergencyKind;

    fn submitted(clock: &mut SimClock) -> SearchSimulation {
        let mut search = SearchSimulation::mount(SimulationConfig::default());
        search.request_mut().select_kind(EmergencyKind::Fuel);
        search.request_mut().set_description("tank is empty");
        search.submit(clock).unwrap();
        search
    }

    #[test]
    fn invalid_submit_schedules_nothing() {
        let mut clock = SimClock::new();
        let mut search = SearchSimulation::mount(SimulationConfig::default());
        assert_eq!(search.submit(&mut clock), Err(FormError::IncompleteEmergency));
        assert_eq!(clock.pending(), 0);
        assert!(!search.is_ticking());
    }

    #[test]
    fn search_completes_then_settles() {
        let mut clock = SimClock::new();
        let mut search = submitted(&mut clock);

        clock.run_for(3000, |clock, id| {
            assert!(search.on_timer(clock, id));
        });
        assert_eq!(search.request().progress(), 100);
        assert_eq!(search.request().step(), EmergencyStep::Searching);
        assert!(!search.is_ticking());

        clock.run_for(499, |clock, id| {
            search.on_timer(clock, id);
        });
        assert_eq!(search.request().step(), EmergencyStep::Searching);
        clock.run_for(1, |clock, id| {
            search.on_timer(clock, id);
        });
        assert_eq!(search.request().step(), EmergencyStep::Found);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn tracking_stops_after_unmount() {
        let mut clock = SimClock::new();
        let mut tracking = TrackingSimulation::mount(&mut clock, &SimulationConfig::default());
        clock.run_for(6000, |_, id| {
            tracking.on_timer(id);
        });
        assert_eq!(tracking.progress().progress(), 45);
        let snapshot = tracking.unmount(&mut clock);
        assert_eq!(clock.pending(), 0);
        let mut fired = 0;
        clock.run_for(60_000, |_, _| fired += 1);
        assert_eq!(fired, 0);
        assert_eq!(snapshot.eta_minutes(), 10);
    }

    #[test]
    fn resubmitting_after_found_starts_no_timer() {
        let mut clock = SimClock::new();
        let mut search = submitted(&mut clock);
        clock.run_for(3500, |clock, id| {
            search.on_timer(clock, id);
        });
        assert_eq!(search.request().step(), EmergencyStep::Found);

        assert_eq!(search.submit(&mut clock), Ok(()));
        assert!(!search.is_ticking());
        assert_eq!(clock.pending(), 0);
        assert_eq!(search.request().step(), EmergencyStep::Found);
    }

    #[test]
    fn resubmitting_while_searching_keeps_one_ticker() {
        let mut clock = SimClock::new();
        let mut search = submitted(&mut clock);
        clock.run_for(600, |clock, id| {
            search.on_timer(clock, id);
        });
        assert_eq!(search.submit(&mut clock), Ok(()));
        assert_eq!(clock.pending(), 1);
        assert_eq!(search.request().progress(), 20);
    }

    #[test]
    fn unmount_mid_search_releases_the_ticker() {
        let mut clock = SimClock::new();
        let mut search = submitted(&mut clock);
        clock.run_for(900, |clock, id| {
            search.on_timer(clock, id);
        });
        let request = search.unmount(&mut clock);
        assert_eq!(request.progress(), 30);
        assert_eq!(clock.pending(), 0);
    }
}
