//! Deterministic virtual-time timer scheduler.
//!
//! Mirrors the browser's `setInterval`/`setTimeout` contract closely enough to
//! drive the simulated search and tracking flows without a browser: timers fire
//! in deadline order (creation order on ties), intervals re-arm themselves, and
//! a cleared timer never fires again.

/// Milliseconds of virtual time.
pub type Millis = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Ownership of a scheduled timer.
///
/// Deliberately not `Clone`: passing the handle to [`SimClock::clear`] consumes
/// it, so a timer is released at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a TimerHandle leaks the timer until the clock is dropped"]
pub struct TimerHandle {
    id: TimerId,
}

impl TimerHandle {
    #[must_use]
    pub const fn id(&self) -> TimerId {
        self.id
    }
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    due: Millis,
    period: Option<Millis>,
}

#[derive(Debug, Default)]
pub struct SimClock {
    now: Millis,
    next_id: u64,
    timers: Vec<Timer>,
}

impl SimClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn now(&self) -> Millis {
        self.now
    }

    /// Number of timers still scheduled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.iter().any(|timer| timer.id == id)
    }

    fn schedule(&mut self, delay: Millis, period: Option<Millis>) -> TimerHandle {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due: self.now + delay,
            period,
        });
        TimerHandle { id }
    }

    /// Fire every `period` ms until cleared. A zero period is treated as 1 ms.
    pub fn set_interval(&mut self, period: Millis) -> TimerHandle {
        let period = period.max(1);
        let handle = self.schedule(period, Some(period));
        log::trace!("interval {:?} every {period}ms", handle.id);
        handle
    }

    /// Fire once after `delay` ms.
    pub fn set_timeout(&mut self, delay: Millis) -> TimerHandle {
        let handle = self.schedule(delay, None);
        log::trace!("timeout {:?} in {delay}ms", handle.id);
        handle
    }

    /// Release a timer. Returns whether it was still scheduled (a fired
    /// timeout has already removed itself).
    pub fn clear(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != handle.id);
        let removed = self.timers.len() != before;
        log::trace!("cleared {:?} (was scheduled: {removed})", handle.id);
        removed
    }

    /// Fire the earliest timer due at or before `until`, moving `now` to its
    /// deadline. Returns `None` (leaving `now` untouched) when nothing is due.
    pub fn fire_next(&mut self, until: Millis) -> Option<TimerId> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.id))
            .map(|(index, _)| index)?;

        let timer = self.timers[index];
        self.now = self.now.max(timer.due);
        match timer.period {
            Some(period) => self.timers[index].due = timer.due + period,
            None => {
                self.timers.remove(index);
            }
        }
        Some(timer.id)
    }

    /// Advance virtual time by `duration`, handing every fired timer to
    /// `on_fire`. The callback may schedule or clear timers; new timers due
    /// inside the window fire in the same call.
    pub fn run_for<F>(&mut self, duration: Millis, mut on_fire: F)
    where
        F: FnMut(&mut Self, TimerId),
    {
        let until = self.now + duration;
        while let Some(id) = self.fire_next(until) {
            on_fire(self, id);
        }
        self.now = until;
    }

    /// Advance virtual time without observing timers.
    pub fn advance(&mut self, duration: Millis) {
        self.run_for(duration, |_, _| {});
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_fires_every_period() {
        let mut clock = SimClock::new();
        let handle = clock.set_interval(300);
        let mut fired = Vec::new();
        clock.run_for(1000, |clock, id| {
            assert_eq!(id, handle.id());
            fired.push(clock.now());
        });
        assert_eq!(fired, vec![300, 600, 900]);
        assert_eq!(clock.now(), 1000);
        assert!(clock.clear(handle));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn timeout_fires_once_and_removes_itself() {
        let mut clock = SimClock::new();
        let handle = clock.set_timeout(500);
        let mut count = 0;
        clock.run_for(2000, |_, _| count += 1);
        assert_eq!(count, 1);
        assert!(!clock.is_scheduled(handle.id()));
        assert!(!clock.clear(handle));
    }

    #[test]
    fn ties_fire_in_creation_order() {
        let mut clock = SimClock::new();
        let first = clock.set_timeout(100);
        let second = clock.set_interval(100);
        assert_eq!(clock.fire_next(100), Some(first.id()));
        assert_eq!(clock.fire_next(100), Some(second.id()));
        assert_eq!(clock.fire_next(100), None);
        let _ = clock.clear(second);
    }

    #[test]
    fn cleared_timer_never_fires() {
        let mut clock = SimClock::new();
        let handle = clock.set_interval(50);
        clock.advance(120);
        clock.clear(handle);
        let mut fired = 0;
        clock.run_for(10_000, |_, _| fired += 1);
        assert_eq!(fired, 0);
    }

    #[test]
    fn timers_scheduled_in_callbacks_fire_within_the_window() {
        let mut clock = SimClock::new();
        let tick = clock.set_timeout(100);
        let mut follow_up = None;
        let mut seen = Vec::new();
        clock.run_for(1000, |clock, id| {
            seen.push((id, clock.now()));
            if id == tick.id() {
                follow_up = Some(clock.set_timeout(200));
            }
        });
        let follow_up = follow_up.unwrap();
        assert_eq!(seen, vec![(tick.id(), 100), (follow_up.id(), 300)]);
    }
}
