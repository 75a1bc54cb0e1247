/// Live-tracking progress bar and ETA.
///
/// Ticks forever while the view is mounted; reaching 100 % or 0 min changes
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingProgress {
    progress: u8,
    eta_minutes: u32,
    step: u8,
}

impl Default for TrackingProgress {
    fn default() -> Self {
        Self::new(35, 12, 5)
    }
}

impl TrackingProgress {
    #[must_use]
    pub const fn new(progress: u8, eta_minutes: u32, step: u8) -> Self {
        Self {
            progress: if progress > 100 { 100 } else { progress },
            eta_minutes,
            step,
        }
    }

    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub const fn eta_minutes(&self) -> u32 {
        self.eta_minutes
    }

    pub fn tick(&mut self) {
        self.progress = self.progress.saturating_add(self.step).min(100);
        self.eta_minutes = self.eta_minutes.saturating_sub(1);
    }
}
