use crate::error::FormError;
use crate::routing::AppPath;
use serde::{Deserialize, Serialize};

/// Booking id the "Track Live Location" button opens once help is found.
pub const EMERGENCY_BOOKING_ID: &str = "emergency-1";

pub const SEARCH_COMPLETE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyKind {
    Fuel,
    Engine,
    Puncture,
    Breakdown,
}

impl EmergencyKind {
    pub const ALL: [Self; 4] = [Self::Fuel, Self::Engine, Self::Puncture, Self::Breakdown];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Fuel => "fuel",
            Self::Engine => "engine",
            Self::Puncture => "puncture",
            Self::Breakdown => "breakdown",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmergencyStep {
    #[default]
    Select,
    /// Declared for a review screen that no transition enters.
    Confirm,
    Searching,
    Found,
}

/// Result of one search-progress tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTick {
    Progress(u8),
    /// Progress reached 100; the ticker should be cleared and the settle
    /// timeout started.
    Complete,
    /// Not searching; nothing changed.
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyRequest {
    kind: Option<EmergencyKind>,
    description: String,
    step: EmergencyStep,
    progress: u8,
    search_step: u8,
}

impl Default for EmergencyRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl EmergencyRequest {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_search_step(10)
    }

    /// A zero step is treated as 1 so a search always completes.
    #[must_use]
    pub const fn with_search_step(search_step: u8) -> Self {
        Self {
            kind: None,
            description: String::new(),
            step: EmergencyStep::Select,
            progress: 0,
            search_step: if search_step == 0 { 1 } else { search_step },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Option<EmergencyKind> {
        self.kind
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn step(&self) -> EmergencyStep {
        self.step
    }

    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    pub fn select_kind(&mut self, kind: EmergencyKind) {
        if self.step == EmergencyStep::Select {
            self.kind = Some(kind);
        }
    }

    pub fn set_description(&mut self, text: &str) {
        if self.step == EmergencyStep::Select {
            self.description = text.to_string();
        }
    }

    /// Check the form without sending it.
    ///
    /// The description only has to be non-empty; whitespace counts.
    ///
    /// # Errors
    ///
    /// [`FormError::IncompleteEmergency`] when the kind or description is
    /// missing.
    pub fn validate(&self) -> Result<EmergencyKind, FormError> {
        match self.kind {
            Some(kind) if !self.description.is_empty() => Ok(kind),
            _ => Err(FormError::IncompleteEmergency),
        }
    }

    /// Send the request and start searching. Outside `Select` this does
    /// nothing.
    ///
    /// # Errors
    ///
    /// See [`Self::validate`]. The step stays on `Select`.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.step != EmergencyStep::Select {
            return Ok(());
        }
        let kind = self.validate()?;
        log::info!("emergency request sent: {}", kind.id());
        self.step = EmergencyStep::Searching;
        self.progress = 0;
        Ok(())
    }

    pub fn tick_search(&mut self) -> SearchTick {
        if self.step != EmergencyStep::Searching {
            return SearchTick::Idle;
        }
        self.progress = self
            .progress
            .saturating_add(self.search_step)
            .min(SEARCH_COMPLETE);
        if self.progress >= SEARCH_COMPLETE {
            SearchTick::Complete
        } else {
            SearchTick::Progress(self.progress)
        }
    }

    /// Move to `Found` once the search has completed. Returns whether the
    /// step changed.
    pub fn settle(&mut self) -> bool {
        if self.step == EmergencyStep::Searching && self.progress >= SEARCH_COMPLETE {
            log::info!("emergency helper found");
            self.step = EmergencyStep::Found;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn tracking_path() -> AppPath {
        AppPath::Tracking {
            booking_id: EMERGENCY_BOOKING_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(kind: EmergencyKind, text: &str) -> EmergencyRequest {
        let mut request = EmergencyRequest::new();
        request.select_kind(kind);
        request.set_description(text);
        request
    }

    #[test]
    fn submit_requires_kind_and_description() {
        let mut request = EmergencyRequest::new();
        assert_eq!(request.submit(), Err(FormError::IncompleteEmergency));
        assert_eq!(request.step(), EmergencyStep::Select);

        request.select_kind(EmergencyKind::Fuel);
        assert_eq!(request.submit(), Err(FormError::IncompleteEmergency));
        assert_eq!(request.step(), EmergencyStep::Select);

        let mut request = EmergencyRequest::new();
        request.set_description("stuck on the highway");
        assert_eq!(request.submit(), Err(FormError::IncompleteEmergency));
        assert_eq!(request.step(), EmergencyStep::Select);
    }

    #[test]
    fn whitespace_description_is_accepted() {
        let mut request = filled(EmergencyKind::Engine, "   ");
        assert_eq!(request.validate(), Ok(EmergencyKind::Engine));
        assert_eq!(request.submit(), Ok(()));
        assert_eq!(request.step(), EmergencyStep::Searching);
    }

    #[test]
    fn search_progresses_in_steps_of_ten_to_completion() {
        let mut request = filled(EmergencyKind::Puncture, "flat tyre");
        request.submit().unwrap();
        for expected in (10..100).step_by(10) {
            assert_eq!(request.tick_search(), SearchTick::Progress(expected as u8));
        }
        assert_eq!(request.tick_search(), SearchTick::Complete);
        assert_eq!(request.progress(), 100);
        assert_eq!(request.tick_search(), SearchTick::Complete);
        assert_eq!(request.progress(), 100);
    }

    #[test]
    fn zero_search_step_still_completes() {
        let mut request = EmergencyRequest::with_search_step(0);
        request.select_kind(EmergencyKind::Fuel);
        request.set_description("dry");
        request.submit().unwrap();
        assert_eq!(request.tick_search(), SearchTick::Progress(1));
        let mut ticks = 1;
        while request.tick_search() != SearchTick::Complete {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 100);
        assert!(request.settle());
    }

    #[test]
    fn settle_only_after_completion() {
        let mut request = filled(EmergencyKind::Breakdown, "smoke");
        assert!(!request.settle());
        request.submit().unwrap();
        request.tick_search();
        assert!(!request.settle());
        while request.tick_search() != SearchTick::Complete {}
        assert!(request.settle());
        assert_eq!(request.step(), EmergencyStep::Found);
        assert_eq!(request.tick_search(), SearchTick::Idle);
    }

    #[test]
    fn inputs_are_frozen_once_searching() {
        let mut request = filled(EmergencyKind::Fuel, "empty tank");
        request.submit().unwrap();
        request.select_kind(EmergencyKind::Engine);
        request.set_description("changed");
        assert_eq!(request.kind(), Some(EmergencyKind::Fuel));
        assert_eq!(request.description(), "empty tank");
    }

    #[test]
    fn found_links_to_emergency_tracking() {
        assert_eq!(
            EmergencyRequest::tracking_path().to_path(),
            "/tracking/emergency-1"
        );
        assert_eq!(EmergencyKind::from_id("puncture"), Some(EmergencyKind::Puncture));
    }
}
