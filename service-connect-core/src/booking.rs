use crate::catalog::NearbyWorker;
use crate::error::FormError;
use crate::routing::AppPath;

pub const BOOKING_CONFIRMED: &str = "Booking confirmed! Worker is on the way.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingTiming {
    #[default]
    Instant,
    Scheduled,
}

impl BookingTiming {
    pub const ALL: [Self; 2] = [Self::Instant, Self::Scheduled];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Instant => "Instant",
            Self::Scheduled => "Schedule",
        }
    }

    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Instant => "Within 30 mins",
            Self::Scheduled => "Pick date & time",
        }
    }
}

/// Local state of the `/service/:category` booking screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingForm {
    pub category: String,
    pub timing: BookingTiming,
    description: String,
    selected_worker: Option<String>,
}

impl BookingForm {
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn selected_worker(&self) -> Option<&str> {
        self.selected_worker.as_deref()
    }

    pub fn set_description(&mut self, text: &str) {
        self.description = text.to_string();
    }

    /// Select a professional. Busy workers are ignored; returns whether the
    /// selection changed.
    pub fn select_worker(&mut self, worker: &NearbyWorker) -> bool {
        if !worker.available {
            log::debug!("worker {} is busy; selection ignored", worker.id);
            return false;
        }
        self.selected_worker = Some(worker.id.clone());
        true
    }

    /// Confirm the booking, yielding the tracking path to open.
    ///
    /// # Errors
    ///
    /// [`FormError::IncompleteBooking`] without a selected worker or with an
    /// empty description.
    pub fn confirm(&self) -> Result<AppPath, FormError> {
        match self.selected_worker.as_deref() {
            Some(worker) if !self.description.is_empty() => {
                log::info!("booking {} with worker {worker}", self.category);
                Ok(AppPath::Tracking {
                    booking_id: worker.to_string(),
                })
            }
            _ => Err(FormError::IncompleteBooking),
        }
    }
}
