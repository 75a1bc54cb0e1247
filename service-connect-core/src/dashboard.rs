//! Tab and action state for the worker, pump and admin dashboards.
use crate::notice::Notice;

pub const JOB_ACCEPTED: &str = "Job accepted! Navigate to customer location.";
pub const JOB_DECLINED: &str = "Job declined";
pub const PUMP_ACCEPTED: &str = "Request accepted! Assigning service vehicle...";
pub const PUMP_DECLINED: &str = "Request declined";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkerTab {
    #[default]
    Requests,
    Active,
    Completed,
}

impl WorkerTab {
    pub const ALL: [Self; 3] = [Self::Requests, Self::Active, Self::Completed];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Requests => "New Requests",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PumpTab {
    #[default]
    Incoming,
    Active,
    Completed,
}

impl PumpTab {
    pub const ALL: [Self; 3] = [Self::Incoming, Self::Active, Self::Completed];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Incoming => "Incoming",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Workers,
    Pumps,
    Analytics,
}

impl AdminTab {
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Users,
        Self::Workers,
        Self::Pumps,
        Self::Analytics,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Users => "Users",
            Self::Workers => "Workers",
            Self::Pumps => "Pumps",
            Self::Analytics => "Analytics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerDashboard {
    pub available: bool,
    pub tab: WorkerTab,
}

impl Default for WorkerDashboard {
    fn default() -> Self {
        Self {
            available: true,
            tab: WorkerTab::default(),
        }
    }
}

impl WorkerDashboard {
    pub fn toggle_availability(&mut self) {
        self.available = !self.available;
        log::info!("worker availability: {}", self.availability_label());
    }

    #[must_use]
    pub const fn availability_label(&self) -> &'static str {
        if self.available { "Available" } else { "Offline" }
    }

    /// The offline banner only shows on the requests tab.
    #[must_use]
    pub const fn shows_offline_banner(&self) -> bool {
        !self.available && matches!(self.tab, WorkerTab::Requests)
    }
}

/// Accept a worker job request. The request list itself is sample data and
/// does not change.
#[must_use]
pub fn accept_job(request_id: u32) -> Notice {
    log::info!("job {request_id} accepted");
    Notice::success(JOB_ACCEPTED)
}

#[must_use]
pub fn decline_job(request_id: u32) -> Notice {
    log::info!("job {request_id} declined");
    Notice::info(JOB_DECLINED)
}

#[must_use]
pub fn accept_pump_request(request_id: u32) -> Notice {
    log::info!("pump request {request_id} accepted");
    Notice::success(PUMP_ACCEPTED)
}

#[must_use]
pub fn decline_pump_request(request_id: u32) -> Notice {
    log::info!("pump request {request_id} declined");
    Notice::info(PUMP_DECLINED)
}
