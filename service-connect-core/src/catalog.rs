//! Bundled sample data rendered by every view.
//!
//! Display values (prices, distances, timestamps) stay preformatted strings;
//! nothing computes with them.
use crate::emergency::EmergencyKind;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const DEFAULT_CATALOG_DATA: &str =
    include_str!("../../service-connect-web/static/assets/data/catalog.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Pending,
    Active,
    InProgress,
    Completed,
}

impl JobStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyType {
    pub kind: EmergencyKind,
    pub name: String,
    pub short_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyWorker {
    pub id: String,
    pub name: String,
    pub rating: f32,
    pub jobs: u32,
    pub distance: String,
    pub price: String,
    #[serde(default = "default_true")]
    pub available: bool,
}

const fn default_true() -> bool {
    true
}

impl NearbyWorker {
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyPump {
    pub name: String,
    pub distance: String,
    pub eta: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentBooking {
    pub service: String,
    pub worker: String,
    pub status: JobStatus,
    #[serde(default)]
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTile {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub change: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    pub id: u32,
    pub customer: String,
    pub service: String,
    pub distance: String,
    pub price: String,
    pub description: String,
    #[serde(default)]
    pub urgent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveJob {
    pub customer: String,
    pub service: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedJob {
    pub customer: String,
    pub service: String,
    pub amount: String,
    pub rating: u8,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PumpRequest {
    pub id: u32,
    pub customer: String,
    pub phone: String,
    pub issue: String,
    pub location: String,
    pub eta: String,
    #[serde(default)]
    pub urgent: bool,
    pub description: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PumpActiveService {
    pub customer: String,
    pub issue: String,
    pub vehicle: String,
    pub status: String,
    pub eta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminEmergency {
    pub customer: String,
    pub issue: String,
    pub location: String,
    pub status: JobStatus,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub name: String,
    pub kind: String,
    pub category: String,
    pub submitted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminBooking {
    pub id: String,
    pub customer: String,
    pub worker: String,
    pub service: String,
    pub amount: String,
    pub status: JobStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedWorker {
    pub name: String,
    pub rating: f32,
    pub jobs: u32,
    pub distance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub service_address: String,
    #[serde(default)]
    pub categories: Vec<ServiceCategory>,
    #[serde(default)]
    pub emergency_types: Vec<EmergencyType>,
    #[serde(default)]
    pub nearby_workers: Vec<NearbyWorker>,
    #[serde(default)]
    pub nearby_pumps: Vec<NearbyPump>,
    #[serde(default)]
    pub recent_bookings: Vec<RecentBooking>,
    #[serde(default)]
    pub worker_stats: Vec<StatTile>,
    #[serde(default)]
    pub worker_requests: Vec<JobRequest>,
    #[serde(default)]
    pub worker_active: Vec<ActiveJob>,
    #[serde(default)]
    pub worker_completed: Vec<CompletedJob>,
    #[serde(default)]
    pub pump_stats: Vec<StatTile>,
    #[serde(default)]
    pub pump_incoming: Vec<PumpRequest>,
    #[serde(default)]
    pub pump_active: Vec<PumpActiveService>,
    #[serde(default)]
    pub pump_completed: Vec<CompletedJob>,
    #[serde(default)]
    pub admin_stats: Vec<StatTile>,
    #[serde(default)]
    pub admin_emergencies: Vec<AdminEmergency>,
    #[serde(default)]
    pub admin_verifications: Vec<Verification>,
    #[serde(default)]
    pub admin_bookings: Vec<AdminBooking>,
    #[serde(default)]
    pub tracked_worker: Option<TrackedWorker>,
    #[serde(default)]
    pub tracking_checklist: Vec<ChecklistItem>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the JSON cannot be parsed into a catalog.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            name: "catalog.json",
            source,
        })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the bundled file is malformed.
    pub fn try_load_from_static() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_CATALOG_DATA)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::try_load_from_static().unwrap_or_else(|err| {
            log::warn!("{err}; rendering without sample data");
            Self::default()
        })
    }

    #[must_use]
    pub fn default_catalog() -> &'static Self {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Self::load_from_static)
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    #[must_use]
    pub fn worker(&self, id: &str) -> Option<&NearbyWorker> {
        self.nearby_workers.iter().find(|worker| worker.id == id)
    }

    #[must_use]
    pub fn emergency_type(&self, kind: EmergencyKind) -> Option<&EmergencyType> {
        self.emergency_types.iter().find(|entry| entry.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = Catalog::try_load_from_static().unwrap();
        assert_eq!(catalog.categories.len(), 6);
        assert_eq!(catalog.nearby_workers.len(), 3);
        assert_eq!(catalog.tracking_checklist.len(), 5);
        for kind in EmergencyKind::ALL {
            assert!(catalog.emergency_type(kind).is_some(), "{kind:?} missing");
        }
    }

    #[test]
    fn lookups_by_id() {
        let catalog = Catalog::default_catalog();
        assert_eq!(catalog.category("plumber").map(|c| c.name.as_str()), Some("Plumber"));
        let busy = catalog.worker("3").unwrap();
        assert!(!busy.available);
        assert_eq!(busy.initial(), 'S');
        assert!(catalog.worker("99").is_none());
    }

    #[test]
    fn only_the_first_two_checklist_steps_are_done() {
        let catalog = Catalog::default_catalog();
        let done: Vec<bool> = catalog
            .tracking_checklist
            .iter()
            .map(|item| item.completed)
            .collect();
        assert_eq!(done, vec![true, true, false, false, false]);
    }

    #[test]
    fn empty_object_is_an_empty_catalog() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.categories.is_empty());
        assert!(catalog.tracked_worker.is_none());
    }
}
