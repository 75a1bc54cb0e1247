use anyhow::Result;
use service_connect_core::{Catalog, SimulationConfig};

mod forms;
mod gate;
mod timers;

/// Shared inputs for every scenario run.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioCtx {
    pub config: SimulationConfig,
    pub catalog: &'static Catalog,
}

impl ScenarioCtx {
    #[must_use]
    pub fn load_default() -> Self {
        Self {
            config: *SimulationConfig::default_config(),
            catalog: Catalog::default_catalog(),
        }
    }
}

pub type ScenarioFn = fn(&ScenarioCtx) -> Result<()>;

#[derive(Clone, Copy, Debug)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    run: ScenarioFn,
}

impl TestScenario {
    pub(crate) const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        run: ScenarioFn,
    ) -> Self {
        Self {
            key,
            name,
            description,
            run,
        }
    }

    /// Run once against `ctx`.
    ///
    /// # Errors
    ///
    /// The first expectation the run violates.
    pub fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        (self.run)(ctx)
    }
}

const SCENARIOS: &[TestScenario] = &[
    TestScenario::new(
        "onboarding-gate",
        "Onboarding Gate",
        "Anonymous visitors only see onboarding; a customer login opens the home view",
        gate::onboarding_gate,
    ),
    TestScenario::new(
        "worker-login",
        "Worker Login",
        "Worker login reaches the dashboard and registration, nothing else",
        gate::worker_login,
    ),
    TestScenario::new(
        "phone-validation",
        "Phone Validation",
        "Login needs ten characters; input is truncated and never digit-checked",
        gate::phone_validation,
    ),
    TestScenario::new(
        "role-isolation",
        "Role Isolation",
        "Every role renders only its own views and keeps its first role",
        gate::role_isolation,
    ),
    TestScenario::new(
        "worker-wizard",
        "Worker Wizard",
        "Registration stepper clamps at both ends and tracks progress",
        forms::worker_wizard,
    ),
    TestScenario::new(
        "emergency-validation",
        "Emergency Validation",
        "Emergency submit needs a type and a description",
        forms::emergency_validation,
    ),
    TestScenario::new(
        "booking-flow",
        "Booking Flow",
        "Busy professionals are skipped and confirmation opens tracking",
        forms::booking_flow,
    ),
    TestScenario::new(
        "emergency-search",
        "Emergency Search",
        "Search progress climbs to 100% and settles on Found on schedule",
        timers::emergency_search,
    ),
    TestScenario::new(
        "search-unmount",
        "Search Unmount",
        "Leaving mid-search releases both search timers",
        timers::search_unmount,
    ),
    TestScenario::new(
        "tracking-unmount",
        "Tracking Unmount",
        "Tracking ticks while mounted and freezes after unmount",
        timers::tracking_unmount,
    ),
];

pub fn get_scenario(key: &str) -> Option<TestScenario> {
    SCENARIOS.iter().find(|s| s.key == key).copied()
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description)).collect()
}

pub fn scenario_keys() -> impl Iterator<Item = &'static str> {
    SCENARIOS.iter().map(|s| s.key)
}
