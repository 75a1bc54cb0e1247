use crate::clock::Millis;
use crate::error::ConfigError;
use crate::tracking::TrackingProgress;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const SIMULATION_FILE: &str = "simulation.json";
const DEFAULT_SIMULATION_DATA: &str =
    include_str!("../../service-connect-web/static/assets/data/simulation.json");

/// Timings and step sizes for the simulated search and tracking flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_search_tick_ms")]
    pub search_tick_ms: Millis,
    #[serde(default = "default_search_step")]
    pub search_step: u8,
    #[serde(default = "default_search_settle_ms")]
    pub search_settle_ms: Millis,
    #[serde(default = "default_tracking_tick_ms")]
    pub tracking_tick_ms: Millis,
    #[serde(default = "default_tracking_step")]
    pub tracking_step: u8,
    #[serde(default = "default_tracking_initial_progress")]
    pub tracking_initial_progress: u8,
    #[serde(default = "default_tracking_initial_eta")]
    pub tracking_initial_eta_min: u32,
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: Millis,
}

const fn default_search_tick_ms() -> Millis {
    300
}
const fn default_search_step() -> u8 {
    10
}
const fn default_search_settle_ms() -> Millis {
    500
}
const fn default_tracking_tick_ms() -> Millis {
    3000
}
const fn default_tracking_step() -> u8 {
    5
}
const fn default_tracking_initial_progress() -> u8 {
    35
}
const fn default_tracking_initial_eta() -> u32 {
    12
}
const fn default_notice_ttl_ms() -> Millis {
    4000
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            search_tick_ms: default_search_tick_ms(),
            search_step: default_search_step(),
            search_settle_ms: default_search_settle_ms(),
            tracking_tick_ms: default_tracking_tick_ms(),
            tracking_step: default_tracking_step(),
            tracking_initial_progress: default_tracking_initial_progress(),
            tracking_initial_eta_min: default_tracking_initial_eta(),
            notice_ttl_ms: default_notice_ttl_ms(),
        }
    }
}

impl SimulationConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the JSON does not describe a config,
    /// and [`ConfigError::Zero`] if a step or tick period is zero.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            name: SIMULATION_FILE,
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// A zero search step never completes and a zero period never yields.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Zero`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = if self.search_step == 0 {
            "search_step"
        } else if self.search_tick_ms == 0 {
            "search_tick_ms"
        } else if self.tracking_tick_ms == 0 {
            "tracking_tick_ms"
        } else {
            return Ok(());
        };
        Err(ConfigError::Zero {
            name: SIMULATION_FILE,
            field,
        })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the bundled file is malformed.
    pub fn try_load_from_static() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_SIMULATION_DATA)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::try_load_from_static().unwrap_or_else(|err| {
            log::warn!("{err}; using built-in simulation timings");
            Self::default()
        })
    }

    #[must_use]
    pub fn default_config() -> &'static Self {
        static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::load_from_static)
    }

    /// Tracking state a freshly mounted live-tracking view starts from.
    #[must_use]
    pub const fn initial_tracking(&self) -> TrackingProgress {
        TrackingProgress::new(
            self.tracking_initial_progress,
            self.tracking_initial_eta_min,
            self.tracking_step,
        )
    }

    /// Virtual time from submit until the helper is found.
    #[must_use]
    pub fn search_duration_ms(&self) -> Millis {
        let ticks = u64::from(100_u8.div_ceil(self.search_step.max(1)));
        ticks * self.search_tick_ms + self.search_settle_ms
    }
}
