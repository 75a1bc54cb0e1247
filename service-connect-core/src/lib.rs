//! Service Connect core
//!
//! Platform-agnostic view-state for the Service Connect marketplace front-end:
//! the role session and its path gate, the onboarding and registration
//! steppers, the emergency request machine, and the timer-driven search and
//! tracking simulations. No UI or browser dependencies live here.

pub mod booking;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod emergency;
pub mod error;
pub mod notice;
pub mod onboarding;
pub mod role;
pub mod routing;
pub mod session;
pub mod sim;
pub mod theme;
pub mod tracking;
pub mod worker_onboarding;

pub use booking::{BookingForm, BookingTiming};
pub use catalog::Catalog;
pub use clock::{Millis, SimClock, TimerHandle, TimerId};
pub use config::SimulationConfig;
pub use dashboard::{AdminTab, PumpTab, WorkerDashboard, WorkerTab};
pub use emergency::{EmergencyKind, EmergencyRequest, EmergencyStep, SearchTick};
pub use error::{ConfigError, FormError, SessionError};
pub use notice::{Notice, NoticeLevel};
pub use onboarding::{OnboardingFlow, OnboardingStep};
pub use role::Role;
pub use routing::{AppPath, Resolution, View, resolve};
pub use session::Session;
pub use sim::{SearchSimulation, TrackingSimulation};
pub use theme::Theme;
pub use tracking::TrackingProgress;
pub use worker_onboarding::{WorkerOnboarding, WorkerStep};
