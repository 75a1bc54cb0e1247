pub mod admin_dashboard;
pub mod customer_home;
pub mod emergency_request;
pub mod live_tracking;
pub mod onboarding;
pub mod pump_dashboard;
pub mod service_booking;
pub mod worker_dashboard;
pub mod worker_onboarding;
