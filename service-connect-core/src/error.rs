//! Error types shared by the view-state machines.
use thiserror::Error;

/// Client-side validation failure raised before an action is allowed to proceed.
///
/// These never abort anything: the view surfaces the message as a transient
/// notice and stays on the step that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Enter a 10-digit mobile number")]
    PhoneTooShort { len: usize },
    #[error("Select a role to continue")]
    RoleNotSelected,
    #[error("Please select emergency type and describe the issue")]
    IncompleteEmergency,
    #[error("Please select a worker and describe the problem")]
    IncompleteBooking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session is already authenticated as {0}")]
    AlreadyAuthenticated(crate::role::Role),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {name}: {field} must be greater than zero")]
    Zero {
        name: &'static str,
        field: &'static str,
    },
}
