use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketplace role chosen during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Worker,
    Pump,
    Admin,
}

impl Role {
    /// Roles in the order the role picker shows them.
    pub const ALL: [Self; 4] = [Self::Customer, Self::Worker, Self::Pump, Self::Admin];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Worker => "worker",
            Self::Pump => "pump",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Worker => "Service Worker",
            Self::Pump => "Petrol Pump",
            Self::Admin => "Admin",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Customer => "Book services & get help",
            Self::Worker => "Provide services & earn",
            Self::Pump => "Manage emergency requests",
            Self::Admin => "Manage platform",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.id() == id)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_lookup() {
        for role in Role::ALL {
            assert_eq!(Role::from_id(role.id()), Some(role));
        }
        assert_eq!(Role::from_id("none"), None);
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Role::Pump).unwrap();
        assert_eq!(json, "\"pump\"");
        let role: Role = serde_json::from_str("\"worker\"").unwrap();
        assert_eq!(role, Role::Worker);
    }
}
