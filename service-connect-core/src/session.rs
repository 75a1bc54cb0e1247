use crate::error::SessionError;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Who is using the app for the rest of this run.
///
/// A role can only exist on the authenticated variant, so "role set but not
/// authenticated" is unrepresentable. There is no transition back to
/// `Anonymous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { role: Role },
}

impl Session {
    #[must_use]
    pub const fn new() -> Self {
        Self::Anonymous
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { role } => Some(*role),
        }
    }

    /// Record the role picked at the end of onboarding.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyAuthenticated`] when a role was already
    /// selected; the existing role is kept.
    pub fn select_role(&mut self, role: Role) -> Result<(), SessionError> {
        match *self {
            Self::Anonymous => {
                log::info!("session authenticated as {role}");
                *self = Self::Authenticated { role };
                Ok(())
            }
            Self::Authenticated { role: current } => {
                log::warn!("ignoring role selection {role}; session already {current}");
                Err(SessionError::AlreadyAuthenticated(current))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_anonymous_without_role() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn role_selection_authenticates() {
        for role in Role::ALL {
            let mut session = Session::new();
            session.select_role(role).unwrap();
            assert!(session.is_authenticated());
            assert_eq!(session.role(), Some(role));
        }
    }

    #[test]
    fn second_selection_is_rejected_and_role_is_kept() {
        let mut session = Session::new();
        session.select_role(Role::Worker).unwrap();
        let err = session.select_role(Role::Admin).unwrap_err();
        assert_eq!(err, SessionError::AlreadyAuthenticated(Role::Worker));
        assert_eq!(session.role(), Some(Role::Worker));
        assert!(session.is_authenticated());
    }

    #[test]
    fn role_implies_authenticated_in_every_state() {
        let states = [
            Session::Anonymous,
            Session::Authenticated {
                role: Role::Customer,
            },
            Session::Authenticated { role: Role::Pump },
        ];
        for state in states {
            if state.role().is_some() {
                assert!(state.is_authenticated());
            }
        }
    }
}
