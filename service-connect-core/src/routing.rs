//! Session-gated path resolution.
//!
//! Each role owns a statically known set of views. Only the active role's set
//! is reachable; everything else falls back to the root path, which renders
//! that role's home (or onboarding when nobody is signed in).
use crate::role::Role;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A navigable location inside the app.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppPath {
    Root,
    Service { category: String },
    Emergency,
    Tracking { booking_id: String },
    WorkerOnboard,
    Other(String),
}

impl AppPath {
    /// Parse a URL path. Parameters are opaque; only emptiness is rejected.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };
        match segments.as_slice() {
            [] => Self::Root,
            ["service", category] if !category.is_empty() => Self::Service {
                category: (*category).to_string(),
            },
            ["emergency"] => Self::Emergency,
            ["tracking", booking_id] if !booking_id.is_empty() => Self::Tracking {
                booking_id: (*booking_id).to_string(),
            },
            ["worker", "onboard"] => Self::WorkerOnboard,
            _ => Self::Other(path.to_string()),
        }
    }

    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Service { category } => format!("/service/{category}"),
            Self::Emergency => "/emergency".to_string(),
            Self::Tracking { booking_id } => format!("/tracking/{booking_id}"),
            Self::WorkerOnboard => "/worker/onboard".to_string(),
            Self::Other(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerView {
    Home,
    ServiceBooking { category: String },
    EmergencyRequest,
    LiveTracking { booking_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerView {
    Dashboard,
    Onboarding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpView {
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Dashboard,
}

/// The single screen chosen for a `(session, path)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Onboarding,
    Customer(CustomerView),
    Worker(WorkerView),
    Pump(PumpView),
    Admin(AdminView),
}

impl View {
    /// Role whose view set contains this view; `None` for onboarding.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::Onboarding => None,
            Self::Customer(_) => Some(Role::Customer),
            Self::Worker(_) => Some(Role::Worker),
            Self::Pump(_) => Some(Role::Pump),
            Self::Admin(_) => Some(Role::Admin),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(View),
    Redirect(AppPath),
}

impl Resolution {
    #[must_use]
    pub const fn view(&self) -> Option<&View> {
        match self {
            Self::Render(view) => Some(view),
            Self::Redirect(_) => None,
        }
    }
}

fn customer_view(path: &AppPath) -> Option<CustomerView> {
    match path {
        AppPath::Root => Some(CustomerView::Home),
        AppPath::Service { category } => Some(CustomerView::ServiceBooking {
            category: category.clone(),
        }),
        AppPath::Emergency => Some(CustomerView::EmergencyRequest),
        AppPath::Tracking { booking_id } => Some(CustomerView::LiveTracking {
            booking_id: booking_id.clone(),
        }),
        AppPath::WorkerOnboard | AppPath::Other(_) => None,
    }
}

const fn worker_view(path: &AppPath) -> Option<WorkerView> {
    match path {
        AppPath::Root => Some(WorkerView::Dashboard),
        AppPath::WorkerOnboard => Some(WorkerView::Onboarding),
        _ => None,
    }
}

const fn pump_view(path: &AppPath) -> Option<PumpView> {
    match path {
        AppPath::Root => Some(PumpView::Dashboard),
        _ => None,
    }
}

const fn admin_view(path: &AppPath) -> Option<AdminView> {
    match path {
        AppPath::Root => Some(AdminView::Dashboard),
        _ => None,
    }
}

fn view_for(session: &Session, path: &AppPath) -> Option<View> {
    match session.role() {
        None => matches!(path, AppPath::Root).then_some(View::Onboarding),
        Some(Role::Customer) => customer_view(path).map(View::Customer),
        Some(Role::Worker) => worker_view(path).map(View::Worker),
        Some(Role::Pump) => pump_view(path).map(View::Pump),
        Some(Role::Admin) => admin_view(path).map(View::Admin),
    }
}

/// Pick the view for `path`, or the redirect that replaces it.
#[must_use]
pub fn resolve(session: &Session, path: &AppPath) -> Resolution {
    view_for(session, path).map_or_else(
        || {
            log::debug!("no view for {path} under {session:?}; redirecting to /");
            Resolution::Redirect(AppPath::Root)
        },
        Resolution::Render,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(role: Role) -> Session {
        Session::Authenticated { role }
    }

    #[test]
    fn parse_recognises_every_registered_path() {
        assert_eq!(AppPath::parse("/"), AppPath::Root);
        assert_eq!(AppPath::parse(""), AppPath::Root);
        assert_eq!(
            AppPath::parse("/service/plumber"),
            AppPath::Service {
                category: "plumber".into()
            }
        );
        assert_eq!(AppPath::parse("/emergency/"), AppPath::Emergency);
        assert_eq!(
            AppPath::parse("/tracking/emergency-1"),
            AppPath::Tracking {
                booking_id: "emergency-1".into()
            }
        );
        assert_eq!(AppPath::parse("/worker/onboard"), AppPath::WorkerOnboard);
        assert_eq!(
            AppPath::parse("/service"),
            AppPath::Other("/service".into())
        );
        assert_eq!(
            AppPath::parse("/admin/settings"),
            AppPath::Other("/admin/settings".into())
        );
    }

    #[test]
    fn to_path_matches_parse() {
        let paths = [
            AppPath::Root,
            AppPath::Service {
                category: "painter".into(),
            },
            AppPath::Emergency,
            AppPath::Tracking {
                booking_id: "2".into(),
            },
            AppPath::WorkerOnboard,
        ];
        for path in paths {
            assert_eq!(AppPath::parse(&path.to_path()), path);
        }
    }

    #[test]
    fn anonymous_session_only_reaches_onboarding() {
        let session = Session::Anonymous;
        assert_eq!(
            resolve(&session, &AppPath::Root),
            Resolution::Render(View::Onboarding)
        );
        for path in [
            AppPath::Emergency,
            AppPath::WorkerOnboard,
            AppPath::Other("/nope".into()),
        ] {
            assert_eq!(resolve(&session, &path), Resolution::Redirect(AppPath::Root));
        }
    }

    #[test]
    fn customer_routes_resolve() {
        let session = signed_in(Role::Customer);
        assert_eq!(
            resolve(&session, &AppPath::Root),
            Resolution::Render(View::Customer(CustomerView::Home))
        );
        assert_eq!(
            resolve(
                &session,
                &AppPath::Tracking {
                    booking_id: "1".into()
                }
            ),
            Resolution::Render(View::Customer(CustomerView::LiveTracking {
                booking_id: "1".into()
            }))
        );
        assert_eq!(
            resolve(&session, &AppPath::WorkerOnboard),
            Resolution::Redirect(AppPath::Root)
        );
    }

    #[test]
    fn other_roles_fall_back_to_their_home() {
        let worker = signed_in(Role::Worker);
        assert_eq!(
            resolve(&worker, &AppPath::WorkerOnboard),
            Resolution::Render(View::Worker(WorkerView::Onboarding))
        );
        assert_eq!(
            resolve(&worker, &AppPath::Emergency),
            Resolution::Redirect(AppPath::Root)
        );

        for role in [Role::Pump, Role::Admin] {
            let session = signed_in(role);
            let home = resolve(&session, &AppPath::Root);
            assert_eq!(home.view().and_then(View::role), Some(role));
            assert_eq!(
                resolve(
                    &session,
                    &AppPath::Service {
                        category: "x".into()
                    }
                ),
                Resolution::Redirect(AppPath::Root)
            );
        }
    }

    #[test]
    fn rendered_views_always_belong_to_the_session_role() {
        let paths = [
            AppPath::Root,
            AppPath::Service {
                category: "cleaner".into(),
            },
            AppPath::Emergency,
            AppPath::Tracking {
                booking_id: "b".into(),
            },
            AppPath::WorkerOnboard,
            AppPath::Other("/zzz".into()),
        ];
        for role in Role::ALL {
            let session = signed_in(role);
            for path in &paths {
                if let Resolution::Render(view) = resolve(&session, path) {
                    assert_eq!(view.role(), Some(role));
                }
            }
        }
    }
}
