use crate::router::Route;
use service_connect_core::{AppPath, Resolution, Session, resolve};

/// Resolve the active route against the session. Before the router has a
/// route the root is assumed.
#[must_use]
pub fn resolve_route(session: &Session, route: Option<&Route>) -> Resolution {
    let path = route.map_or(AppPath::Root, AppPath::from);
    resolve(session, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use service_connect_core::Role;
    use service_connect_core::routing::{CustomerView, PumpView, View};

    #[test]
    fn anonymous_sessions_only_see_onboarding() {
        let session = Session::new();
        assert_eq!(
            resolve_route(&session, None),
            Resolution::Render(View::Onboarding)
        );
        assert_eq!(
            resolve_route(&session, Some(&Route::Emergency)),
            Resolution::Redirect(AppPath::Root)
        );
    }

    #[test]
    fn not_found_redirects_home_for_every_role() {
        for role in Role::ALL {
            let session = Session::Authenticated { role };
            assert_eq!(
                resolve_route(&session, Some(&Route::NotFound)),
                Resolution::Redirect(AppPath::Root)
            );
        }
    }

    #[test]
    fn routes_resolve_to_role_views() {
        let customer = Session::Authenticated {
            role: Role::Customer,
        };
        assert_eq!(
            resolve_route(
                &customer,
                Some(&Route::Tracking {
                    booking_id: "2".into()
                })
            ),
            Resolution::Render(View::Customer(CustomerView::LiveTracking {
                booking_id: "2".into()
            }))
        );
        let pump = Session::Authenticated { role: Role::Pump };
        assert_eq!(
            resolve_route(&pump, Some(&Route::Home)),
            Resolution::Render(View::Pump(PumpView::Dashboard))
        );
        assert_eq!(
            resolve_route(&pump, Some(&Route::WorkerOnboard)),
            Resolution::Redirect(AppPath::Root)
        );
    }
}
