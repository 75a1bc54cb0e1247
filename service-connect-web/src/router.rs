use service_connect_core::AppPath;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/service/:category")]
    Service { category: String },
    #[at("/emergency")]
    Emergency,
    #[at("/tracking/:booking_id")]
    Tracking { booking_id: String },
    #[at("/worker/onboard")]
    WorkerOnboard,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl From<&Route> for AppPath {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home => Self::Root,
            Route::Service { category } => Self::Service {
                category: category.clone(),
            },
            Route::Emergency => Self::Emergency,
            Route::Tracking { booking_id } => Self::Tracking {
                booking_id: booking_id.clone(),
            },
            Route::WorkerOnboard => Self::WorkerOnboard,
            // The gate redirects anything it does not know.
            Route::NotFound => Self::Other(route.to_path()),
        }
    }
}

impl From<&AppPath> for Route {
    fn from(path: &AppPath) -> Self {
        match path {
            AppPath::Root => Self::Home,
            AppPath::Service { category } => Self::Service {
                category: category.clone(),
            },
            AppPath::Emergency => Self::Emergency,
            AppPath::Tracking { booking_id } => Self::Tracking {
                booking_id: booking_id.clone(),
            },
            AppPath::WorkerOnboard => Self::WorkerOnboard,
            AppPath::Other(_) => Self::NotFound,
        }
    }
}
