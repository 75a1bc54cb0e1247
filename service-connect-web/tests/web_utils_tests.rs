use service_connect_core::AppPath;
use service_connect_web::i18n::{self, fmt_pct, t, tr};
use service_connect_web::router::Route;
use std::collections::BTreeMap;
use yew_router::Routable;

#[test]
fn hindi_falls_back_to_english_for_missing_keys() {
    i18n::set_lang("hi");
    assert_eq!(i18n::current_lang(), "hi");
    assert_eq!(t("app.title"), "सर्विस कनेक्ट");
    assert_eq!(t("booking.confirm"), "Confirm Booking");

    let mut args = BTreeMap::new();
    args.insert("minutes", "7");
    assert_eq!(tr("tracking.eta", Some(&args)), "7 मिनट में पहुँच रहे हैं");
    i18n::set_lang("en");
    assert_eq!(tr("tracking.eta", Some(&args)), "Arriving in 7 min");
}

#[test]
fn unknown_locale_keeps_the_current_one() {
    i18n::set_lang("en");
    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "en");
    assert_eq!(t("onboarding.get_started"), "Get Started");
}

#[test]
fn plural_entries_pick_by_count() {
    i18n::set_lang("en");
    let mut args = BTreeMap::new();
    args.insert("count", "1");
    assert_eq!(tr("booking.jobs", Some(&args)), "1 job");
    args.insert("count", "234");
    assert_eq!(tr("booking.jobs", Some(&args)), "234 jobs");
}

#[test]
fn locales_list_english_first() {
    let codes: Vec<_> = i18n::locales().iter().map(|meta| meta.code).collect();
    assert_eq!(codes, vec!["en", "hi"]);
    assert_eq!(fmt_pct(100), "100%");
}

#[test]
fn route_paths_match_the_gate() {
    let cases = [
        ("/", Route::Home),
        (
            "/service/electrician",
            Route::Service {
                category: "electrician".into(),
            },
        ),
        ("/emergency", Route::Emergency),
        (
            "/tracking/emergency-1",
            Route::Tracking {
                booking_id: "emergency-1".into(),
            },
        ),
        ("/worker/onboard", Route::WorkerOnboard),
    ];
    for (path, route) in cases {
        assert_eq!(Route::recognize(path), Some(route.clone()));
        assert_eq!(AppPath::from(&route), AppPath::parse(path));
    }
}

#[test]
fn asset_paths_are_root_anchored() {
    assert_eq!(
        service_connect_web::paths::asset_path("static/assets/icon.svg"),
        "/static/assets/icon.svg"
    );
}
