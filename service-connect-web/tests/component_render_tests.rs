use futures::executor::block_on;
use service_connect_core::catalog::{JobStatus, StatTile};
use service_connect_core::{Notice, Theme};
use service_connect_web::components::language_select::LanguageSelectProps;
use service_connect_web::components::notice_toast::NoticeToastProps;
use service_connect_web::components::page_header::PageHeaderProps;
use service_connect_web::components::stat_tiles::StatTilesProps;
use service_connect_web::components::status_badge::StatusBadgeProps;
use service_connect_web::components::tab_bar::TabBarProps;
use service_connect_web::components::theme_toggle::ThemeToggleProps;
use service_connect_web::components::{
    LanguageSelect, NoticeToast, PageHeader, StatTiles, StatusBadge, TabBar, ThemeToggle,
};
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, Classes, LocalServerRenderer};

#[test]
fn notice_toast_renders_only_with_a_notice() {
    service_connect_web::i18n::set_lang("en");
    let props = NoticeToastProps {
        notice: Some(Notice::success("Booking confirmed")),
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NoticeToast>::with_props(props).render());
    assert!(html.contains("Booking confirmed"));
    assert!(html.contains("alert-success"));
    assert!(html.contains("Dismiss"));

    let props = NoticeToastProps {
        notice: None,
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NoticeToast>::with_props(props).render());
    assert!(!html.contains("role=\"status\""));
}

#[test]
fn notice_toast_uses_error_styling() {
    service_connect_web::i18n::set_lang("en");
    let props = NoticeToastProps {
        notice: Some(Notice::error("Something went wrong")),
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NoticeToast>::with_props(props).render());
    assert!(html.contains("alert-error"));
}

#[test]
fn tab_bar_marks_the_active_tab() {
    let props = TabBarProps {
        labels: vec![AttrValue::from("One"), AttrValue::from("Two")],
        active: 1,
        on_select: Callback::noop(),
        class: Classes::new(),
    };
    let html = block_on(LocalServerRenderer::<TabBar>::with_props(props).render());
    assert_eq!(html.matches("tab-active").count(), 1);
    assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
    let active_at = html.find("tab-active").expect("active tab");
    let two_at = html.find("Two").expect("second label");
    assert!(active_at < two_at);
    assert!(html.find("One").expect("first label") < active_at);
}

#[test]
fn status_badge_colors_follow_status() {
    let html = block_on(
        LocalServerRenderer::<StatusBadge>::with_props(StatusBadgeProps {
            status: JobStatus::Completed,
        })
        .render(),
    );
    assert!(html.contains("badge-success"));
    assert!(html.contains("completed"));

    let html = block_on(
        LocalServerRenderer::<StatusBadge>::with_props(StatusBadgeProps {
            status: JobStatus::Active,
        })
        .render(),
    );
    assert!(html.contains("badge-error"));
}

#[test]
fn page_header_back_button_is_optional() {
    service_connect_web::i18n::set_lang("en");
    let props = PageHeaderProps {
        title: AttrValue::from("Live Tracking"),
        subtitle: Some(AttrValue::from("Booking #7")),
        on_back: Some(Callback::noop()),
        class: Classes::new(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<PageHeader>::with_props(props).render());
    assert!(html.contains("Live Tracking"));
    assert!(html.contains("Booking #7"));
    assert!(html.contains("aria-label=\"Back\""));

    let props = PageHeaderProps {
        title: AttrValue::from("Admin Console"),
        subtitle: None,
        on_back: None,
        class: Classes::new(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<PageHeader>::with_props(props).render());
    assert!(!html.contains("aria-label=\"Back\""));
}

#[test]
fn stat_tiles_render_label_and_value() {
    let props = StatTilesProps {
        tiles: vec![StatTile {
            label: "Jobs Today".into(),
            value: "8".into(),
            change: None,
        }],
        class: Classes::new(),
    };
    let html = block_on(LocalServerRenderer::<StatTiles>::with_props(props).render());
    assert!(html.contains("Jobs Today"));
    assert!(!html.contains("stat-desc"));
}

#[test]
fn theme_toggle_offers_the_other_theme() {
    service_connect_web::i18n::set_lang("en");
    let props = ThemeToggleProps {
        theme: Theme::Dark,
        on_toggle: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ThemeToggle>::with_props(props).render());
    assert!(html.contains("Switch to light mode"));
    assert!(html.contains("data-theme-toggle=\"dark\""));
}

#[test]
fn language_select_lists_locales() {
    service_connect_web::i18n::set_lang("en");
    let props = LanguageSelectProps {
        current_lang: "hi".to_string(),
        on_lang_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LanguageSelect>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("value=\"en\""));
    assert!(html.contains("value=\"hi\""));
}
