pub mod foundation;
pub mod language_select;
pub mod notice_toast;
pub mod page_header;
pub mod stat_tiles;
pub mod status_badge;
pub mod tab_bar;
pub mod theme_toggle;

pub use language_select::LanguageSelect;
pub use notice_toast::NoticeToast;
pub use page_header::PageHeader;
pub use stat_tiles::StatTiles;
pub use status_badge::StatusBadge;
pub use tab_bar::TabBar;
pub use theme_toggle::ThemeToggle;
