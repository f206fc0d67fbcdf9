//! Shared UI crate for the sales report. The filter engine, the report
//! sections and localisation live here; platform crates only launch it.

pub mod core;
pub mod i18n;
pub mod report;
pub mod sections;
pub mod views;

pub mod components {
    // Localized page header with the locale switcher (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}
