//! Page-level configuration (`window.reportConfig`).

use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPORT_BASE_URL: &str = "/report/pdf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    /// Target of the PDF export link before any filter is appended.
    pub export_base_url: String,
    /// Preferred UI language; the browser's list is used when absent.
    pub locale: Option<String>,
    /// Whether the page has a chart surface at all.
    pub chart: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            export_base_url: DEFAULT_EXPORT_BASE_URL.to_string(),
            locale: None,
            chart: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: ReportConfig =
            serde_json::from_str(r#"{ "exportBaseUrl": "/runs/abc/pdf" }"#).unwrap();
        assert_eq!(config.export_base_url, "/runs/abc/pdf");
        assert!(config.chart);
        assert_eq!(config.locale, None);
    }

    #[test]
    fn chart_can_be_disabled() {
        let config: ReportConfig =
            serde_json::from_str(r#"{ "chart": false, "locale": "fa-IR" }"#).unwrap();
        assert!(!config.chart);
        assert_eq!(config.locale.as_deref(), Some("fa-IR"));
        assert_eq!(config.export_base_url, DEFAULT_EXPORT_BASE_URL);
    }
}
