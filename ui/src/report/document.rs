//! The surface the filter engine reads from and writes to.
//!
//! [`ReportSurface`] is the only way the engine touches UI state.
//! [`ReportDocument`] is the in-memory implementation the Dioxus sections
//! render from; every optional collaborator (select-all box, chart, export
//! link) is an `Option` so a page without it simply skips that step.

use super::chart::{ChartRenderer, Series};
use super::selection::{self, PersonCheckbox};
use super::snapshot::Snapshot;
use super::visibility::VisibilityMap;

pub trait ReportSurface {
    /// Current checkbox states, in page order.
    fn scan_checkboxes(&self) -> Vec<PersonCheckbox>;
    /// Returns `false` when no checkbox carries `person`.
    fn set_checkbox(&mut self, person: &str, checked: bool) -> bool;
    fn set_all_checkboxes(&mut self, checked: bool);
    /// No-op when the page has no select-all control.
    fn set_select_all(&mut self, checked: bool);
    /// Person tags on every visibility-bearing element.
    fn visibility_tags(&self) -> Vec<String>;
    fn apply_visibility(&mut self, visibility: &VisibilityMap);
    fn chart_renderer(&mut self) -> Option<&mut dyn ChartRenderer>;
    fn export_base_url(&self) -> Option<String>;
    fn set_export_href(&mut self, href: &str);
}

/// Dataset currently drawn by the chart. `revision` bumps on every redraw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartFrame {
    pub series: Vec<Series>,
    pub revision: u64,
}

impl ChartRenderer for ChartFrame {
    fn update(&mut self, series: &[Series]) {
        self.series = series.to_vec();
        self.revision = self.revision.wrapping_add(1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLink {
    pub base_url: String,
    pub href: String,
}

impl ExportLink {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            href: base_url.clone(),
            base_url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDocument {
    pub checkboxes: Vec<PersonCheckbox>,
    pub select_all: Option<bool>,
    /// Summary table rows, one tag per row.
    pub row_tags: Vec<String>,
    /// Detail sections, one tag per section.
    pub section_tags: Vec<String>,
    pub visibility: VisibilityMap,
    pub chart: Option<ChartFrame>,
    pub export_link: Option<ExportLink>,
}

impl ReportDocument {
    /// Page layout for a snapshot: every person checked, select-all present.
    pub fn for_snapshot(snapshot: &Snapshot) -> Self {
        let row_tags = snapshot
            .overall_summary
            .iter()
            .map(|row| row.person_name.clone())
            .collect();
        let section_tags = snapshot
            .person_list()
            .iter()
            .filter(|person| snapshot.person_monthly(person).is_some())
            .cloned()
            .collect();

        Self {
            checkboxes: selection::checkboxes_for(snapshot.person_list()),
            select_all: Some(true),
            row_tags,
            section_tags,
            visibility: VisibilityMap::new(),
            chart: None,
            export_link: None,
        }
    }

    pub fn with_chart(mut self) -> Self {
        self.chart = Some(ChartFrame::default());
        self
    }

    pub fn with_export_link(mut self, base_url: impl Into<String>) -> Self {
        self.export_link = Some(ExportLink::new(base_url));
        self
    }

    pub fn without_select_all(mut self) -> Self {
        self.select_all = None;
        self
    }

    /// Elements are displayed until a pass says otherwise.
    pub fn is_visible(&self, person: &str) -> bool {
        self.visibility.get(person).copied().unwrap_or(true)
    }

    pub fn is_checked(&self, person: &str) -> bool {
        self.checkboxes
            .iter()
            .any(|cb| cb.person == person && cb.checked)
    }
}

impl ReportSurface for ReportDocument {
    fn scan_checkboxes(&self) -> Vec<PersonCheckbox> {
        self.checkboxes.clone()
    }

    fn set_checkbox(&mut self, person: &str, checked: bool) -> bool {
        selection::set_checked(&mut self.checkboxes, person, checked)
    }

    fn set_all_checkboxes(&mut self, checked: bool) {
        selection::set_all(&mut self.checkboxes, checked);
    }

    fn set_select_all(&mut self, checked: bool) {
        if let Some(state) = self.select_all.as_mut() {
            *state = checked;
        }
    }

    fn visibility_tags(&self) -> Vec<String> {
        self.row_tags
            .iter()
            .chain(self.section_tags.iter())
            .cloned()
            .collect()
    }

    fn apply_visibility(&mut self, visibility: &VisibilityMap) {
        self.visibility = visibility.clone();
    }

    fn chart_renderer(&mut self) -> Option<&mut dyn ChartRenderer> {
        self.chart
            .as_mut()
            .map(|frame| frame as &mut dyn ChartRenderer)
    }

    fn export_base_url(&self) -> Option<String> {
        self.export_link.as_ref().map(|link| link.base_url.clone())
    }

    fn set_export_href(&mut self, href: &str) {
        if let Some(link) = self.export_link.as_mut() {
            link.href = href.to_string();
        }
    }
}
