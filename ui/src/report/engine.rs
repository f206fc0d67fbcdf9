//! Filter engine: one synchronous recompute pass per UI event.
//!
//! Pass order is fixed: read selection, sync the select-all box, project
//! visibility, sync the chart, rebuild the export link.

use tracing::debug;

use super::chart::{self, Series};
use super::document::ReportSurface;
use super::link;
use super::selection::{self, Selection};
use super::snapshot::Snapshot;
use super::visibility::{self, VisibilityMap};

#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    Toggle { person: String, checked: bool },
    SelectAll(bool),
    /// Re-run the pass without touching any checkbox (startup).
    Refresh,
}

/// Everything one pass derived from (snapshot, selection).
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub selection: Selection,
    pub all_selected: bool,
    pub visibility: VisibilityMap,
    pub series: Vec<Series>,
    /// `None` when the page has no export link.
    pub export_href: Option<String>,
}

impl Projection {
    pub fn aggregate(&self) -> &[f64] {
        self.series
            .iter()
            .find(|s| s.role == chart::SeriesRole::Total)
            .map(|s| s.values.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone)]
pub struct ReportEngine {
    snapshot: Snapshot,
    series: Vec<Series>,
    passes: u64,
}

impl ReportEngine {
    pub fn new(snapshot: Snapshot) -> Self {
        let series = chart::initial_series(&snapshot);
        Self {
            snapshot,
            series,
            passes: 0,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Startup pass using whatever the checkboxes currently say.
    pub fn start<S: ReportSurface + ?Sized>(&mut self, surface: &mut S) -> Projection {
        self.dispatch(FilterEvent::Refresh, surface)
    }

    pub fn dispatch<S: ReportSurface + ?Sized>(
        &mut self,
        event: FilterEvent,
        surface: &mut S,
    ) -> Projection {
        match &event {
            FilterEvent::Toggle { person, checked } => {
                if !surface.set_checkbox(person, *checked) {
                    debug!(%person, "toggle for unknown person ignored");
                }
            }
            FilterEvent::SelectAll(checked) => surface.set_all_checkboxes(*checked),
            FilterEvent::Refresh => {}
        }
        self.recompute(surface)
    }

    fn recompute<S: ReportSurface + ?Sized>(&mut self, surface: &mut S) -> Projection {
        let selection = selection::read_selection(&surface.scan_checkboxes());
        let person_list = self.snapshot.person_list();

        let all_selected = selection::all_selected(&selection, person_list);
        surface.set_select_all(all_selected);

        let tags = surface.visibility_tags();
        let visibility = visibility::project(&selection, tags.iter().map(String::as_str));
        surface.apply_visibility(&visibility);

        match surface.chart_renderer() {
            Some(renderer) => {
                chart::sync_chart(renderer, &mut self.series, &self.snapshot, &selection)
            }
            None => chart::sync_series(&mut self.series, &self.snapshot, &selection),
        }

        let export_href = surface.export_base_url().map(|base| {
            let href = link::build_export_url(&base, &selection, person_list);
            surface.set_export_href(&href);
            href
        });

        self.passes += 1;
        debug!(
            pass = self.passes,
            selected = selection.len(),
            people = person_list.len(),
            "filters recomputed"
        );

        Projection {
            selection,
            all_selected,
            visibility,
            series: self.series.clone(),
            export_href,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::chart::SeriesRole;
    use crate::report::document::ReportDocument;
    use crate::report::snapshot::SummaryRow;

    const BASE: &str = "/report/pdf";

    fn snapshot() -> Snapshot {
        let mut snapshot = Snapshot::from_series(
            vec!["1403-01".into(), "1403-02".into()],
            vec![15.0, 35.0],
            vec![40.0, 40.0],
            vec![("Ali".into(), vec![10.0, 20.0]), ("Sara".into(), vec![5.0, 15.0])],
        );
        snapshot.overall_summary = ["Ali", "Sara"]
            .into_iter()
            .map(|name| SummaryRow {
                person_name: name.into(),
                ..SummaryRow::default()
            })
            .collect();
        snapshot
    }

    fn page(snapshot: &Snapshot) -> ReportDocument {
        ReportDocument::for_snapshot(snapshot)
            .with_chart()
            .with_export_link(BASE)
    }

    fn toggle(person: &str, checked: bool) -> FilterEvent {
        FilterEvent::Toggle {
            person: person.into(),
            checked,
        }
    }

    #[test]
    fn startup_pass_reproduces_server_totals() {
        let snap = snapshot();
        let mut doc = page(&snap);
        let mut engine = ReportEngine::new(snap.clone());

        let projection = engine.start(&mut doc);

        assert_eq!(projection.aggregate(), snap.total_series());
        assert!(projection.all_selected);
        assert_eq!(doc.select_all, Some(true));
        assert!(doc.is_visible("Ali") && doc.is_visible("Sara"));
        assert_eq!(doc.export_link.as_ref().unwrap().href, BASE);
        assert_eq!(doc.chart.as_ref().unwrap().revision, 1);
    }

    #[test]
    fn selecting_only_ali() {
        let snap = snapshot();
        let mut doc = page(&snap);
        let mut engine = ReportEngine::new(snap);
        engine.start(&mut doc);

        let projection = engine.dispatch(toggle("Sara", false), &mut doc);

        assert_eq!(projection.aggregate(), [10.0, 20.0]);
        assert!(doc.is_visible("Ali"));
        assert!(!doc.is_visible("Sara"));
        assert_eq!(doc.select_all, Some(false));
        assert_eq!(
            doc.export_link.as_ref().unwrap().href,
            format!("{BASE}?filter=Ali")
        );

        let frame = doc.chart.as_ref().unwrap();
        let sara = frame
            .series
            .iter()
            .find(|s| s.role == SeriesRole::Person("Sara".into()))
            .unwrap();
        assert!(sara.hidden);
        assert_eq!(frame.series[1].values, [40.0, 40.0]);
    }

    #[test]
    fn reselecting_everyone_restores_totals_and_link() {
        let snap = snapshot();
        let mut doc = page(&snap);
        let mut engine = ReportEngine::new(snap.clone());
        engine.start(&mut doc);
        engine.dispatch(toggle("Sara", false), &mut doc);

        let projection = engine.dispatch(toggle("Sara", true), &mut doc);

        assert_eq!(projection.aggregate(), snap.total_series());
        assert_eq!(projection.export_href.as_deref(), Some(BASE));
        assert_eq!(doc.select_all, Some(true));
    }

    #[test]
    fn empty_selection_hides_everything_but_exports_unfiltered() {
        let snap = snapshot();
        let mut doc = page(&snap);
        let mut engine = ReportEngine::new(snap);
        engine.start(&mut doc);

        engine.dispatch(toggle("Ali", false), &mut doc);
        let projection = engine.dispatch(toggle("Sara", false), &mut doc);

        assert_eq!(projection.aggregate(), [0.0, 0.0]);
        assert!(!doc.is_visible("Ali") && !doc.is_visible("Sara"));
        assert_eq!(doc.export_link.as_ref().unwrap().href, BASE);
        let frame = doc.chart.as_ref().unwrap();
        assert!(frame
            .series
            .iter()
            .filter(|s| s.role.person().is_some())
            .all(|s| s.hidden));
    }

    #[test]
    fn select_all_toggles_every_checkbox() {
        let snap = snapshot();
        let mut doc = page(&snap);
        let mut engine = ReportEngine::new(snap.clone());
        engine.start(&mut doc);

        let off = engine.dispatch(FilterEvent::SelectAll(false), &mut doc);
        assert!(off.selection.is_empty());
        assert_eq!(doc.select_all, Some(false));

        let on = engine.dispatch(FilterEvent::SelectAll(true), &mut doc);
        assert_eq!(on.selection.as_slice(), snap.person_list());
        assert_eq!(doc.select_all, Some(true));
    }

    #[test]
    fn missing_collaborators_are_skipped() {
        let snap = snapshot();
        let mut doc = ReportDocument::for_snapshot(&snap).without_select_all();
        let mut engine = ReportEngine::new(snap);

        let projection = engine.dispatch(toggle("Ali", false), &mut doc);

        assert_eq!(projection.export_href, None);
        assert_eq!(doc.select_all, None);
        assert!(doc.chart.is_none());
        assert_eq!(projection.aggregate(), [5.0, 15.0]);
        assert!(!doc.is_visible("Ali"));
    }

    #[test]
    fn repeated_person_in_list_still_counts_as_everyone() {
        let mut snap = snapshot();
        snap.person_list = vec!["Ali".into(), "Ali".into()];
        let mut doc = page(&snap);
        let mut engine = ReportEngine::new(snap);

        let projection = engine.start(&mut doc);

        assert!(projection.all_selected);
        assert_eq!(doc.select_all, Some(true));
        assert_eq!(projection.export_href.as_deref(), Some(BASE));

        let projection = engine.dispatch(toggle("Ali", false), &mut doc);
        assert!(projection.selection.is_empty());
        assert_eq!(projection.export_href.as_deref(), Some(BASE));
    }

    #[test]
    fn every_event_runs_exactly_one_pass() {
        let snap = snapshot();
        let mut doc = page(&snap);
        let mut engine = ReportEngine::new(snap);
        engine.start(&mut doc);
        engine.dispatch(toggle("Ali", false), &mut doc);
        engine.dispatch(toggle("Nobody", true), &mut doc);

        assert_eq!(engine.passes(), 3);
        assert_eq!(doc.chart.as_ref().unwrap().revision, 3);
    }
}
