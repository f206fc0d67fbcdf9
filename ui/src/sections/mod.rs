mod chart;
pub use chart::PerformanceChart;

mod details;
pub use details::PersonDetails;

mod export;
pub use export::ExportLink;

mod filters;
pub use filters::FilterPanel;

mod summary;
pub use summary::SummaryTable;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::core::{platform, ReportConfig, ReportError};
use crate::i18n;
use crate::report::{FilterEvent, Projection, ReportDocument, ReportEngine, Snapshot};

/// Active language for a report section.
///
/// Reads the global language code signal when the launcher provides one, so
/// the calling component re-renders on a switch even though its session
/// prop is unchanged.
pub fn use_report_language() -> String {
    let code = try_use_context::<Signal<String>>();
    resolve_language(code.map(|code| code()))
}

fn resolve_language(code: Option<String>) -> String {
    code.filter(|code| !code.is_empty())
        .unwrap_or_else(i18n::current_language)
}

/// Engine plus the document it keeps in sync. Lives in one signal so a
/// pass always updates every section together.
#[derive(Debug, Clone)]
pub struct ReportSession {
    pub engine: ReportEngine,
    pub document: ReportDocument,
    pub last: Projection,
}

impl ReportSession {
    pub fn new(snapshot: Snapshot, config: &ReportConfig) -> Self {
        let mut document =
            ReportDocument::for_snapshot(&snapshot).with_export_link(config.export_base_url.clone());
        if config.chart {
            document = document.with_chart();
        } else {
            error!(err = %ReportError::MissingChartSurface, "chart not initialised");
        }

        let mut engine = ReportEngine::new(snapshot);
        let last = engine.start(&mut document);
        info!(
            people = engine.snapshot().person_list().len(),
            months = engine.snapshot().month_count(),
            "report filters initialised"
        );

        Self {
            engine,
            document,
            last,
        }
    }

    pub fn dispatch(&mut self, event: FilterEvent) -> &Projection {
        self.last = self.engine.dispatch(event, &mut self.document);
        &self.last
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.engine.snapshot()
    }
}

/// Outcome of reading the page: a live session or the reason there is none.
#[derive(Debug, Clone)]
pub enum ReportState {
    Ready(ReportSession),
    Unavailable(String),
}

impl ReportState {
    pub fn load(config: &ReportConfig) -> Self {
        match platform::load_snapshot() {
            Ok(snapshot) => Self::Ready(ReportSession::new(snapshot, config)),
            Err(err) => {
                if err.is_missing_collaborator() {
                    error!(%err, "report interactivity not initialised");
                } else {
                    error!(%err, "cannot read report data");
                }
                Self::Unavailable(err.to_string())
            }
        }
    }
}
