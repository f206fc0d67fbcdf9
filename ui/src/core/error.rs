//! Error taxonomy for report initialisation.
//!
//! Nothing here is fatal: callers log the error and leave the affected
//! feature uninitialised while the rest of the page keeps working.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report data object not found on the page")]
    MissingSnapshot,

    #[error("chart surface not available")]
    MissingChartSurface,

    #[error("report data is malformed: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),

    #[error("host environment error: {0}")]
    Host(String),
}

impl ReportError {
    /// Missing anchors disable a feature; everything else is a data problem.
    pub fn is_missing_collaborator(&self) -> bool {
        matches!(self, Self::MissingSnapshot | Self::MissingChartSurface)
    }
}
