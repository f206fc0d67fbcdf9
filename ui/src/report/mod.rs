//! Filter-state synchronisation for the sales report page.
//!
//! Everything in here is platform-agnostic and free of Dioxus; the sections
//! under `crate::sections` render a [`ReportDocument`] and forward events to
//! the [`ReportEngine`].

pub mod chart;
pub mod document;
pub mod engine;
pub mod link;
pub mod selection;
pub mod snapshot;
pub mod visibility;

pub use chart::{ChartRenderer, Series, SeriesRole};
pub use document::{ChartFrame, ExportLink, ReportDocument, ReportSurface};
pub use engine::{FilterEvent, Projection, ReportEngine};
pub use selection::{PersonCheckbox, Selection};
pub use snapshot::Snapshot;
