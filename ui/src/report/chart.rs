//! Chart dataset model and the selection-driven synchroniser.
//!
//! Series are tagged by [`SeriesRole`], so the fixed total/target lines are
//! recognised by type rather than by their (localised) label.

use super::selection::Selection;
use super::snapshot::Snapshot;

pub const PALETTE: [&str; 10] = [
    "#3f51b5", "#e53935", "#fb8c00", "#43a047", "#1e88e5", "#8e24aa", "#00897b", "#fdd835",
    "#d81b60", "#6d4c41",
];

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesRole {
    Total,
    Target,
    Person(String),
}

impl SeriesRole {
    pub fn person(&self) -> Option<&str> {
        match self {
            Self::Person(name) => Some(name.as_str()),
            Self::Total | Self::Target => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub role: SeriesRole,
    pub values: Vec<f64>,
    pub hidden: bool,
    pub color: &'static str,
}

/// Receives full dataset replacements. Each call is one redraw.
pub trait ChartRenderer {
    fn update(&mut self, series: &[Series]);
}

/// Chart state as constructed at page load: every series visible, aggregate
/// equal to the server total.
pub fn initial_series(snapshot: &Snapshot) -> Vec<Series> {
    let mut series = Vec::with_capacity(snapshot.person_list().len() + 2);
    series.push(Series {
        role: SeriesRole::Total,
        values: snapshot.total_series().to_vec(),
        hidden: false,
        color: PALETTE[0],
    });
    series.push(Series {
        role: SeriesRole::Target,
        values: snapshot.target_series().to_vec(),
        hidden: false,
        color: PALETTE[1],
    });

    for (offset, (person, values)) in snapshot.chart_data.datasets.persons.iter().enumerate() {
        series.push(Series {
            role: SeriesRole::Person(person.clone()),
            values: values.clone(),
            hidden: false,
            color: PALETTE[(offset + 2) % PALETTE.len()],
        });
    }

    series
}

/// Per-month sum of the selected people's series.
///
/// People without a series are skipped; a short series contributes nothing
/// past its end.
pub fn aggregate(snapshot: &Snapshot, selection: &Selection) -> Vec<f64> {
    let mut totals = vec![0.0; snapshot.month_count()];
    for person in selection.iter() {
        let Some(values) = snapshot.person_series(person) else {
            continue;
        };
        for (slot, value) in totals.iter_mut().zip(values) {
            *slot += *value;
        }
    }
    totals
}

/// Recompute the aggregate line and person visibility in place.
pub fn sync_series(series: &mut [Series], snapshot: &Snapshot, selection: &Selection) {
    let totals = aggregate(snapshot, selection);
    for entry in series.iter_mut() {
        match &entry.role {
            SeriesRole::Total => {
                entry.values = totals.clone();
                entry.hidden = false;
            }
            SeriesRole::Target => entry.hidden = false,
            SeriesRole::Person(name) => entry.hidden = !selection.contains(name),
        }
    }
}

/// Sync then push the result to the renderer.
pub fn sync_chart<R: ChartRenderer + ?Sized>(
    renderer: &mut R,
    series: &mut [Series],
    snapshot: &Snapshot,
    selection: &Selection,
) {
    sync_series(series, snapshot, selection);
    renderer.update(series);
}
