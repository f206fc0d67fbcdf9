//! Immutable report data embedded by the server (`frontendData`).
//!
//! The wire shape mirrors what the report template embeds. Only
//! `personList` and `chartData` are required; the summary table and detail
//! sections degrade to empty when their blocks are absent. Cross-field
//! consistency (series lengths, person keys) is intentionally not checked;
//! the engine tolerates mismatches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub person_list: Vec<String>,
    pub chart_data: ChartData,
    #[serde(default)]
    pub overall_summary: Vec<SummaryRow>,
    #[serde(default)]
    pub person_monthly_report: BTreeMap<String, PersonMonthly>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Period labels; index alignment for every series.
    pub labels: Vec<String>,
    pub datasets: ChartDatasets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatasets {
    pub total_sales: Vec<f64>,
    pub targets: Vec<f64>,
    pub persons: BTreeMap<String, Vec<f64>>,
}

/// One row of the overall summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SummaryRow {
    pub person_name: String,
    #[serde(default)]
    pub commission_model: String,
    #[serde(default)]
    pub total_original_commission: f64,
    #[serde(default)]
    pub total_additional_bonus: f64,
    #[serde(default)]
    pub total_payable_commission: f64,
    #[serde(default)]
    pub total_paid_commission: f64,
    #[serde(default)]
    pub total_full_commission: f64,
    #[serde(default)]
    pub total_pending_commission: f64,
    #[serde(default)]
    pub remaining_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersonMonthly {
    #[serde(default)]
    pub months: BTreeMap<String, MonthDetail>,
    #[serde(default)]
    pub total_unpaid: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MonthDetail {
    #[serde(default)]
    pub bracket_base: f64,
    #[serde(default)]
    pub original_commission: f64,
    #[serde(default)]
    pub additional_bonus: f64,
    #[serde(default)]
    pub total_commission: f64,
    #[serde(default)]
    pub total_net_sales: f64,
}

impl Snapshot {
    pub fn from_json(raw: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ReportError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Build a snapshot from bare series; handy for hosts that only have chart data.
    pub fn from_series(
        months: Vec<String>,
        total_series: Vec<f64>,
        target_series: Vec<f64>,
        person_series: Vec<(String, Vec<f64>)>,
    ) -> Self {
        let person_list = person_series.iter().map(|(name, _)| name.clone()).collect();
        Self {
            person_list,
            chart_data: ChartData {
                labels: months,
                datasets: ChartDatasets {
                    total_sales: total_series,
                    targets: target_series,
                    persons: person_series.into_iter().collect(),
                },
            },
            overall_summary: Vec::new(),
            person_monthly_report: BTreeMap::new(),
        }
    }

    pub fn months(&self) -> &[String] {
        &self.chart_data.labels
    }

    pub fn month_count(&self) -> usize {
        self.chart_data.labels.len()
    }

    pub fn total_series(&self) -> &[f64] {
        &self.chart_data.datasets.total_sales
    }

    pub fn target_series(&self) -> &[f64] {
        &self.chart_data.datasets.targets
    }

    pub fn person_series(&self, person: &str) -> Option<&[f64]> {
        self.chart_data
            .datasets
            .persons
            .get(person)
            .map(Vec::as_slice)
    }

    pub fn person_list(&self) -> &[String] {
        &self.person_list
    }

    pub fn person_monthly(&self, person: &str) -> Option<&PersonMonthly> {
        self.person_monthly_report.get(person)
    }
}
