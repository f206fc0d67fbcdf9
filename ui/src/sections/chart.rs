use dioxus::prelude::*;

use crate::{
    core::format,
    report::{ChartFrame, SeriesRole},
    sections::{use_report_language, ReportSession},
    t,
};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 320.0;
const PAD_LEFT: f64 = 88.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 36.0;
const TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlotLine {
    pub role: SeriesRole,
    pub color: &'static str,
    pub points: Vec<PlotPoint>,
}

impl PlotLine {
    fn points_attr(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn stroke_width(&self) -> &'static str {
        match self.role {
            SeriesRole::Total => "3",
            SeriesRole::Target => "2",
            SeriesRole::Person(_) => "1.5",
        }
    }

    fn dash(&self) -> &'static str {
        match self.role {
            SeriesRole::Target => "5 5",
            _ => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartGeometry {
    /// Draw order: people first, then target, total last (on top).
    pub lines: Vec<PlotLine>,
    /// (y, value) for each horizontal grid line.
    pub ticks: Vec<(f64, f64)>,
    /// (x, label) per month.
    pub columns: Vec<(f64, String)>,
}

/// Project the visible series onto the SVG canvas.
pub(crate) fn chart_geometry(frame: &ChartFrame, months: &[String]) -> ChartGeometry {
    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let n = months.len();

    let x_at = |idx: usize| {
        if n <= 1 {
            PAD_LEFT + plot_w / 2.0
        } else {
            PAD_LEFT + plot_w * idx as f64 / (n - 1) as f64
        }
    };

    let max = frame
        .series
        .iter()
        .filter(|s| !s.hidden)
        .flat_map(|s| s.values.iter().take(n).copied())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let max = if max > 0.0 { max } else { 1.0 };
    let y_at = |value: f64| PAD_TOP + plot_h * (1.0 - value.max(0.0) / max);

    let mut lines: Vec<PlotLine> = frame
        .series
        .iter()
        .filter(|s| !s.hidden)
        .map(|s| PlotLine {
            role: s.role.clone(),
            color: s.color,
            points: s
                .values
                .iter()
                .take(n)
                .enumerate()
                .map(|(idx, value)| PlotPoint {
                    x: x_at(idx),
                    y: y_at(*value),
                    value: *value,
                })
                .collect(),
        })
        .collect();
    lines.sort_by_key(|line| match line.role {
        SeriesRole::Person(_) => 0,
        SeriesRole::Target => 1,
        SeriesRole::Total => 2,
    });

    let ticks = (0..=TICKS)
        .map(|step| {
            let value = max * step as f64 / TICKS as f64;
            (y_at(value), value)
        })
        .collect();

    let columns = months
        .iter()
        .enumerate()
        .map(|(idx, label)| (x_at(idx), label.clone()))
        .collect();

    ChartGeometry {
        lines,
        ticks,
        columns,
    }
}

fn series_label(role: &SeriesRole) -> String {
    match role {
        SeriesRole::Total => t!("chart-total-label"),
        SeriesRole::Target => t!("chart-target-label"),
        SeriesRole::Person(name) => name.clone(),
    }
}

#[component]
pub fn PerformanceChart(session: Signal<ReportSession>) -> Element {
    let hovered = use_signal(|| Option::<String>::None);
    let lang = use_report_language();

    let (frame, months) = {
        let state = session.read();
        (
            state.document.chart.clone(),
            state.snapshot().months().to_vec(),
        )
    };

    let Some(frame) = frame else {
        return rsx! {
            section { class: "report-card report-chart",
                div { class: "report-card__header", h2 { {t!("chart-heading")} } }
                p { class: "report-card__placeholder", {t!("chart-unavailable")} }
            }
        };
    };

    let geometry = chart_geometry(&frame, &months);
    let legend: Vec<(String, &'static str, bool)> = frame
        .series
        .iter()
        .map(|s| (series_label(&s.role), s.color, s.hidden))
        .collect();
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let grid_x1 = format!("{PAD_LEFT}");
    let grid_x2 = format!("{}", WIDTH - PAD_RIGHT);
    let tick_x = format!("{}", PAD_LEFT - 8.0);
    let month_y = format!("{}", HEIGHT - 10.0);

    let ticks: Vec<(String, String, String)> = geometry
        .ticks
        .iter()
        .map(|(y, value)| {
            (
                format!("{y:.1}"),
                format!("{:.1}", y + 4.0),
                format::format_amount_for(*value, &lang),
            )
        })
        .collect();
    let columns: Vec<(String, String)> = geometry
        .columns
        .iter()
        .map(|(x, label)| (format!("{x:.1}"), format::localize_digits(label, &lang)))
        .collect();

    rsx! {
        section { class: "report-card report-chart",
            div { class: "report-card__header",
                h2 { {t!("chart-heading")} }
            }

            if months.is_empty() {
                p { class: "report-card__placeholder", {t!("chart-empty")} }
            } else {
                ul { class: "report-chart__legend",
                    for (label, color, hidden) in legend.into_iter() {
                        li {
                            class: if hidden { "report-chart__legend-item report-chart__legend-item--hidden" } else { "report-chart__legend-item" },
                            span { class: "report-chart__swatch", style: "background:{color}" }
                            "{label}"
                        }
                    }
                }

                svg {
                    class: "report-chart__canvas",
                    view_box: "{view_box}",

                    for (y, label_y, amount) in ticks.into_iter() {
                        line {
                            class: "report-chart__grid",
                            x1: "{grid_x1}",
                            x2: "{grid_x2}",
                            y1: "{y}",
                            y2: "{y}",
                        }
                        text {
                            class: "report-chart__tick",
                            x: "{tick_x}",
                            y: "{label_y}",
                            text_anchor: "end",
                            "{amount}"
                        }
                    }

                    for (x, label) in columns.into_iter() {
                        text {
                            class: "report-chart__month",
                            x: "{x}",
                            y: "{month_y}",
                            text_anchor: "middle",
                            "{label}"
                        }
                    }

                    for plot in geometry.lines.iter() {
                        polyline {
                            fill: "none",
                            stroke: plot.color,
                            stroke_width: plot.stroke_width(),
                            stroke_dasharray: plot.dash(),
                            points: plot.points_attr(),
                        }
                        for point in plot.points.iter() {
                            {render_point(plot, point, &lang, hovered)}
                        }
                    }
                }

                p { class: "report-chart__tooltip",
                    if let Some(text) = hovered() {
                        "{text}"
                    }
                }
            }
        }
    }
}

fn render_point(
    line: &PlotLine,
    point: &PlotPoint,
    lang: &str,
    mut hovered: Signal<Option<String>>,
) -> Element {
    let tooltip = t!(
        "chart-tooltip",
        label = series_label(&line.role),
        amount = format::format_amount_for(point.value, lang)
    );
    let cx = format!("{:.1}", point.x);
    let cy = format!("{:.1}", point.y);

    rsx! {
        circle {
            cx: "{cx}",
            cy: "{cy}",
            r: "3",
            fill: line.color,
            onmouseenter: move |_| hovered.set(Some(tooltip.clone())),
            onmouseleave: move |_| hovered.set(None),
        }
    }
}
