use dioxus::prelude::*;

use crate::{
    core::format,
    report::snapshot::{MonthDetail, PersonMonthly},
    sections::{use_report_language, ReportSession},
    t,
};

#[derive(Clone)]
struct DetailEntry {
    person: String,
    visible: bool,
    report: PersonMonthly,
}

#[component]
pub fn PersonDetails(session: Signal<ReportSession>) -> Element {
    let lang = use_report_language();
    let entries: Vec<DetailEntry> = {
        let state = session.read();
        state
            .document
            .section_tags
            .iter()
            .filter_map(|person| {
                state.snapshot().person_monthly(person).map(|report| DetailEntry {
                    person: person.clone(),
                    visible: state.document.is_visible(person),
                    report: report.clone(),
                })
            })
            .collect()
    };

    rsx! {
        section { class: "report-card report-details",
            div { class: "report-card__header",
                h2 { {t!("details-heading")} }
            }

            if entries.is_empty() {
                p { class: "report-card__placeholder", {t!("details-empty")} }
            } else {
                for entry in entries.into_iter() {
                    {render_entry(entry, &lang)}
                }
            }
        }
    }
}

fn render_entry(entry: DetailEntry, lang: &str) -> Element {
    let DetailEntry {
        person,
        visible,
        report,
    } = entry;

    let unpaid = t!(
        "details-unpaid",
        amount = format::format_amount_for(report.total_unpaid, lang)
    );
    let months: Vec<(String, Vec<String>)> = report
        .months
        .iter()
        .map(|(month, detail)| {
            (
                format::localize_digits(month, lang),
                month_cells(detail, lang),
            )
        })
        .collect();

    rsx! {
        article {
            key: "{person}",
            class: "report-person-item",
            "data-person-name": "{person}",
            style: if visible { "" } else { "display:none" },

            div { class: "report-person-item__header",
                h3 { "{person}" }
                span { class: "report-person-item__unpaid", "{unpaid}" }
            }

            table { class: "report-table report-table--compact",
                thead {
                    tr {
                        th { {t!("details-col-month")} }
                        th { {t!("details-col-bracket-base")} }
                        th { {t!("details-col-net-sales")} }
                        th { {t!("details-col-original")} }
                        th { {t!("details-col-bonus")} }
                        th { {t!("details-col-total")} }
                    }
                }
                tbody {
                    for (month, cells) in months.into_iter() {
                        tr { key: "{month}",
                            td { class: "report-table__month", "{month}" }
                            for cell in cells.into_iter() {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn month_cells(detail: &MonthDetail, lang: &str) -> Vec<String> {
    [
        detail.bracket_base,
        detail.total_net_sales,
        detail.original_commission,
        detail.additional_bonus,
        detail.total_commission,
    ]
    .into_iter()
    .map(|value| format::format_amount_for(value, lang))
    .collect()
}
