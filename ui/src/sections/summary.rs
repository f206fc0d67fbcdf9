use dioxus::prelude::*;

use crate::{
    core::format,
    report::snapshot::SummaryRow,
    sections::{use_report_language, ReportSession},
    t,
};

#[component]
pub fn SummaryTable(session: Signal<ReportSession>) -> Element {
    let lang = use_report_language();
    let rows: Vec<(SummaryRow, bool)> = {
        let state = session.read();
        state
            .snapshot()
            .overall_summary
            .iter()
            .map(|row| (row.clone(), state.document.is_visible(&row.person_name)))
            .collect()
    };

    rsx! {
        section { class: "report-card report-summary",
            div { class: "report-card__header",
                h2 { {t!("summary-heading")} }
            }

            if rows.is_empty() {
                p { class: "report-card__placeholder", {t!("summary-empty")} }
            } else {
                div { class: "report-table__scroll",
                    table { class: "report-table",
                        thead {
                            tr {
                                th { {t!("summary-col-person")} }
                                th { {t!("summary-col-model")} }
                                th { {t!("summary-col-original")} }
                                th { {t!("summary-col-bonus")} }
                                th { {t!("summary-col-payable")} }
                                th { {t!("summary-col-paid")} }
                                th { {t!("summary-col-pending")} }
                                th { {t!("summary-col-balance")} }
                            }
                        }
                        tbody { id: "summary-table-body",
                            for (row, visible) in rows.into_iter() {
                                {render_row(row, visible, &lang)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_row(row: SummaryRow, visible: bool, lang: &str) -> Element {
    let amounts: Vec<String> = [
        row.total_original_commission,
        row.total_additional_bonus,
        row.total_payable_commission,
        row.total_paid_commission,
        row.total_pending_commission,
    ]
    .into_iter()
    .map(|value| format::format_amount_for(value, lang))
    .collect();
    let balance = format::format_amount_for(row.remaining_balance, lang);
    let person = row.person_name;
    let model = row.commission_model;

    rsx! {
        tr {
            key: "{person}",
            "data-person-name": "{person}",
            style: if visible { "" } else { "display:none" },
            td { class: "report-table__person", "{person}" }
            td { "{model}" }
            for value in amounts.into_iter() {
                td { "{value}" }
            }
            td { class: "report-table__balance", "{balance}" }
        }
    }
}
