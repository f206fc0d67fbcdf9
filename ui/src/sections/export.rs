use dioxus::prelude::*;

use crate::{
    report::selection,
    sections::{use_report_language, ReportSession},
    t,
};

#[component]
pub fn ExportLink(session: Signal<ReportSession>) -> Element {
    let _lang = use_report_language();
    let (link, selected, total) = {
        let state = session.read();
        (
            state.document.export_link.clone(),
            state.last.selection.len(),
            selection::distinct_people(state.snapshot().person_list()),
        )
    };

    let Some(link) = link else {
        return rsx! {};
    };

    // Mirrors the link rule: only a proper, non-empty subset is filtered.
    let note = if selected > 0 && selected < total {
        t!("export-filtered", count = selected)
    } else {
        t!("export-unfiltered")
    };

    rsx! {
        div { class: "report-export",
            a {
                id: "pdfExportLink",
                class: "button button--primary",
                href: "{link.href}",
                "data-base-url": "{link.base_url}",
                target: "_blank",
                {t!("export-link")}
            }
            span { class: "report-card__meta", "{note}" }
        }
    }
}
