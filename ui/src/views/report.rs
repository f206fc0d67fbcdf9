use dioxus::prelude::*;

use crate::{
    core::platform,
    i18n,
    sections::{
        use_report_language, ExportLink, FilterPanel, PerformanceChart, PersonDetails,
        ReportState, SummaryTable,
    },
    t,
};

#[component]
pub fn Report() -> Element {
    // Re-render on a language switch; `dir` depends on it.
    let _lang = use_report_language();

    let loaded = use_hook(|| {
        i18n::init();
        let config = platform::load_config();
        match ReportState::load(&config) {
            ReportState::Ready(session) => Ok(Signal::new(session)),
            ReportState::Unavailable(reason) => Err(reason),
        }
    });

    let dir = if i18n::is_rtl() { "rtl" } else { "ltr" };

    rsx! {
        section { class: "page page-report", dir: "{dir}",
            h1 { {t!("app-title")} }

            match loaded {
                Ok(session) => {
                    let nothing_selected = session.read().last.selection.is_empty();
                    rsx! {
                        div { class: "report__layout",
                            FilterPanel { session }
                            div { class: "report__main",
                                if nothing_selected {
                                    p { class: "report-card__placeholder report__empty",
                                        {t!("report-nothing-selected")}
                                    }
                                }
                                PerformanceChart { session }
                                ExportLink { session }
                                SummaryTable { session }
                                PersonDetails { session }
                            }
                        }
                    }
                }
                Err(reason) => rsx! {
                    div { class: "report-card report__missing",
                        p { {t!("report-missing")} }
                        p { class: "report-card__meta", {t!("report-missing-detail", reason = reason)} }
                    }
                },
            }
        }
    }
}
