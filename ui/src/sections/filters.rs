use dioxus::prelude::*;

use crate::{
    report::{FilterEvent, PersonCheckbox},
    sections::{use_report_language, ReportSession},
    t,
};

#[component]
pub fn FilterPanel(session: Signal<ReportSession>) -> Element {
    let mut session = session;
    let _lang = use_report_language();
    let (checkboxes, select_all, selected) = {
        let state = session.read();
        (
            state.document.checkboxes.clone(),
            state.document.select_all,
            state.last.selection.len(),
        )
    };
    let total = checkboxes.len();

    rsx! {
        section { class: "report-card report-filters",
            div { class: "report-card__header",
                h2 { {t!("filter-heading")} }
                span { class: "report-card__meta",
                    {t!("filter-selected-count", selected = selected, total = total)}
                }
            }

            if let Some(all_checked) = select_all {
                label { class: "report-filters__option report-filters__option--all",
                    input {
                        id: "selectAllCheckbox",
                        r#type: "checkbox",
                        checked: all_checked,
                        onchange: move |evt: FormEvent| {
                            let checked = evt.checked();
                            session.with_mut(|s| {
                                s.dispatch(FilterEvent::SelectAll(checked));
                            });
                        },
                    }
                    span { {t!("filter-select-all")} }
                }
            }

            ul { class: "report-filters__list",
                for checkbox in checkboxes.into_iter() {
                    {render_checkbox(checkbox, session)}
                }
            }
        }
    }
}

fn render_checkbox(checkbox: PersonCheckbox, mut session: Signal<ReportSession>) -> Element {
    let PersonCheckbox { person, checked } = checkbox;
    let event_person = person.clone();

    rsx! {
        li { key: "{person}", class: "report-filters__item",
            label { class: "report-filters__option",
                input {
                    class: "person-filter",
                    r#type: "checkbox",
                    value: "{person}",
                    checked: checked,
                    onchange: move |evt: FormEvent| {
                        let event = FilterEvent::Toggle {
                            person: event_person.clone(),
                            checked: evt.checked(),
                        };
                        session.with_mut(|s| {
                            s.dispatch(event);
                        });
                    },
                }
                span { "{person}" }
            }
        }
    }
}
