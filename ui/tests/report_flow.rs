//! End-to-end filter flow over a snapshot in the embedded wire format.

use ui::report::{FilterEvent, ReportDocument, ReportEngine, SeriesRole, Snapshot};

const FRONTEND_DATA: &str = r#"{
    "personList": ["علی", "Sara", "Reza"],
    "chartData": {
        "labels": ["1403-01", "1403-02", "1403-03"],
        "datasets": {
            "total_sales": [60, 70, 80],
            "targets": [50, 50, 50],
            "persons": {
                "علی": [10, 20, 30],
                "Sara": [20, 20, 20],
                "Reza": [30, 30, 30]
            }
        }
    },
    "overallSummary": [
        { "person_name": "علی", "commission_model": "tiered", "remaining_balance": 12.5 },
        { "person_name": "Sara" }
    ],
    "personMonthlyReport": {
        "Reza": { "months": { "1403-01": { "total_net_sales": 30 } }, "total_unpaid": 4 }
    }
}"#;

fn session() -> (ReportEngine, ReportDocument) {
    let snapshot = Snapshot::from_json(FRONTEND_DATA).expect("fixture parses");
    let document = ReportDocument::for_snapshot(&snapshot)
        .with_chart()
        .with_export_link("/report/pdf");
    (ReportEngine::new(snapshot), document)
}

#[test]
fn startup_shows_everything_unfiltered() {
    let (mut engine, mut doc) = session();
    let view = engine.start(&mut doc);

    assert!(view.all_selected);
    assert_eq!(doc.select_all, Some(true));
    assert_eq!(view.aggregate(), &[60.0, 70.0, 80.0]);
    assert_eq!(view.export_href.as_deref(), Some("/report/pdf"));
    assert!(doc.is_visible("Sara"));
    assert!(doc.is_visible("Reza"));
}

#[test]
fn narrowing_to_one_person_filters_every_surface() {
    let (mut engine, mut doc) = session();
    engine.start(&mut doc);
    engine.dispatch(
        FilterEvent::Toggle {
            person: "Sara".into(),
            checked: false,
        },
        &mut doc,
    );
    let view = engine.dispatch(
        FilterEvent::Toggle {
            person: "Reza".into(),
            checked: false,
        },
        &mut doc,
    );

    assert!(!view.all_selected);
    assert_eq!(doc.select_all, Some(false));
    assert_eq!(view.aggregate(), &[10.0, 20.0, 30.0]);
    assert_eq!(
        view.export_href.as_deref(),
        Some("/report/pdf?filter=%D8%B9%D9%84%DB%8C")
    );
    assert!(doc.is_visible("علی"));
    assert!(!doc.is_visible("Sara"));
    assert!(!doc.is_visible("Reza"));

    let hidden: Vec<_> = view
        .series
        .iter()
        .filter(|s| s.hidden)
        .map(|s| s.role.clone())
        .collect();
    assert_eq!(
        hidden,
        vec![
            SeriesRole::Person("Reza".into()),
            SeriesRole::Person("Sara".into())
        ]
    );
    let chart = doc.chart.as_ref().expect("chart present");
    assert_eq!(chart.series, view.series);
}

#[test]
fn clearing_everything_keeps_target_and_exports_unfiltered() {
    let (mut engine, mut doc) = session();
    engine.start(&mut doc);
    let view = engine.dispatch(FilterEvent::SelectAll(false), &mut doc);

    assert!(view.selection.is_empty());
    assert!(!doc.is_checked("Sara"));
    assert_eq!(view.aggregate(), &[0.0, 0.0, 0.0]);
    assert_eq!(view.export_href.as_deref(), Some("/report/pdf"));
    assert!(view
        .series
        .iter()
        .any(|s| s.role == SeriesRole::Target && !s.hidden));
    assert!(!doc.is_visible("Reza"));

    let view = engine.dispatch(FilterEvent::SelectAll(true), &mut doc);
    assert!(view.all_selected);
    assert!(doc.is_checked("علی"));
    assert_eq!(view.aggregate(), &[60.0, 70.0, 80.0]);
    assert!(doc.is_visible("Reza"));
}
