use rust_decimal_macros::dec;
use std::sync::Arc;
use tripsplit::application::export::{export_report, spawn_export};
use tripsplit::application::trip::Trip;
use tripsplit::config::TripConfig;
use tripsplit::domain::expense::ExpensePatch;
use tripsplit::domain::money::Amount;
use tripsplit::domain::ports::{ReportExporterBox, SharedReportExporter};
use tripsplit::infrastructure::file::{FileReportExporter, ReportFormat};
use tripsplit::infrastructure::in_memory::InMemoryReportExporter;

fn dinner_trip() -> Trip {
    let mut trip = Trip::new(TripConfig::default());
    let a = trip.add_participant("A").unwrap();
    let b = trip.add_participant("B").unwrap();
    let c = trip.add_participant("C").unwrap();
    let dinner = trip.add_expense();
    trip.update_expense(
        dinner,
        ExpensePatch {
            name: Some("Dinner".to_string()),
            amount: Some(Amount::new(dec!(90)).unwrap()),
            paid_by: Some(Some(a)),
            beneficiaries: Some([a, b, c].into_iter().collect()),
        },
    )
    .unwrap();
    trip
}

#[tokio::test]
async fn test_exporters_as_trait_objects() {
    let memory = InMemoryReportExporter::new();
    let dir = tempfile::tempdir().unwrap();
    let exporters: Vec<ReportExporterBox> = vec![
        Box::new(memory.clone()),
        Box::new(FileReportExporter::new(
            dir.path().join("trip.txt"),
            ReportFormat::Text,
        )),
    ];

    let report = dinner_trip().report();
    for exporter in &exporters {
        assert!(export_report(exporter.as_ref(), &report).await.is_some());
    }

    assert_eq!(memory.reports().await, vec![report]);
    let text = std::fs::read_to_string(dir.path().join("trip.txt")).unwrap();
    assert!(text.contains("B owes A $30.00"));
    assert!(text.contains("C owes A $30.00"));
}

#[tokio::test]
async fn test_failed_export_leaves_settlements_untouched() {
    let trip = dinner_trip();
    let before = trip.settlements();

    let dir = tempfile::tempdir().unwrap();
    let exporter: SharedReportExporter = Arc::new(FileReportExporter::new(
        dir.path().join("missing/trip.json"),
        ReportFormat::Json,
    ));
    let artifact = spawn_export(exporter, trip.report()).await.unwrap();

    assert!(artifact.is_none());
    assert_eq!(trip.settlements(), before);
}
