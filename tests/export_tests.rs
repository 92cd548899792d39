use chrono::NaiveDate;
use rhabitlog::core::Tracker;
use rhabitlog::errors::AppError;
use rhabitlog::export::{ExportDocument, ExportFormat, ExportLogic, ImportLogic};
use rhabitlog::storage::MemoryStore;
use std::fs;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_json_export_import_restores_state() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("export.json");

    let mut src = Tracker::open(MemoryStore::new(), d("2025-07-01")).unwrap();
    let id = src.state().catalog.positive[0].id;
    src.log_action(id, d("2025-07-01"), Some("pool")).unwrap();
    src.set_goal(12_000).unwrap();

    ExportLogic::export(src.state(), ExportFormat::Json, &file, None, false).unwrap();

    let imported = ImportLogic::read(&file).unwrap();
    let mut dst = Tracker::open(MemoryStore::new(), d("2025-07-01")).unwrap();
    dst.replace_state(imported).unwrap();

    assert_eq!(dst.state().logged_actions, src.state().logged_actions);
    assert_eq!(dst.state().settings.goal, 12_000);
    assert_eq!(dst.progress(), src.progress());
    assert_eq!(dst.store().saved.as_ref(), Some(dst.state()));
}

#[test]
fn test_import_validation_messages() {
    let cases = [
        ("\"just a string\"", "JSON object"),
        ("{ nope", "not valid JSON"),
        (r#"{"format_version": 1}"#, "missing section(s)"),
    ];

    for (doc, expected) in cases {
        let err = ExportDocument::parse(doc).unwrap_err();
        assert!(matches!(err, AppError::Import(_)));
        assert!(err.to_string().contains(expected), "{doc}: {err}");
    }
}

#[test]
fn test_import_rejects_unsupported_version() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("export.json");

    let t = Tracker::open(MemoryStore::new(), d("2025-07-01")).unwrap();
    ExportLogic::export(t.state(), ExportFormat::Json, &file, None, false).unwrap();

    let text = fs::read_to_string(&file).unwrap().replace("\"format_version\": 1", "\"format_version\": 2");
    fs::write(&file, text).unwrap();

    let err = ImportLogic::read(&file).unwrap_err();
    assert!(err.to_string().contains("unsupported format_version 2"));
}

#[test]
fn test_json_export_refuses_a_range() {
    let tmp = tempfile::tempdir().unwrap();
    let t = Tracker::open(MemoryStore::new(), d("2025-07-01")).unwrap();

    let err = ExportLogic::export(
        t.state(),
        ExportFormat::Json,
        &tmp.path().join("x.json"),
        Some("2025"),
        false,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Export(_)));
}

#[test]
fn test_csv_export_counts_rows_in_range() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("history.csv");

    let mut t = Tracker::open(MemoryStore::new(), d("2025-07-03")).unwrap();
    let id = t.state().catalog.negative[0].id;
    for day in ["2025-06-30", "2025-07-01", "2025-07-03"] {
        t.log_action(id, d(day), None).unwrap();
    }

    let n = ExportLogic::export(t.state(), ExportFormat::Csv, &file, Some("2025-07"), false).unwrap();
    assert_eq!(n, 2);

    let csv = fs::read_to_string(&file).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains(",Junk food,negative,-400,,"));
}

#[test]
fn test_import_rejects_same_action_twice_on_one_day() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("export.json");

    let mut t = Tracker::open(MemoryStore::new(), d("2025-07-01")).unwrap();
    let id = t.state().catalog.positive[0].id;
    t.log_action(id, d("2025-07-01"), None).unwrap();
    ExportLogic::export(t.state(), ExportFormat::Json, &file, None, false).unwrap();

    let mut doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    let mut copy = doc["logged_actions"][0].clone();
    copy["id"] = serde_json::Value::from(99);
    doc["logged_actions"].as_array_mut().unwrap().push(copy);
    fs::write(&file, doc.to_string()).unwrap();

    let err = ImportLogic::read(&file).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));
    assert!(err.to_string().contains("logged more than once"));
}
