use chrono::NaiveDate;
use rhabitlog::core::Tracker;
use rhabitlog::db::store::SqliteStore;
use rhabitlog::models::{Category, DayOfWeek, Exercise, Routine};
use rhabitlog::storage::{LocalStore, StateStore};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Exercise a store with one representative change of every kind and
/// return the state as it was left in memory.
fn populate<S: StateStore>(t: &mut Tracker<S>) {
    let custom = t.create_action_type(Category::Negative, "Soda", 150).unwrap();
    let workout = t.state().catalog.positive[0].id;

    t.log_action(workout, d("2025-05-01"), Some("legs")).unwrap();
    let soda = t.log_action(custom.id, d("2025-05-02"), None).unwrap().value;
    t.log_action(workout, d("2025-05-02"), None).unwrap();
    t.delete_logged_action(soda.id).unwrap();

    t.add_quick_action(workout).unwrap();
    t.set_goal(8000).unwrap();
    t.set_reminder("06:45").unwrap();

    t.set_custom_workout(
        DayOfWeek::Sunday,
        Routine {
            name: "Yoga".into(),
            description: "Recovery".into(),
            exercises: vec![Exercise::new("Sun salutation", 5, "1", "Mobility")],
        },
    )
    .unwrap();
    t.toggle_exercise(DayOfWeek::Sunday, 0).unwrap();
    t.toggle_exercise(DayOfWeek::Monday, 2).unwrap();
}

#[test]
fn test_local_store_roundtrip() {
    let tmp = tempfile::tempdir().unwrap();
    let today = d("2025-05-02");

    let mut t = Tracker::open(LocalStore::in_dir(tmp.path().to_path_buf()).unwrap(), today).unwrap();
    populate(&mut t);
    let expected = t.state().clone();
    drop(t);

    let reopened = Tracker::open(LocalStore::in_dir(tmp.path().to_path_buf()).unwrap(), today).unwrap();
    assert_eq!(reopened.state(), &expected);
    assert_eq!(reopened.progress().current_streak, 2);
}

#[test]
fn test_sqlite_store_roundtrip() {
    let tmp = tempfile::tempdir().unwrap();
    let db = tmp.path().join("rhabitlog.sqlite");
    let today = d("2025-05-02");

    let mut t = Tracker::open(SqliteStore::open(&db, "alice").unwrap(), today).unwrap();
    populate(&mut t);
    let expected = t.state().clone();
    drop(t);

    let reopened = Tracker::open(SqliteStore::open(&db, "alice").unwrap(), today).unwrap();
    let got = reopened.state();

    assert_eq!(got.settings, expected.settings);
    assert_eq!(got.catalog, expected.catalog);
    assert_eq!(got.badges, expected.badges);
    assert_eq!(got.workout_progress, expected.workout_progress);
    assert_eq!(got.custom_workouts, expected.custom_workouts);
    assert_eq!(got.sequences, expected.sequences);

    let ids: Vec<u64> = got.logged_actions.iter().map(|a| a.id).collect();
    let expected_ids: Vec<u64> = expected.logged_actions.iter().map(|a| a.id).collect();
    assert_eq!(ids, expected_ids);
    assert_eq!(got.logged_actions[0].note.as_deref(), Some("legs"));
}

#[test]
fn test_sqlite_rows_are_scoped_per_user() {
    let tmp = tempfile::tempdir().unwrap();
    let db = tmp.path().join("rhabitlog.sqlite");
    let today = d("2025-05-02");

    let mut alice = Tracker::open(SqliteStore::open(&db, "alice").unwrap(), today).unwrap();
    let id = alice.state().catalog.positive[0].id;
    alice.log_action(id, today, None).unwrap();
    drop(alice);

    let bob = Tracker::open(SqliteStore::open(&db, "bob").unwrap(), today).unwrap();
    assert!(bob.state().logged_actions.is_empty());

    let alice = Tracker::open(SqliteStore::open(&db, "alice").unwrap(), today).unwrap();
    assert_eq!(alice.state().logged_actions.len(), 1);
}

#[test]
fn test_ids_are_never_reused_after_reload() {
    let tmp = tempfile::tempdir().unwrap();
    let today = d("2025-05-02");

    let mut t = Tracker::open(LocalStore::in_dir(tmp.path().to_path_buf()).unwrap(), today).unwrap();
    let id = t.state().catalog.positive[0].id;
    let first = t.log_action(id, today, None).unwrap().value;
    t.delete_logged_action(first.id).unwrap();
    drop(t);

    let mut t = Tracker::open(LocalStore::in_dir(tmp.path().to_path_buf()).unwrap(), today).unwrap();
    let second = t.log_action(id, today, None).unwrap().value;
    assert!(second.id > first.id);
}
