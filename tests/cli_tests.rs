use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{Sandbox, read};

#[test]
fn test_init_seeds_defaults() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("9 action types").and(contains("11 badges")));

    assert!(sb.data_dir().join("rhabitlog-state.json").exists());
}

#[test]
fn test_status_of_a_fresh_tracker() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(contains("20,000").and(contains("0 day(s)")));
}

#[test]
fn test_log_reports_points_and_first_badge() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["log", "workout", "--note", "morning run"])
        .assert()
        .success()
        .stdout(
            contains("Logged 'Workout' (+500)")
                .and(contains("Balance:"))
                .and(contains("First Step")),
        );

    sb.cmd()
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Workout").and(contains("morning run")));
}

#[test]
fn test_duplicate_log_is_rejected() {
    let sb = Sandbox::new();
    sb.init().log("1", "2025-03-10");

    sb.cmd()
        .args(["log", "1", "--date", "2025-03-10"])
        .assert()
        .failure()
        .stderr(contains("is already logged"));

    sb.cmd()
        .args(["list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("2025-03-10"));
}

#[test]
fn test_log_unknown_type_and_bad_date() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["log", "juggling"])
        .assert()
        .failure()
        .stderr(contains("Not found"));

    sb.cmd()
        .args(["log", "1", "--date", "10/03/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_custom_type_lifecycle() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["types", "add", "Late snack", "250", "--category", "negative"])
        .assert()
        .success()
        .stdout(contains("#10").and(contains("-250")));

    sb.cmd()
        .args(["types", "edit", "10", "--value", "150"])
        .assert()
        .success()
        .stdout(contains("-150"));

    sb.cmd()
        .args(["types", "del", "10"])
        .assert()
        .success();

    sb.cmd()
        .args(["types", "list"])
        .assert()
        .success()
        .stdout(contains("Late snack").not());
}

#[test]
fn test_builtin_type_cannot_be_deleted() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["types", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("Not allowed"));

    sb.cmd()
        .args(["types", "list", "--category", "positive"])
        .assert()
        .success()
        .stdout(contains("Workout"));
}

#[test]
fn test_types_add_rejects_zero_points() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["types", "add", "Nothing", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));
}

#[test]
fn test_delete_unknown_entry_is_a_noop() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["del", "999", "-y"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));
}

#[test]
fn test_delete_restores_balance() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd().args(["log", "Saved money"]).assert().success();

    sb.cmd()
        .args(["del", "1", "-y"])
        .assert()
        .success()
        .stdout(contains("Deleted 'Saved money'").and(contains("20,000")));
}

#[test]
fn test_quick_actions() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd().args(["quick", "add", "3"]).assert().success();
    sb.cmd()
        .args(["quick", "add", "3"])
        .assert()
        .failure()
        .stderr(contains("already a quick action"));

    sb.cmd()
        .args(["quick", "log", "@1"])
        .assert()
        .success()
        .stdout(contains("Saved money"));

    sb.cmd()
        .args(["quick", "list"])
        .assert()
        .success()
        .stdout(contains("✔"));

    sb.cmd()
        .args(["quick", "log", "1"])
        .assert()
        .failure()
        .stderr(contains("not a quick action"));
}

#[test]
fn test_settings_goal_validation() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args(["settings", "--goal", "0"])
        .assert()
        .failure()
        .stderr(contains("goal must be a positive integer"));

    sb.cmd()
        .args(["settings", "--goal", "5000", "--reminder", "7:30", "--theme", "dark"])
        .assert()
        .success();

    sb.cmd()
        .arg("settings")
        .assert()
        .success()
        .stdout(contains("5,000").and(contains("07:30")).and(contains("dark")));
}

#[test]
fn test_workout_custom_routine_and_toggle() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .args([
            "workout", "set", "sat", "--name", "Hike", "-e", "Trail walk:1:2h:Endurance",
        ])
        .assert()
        .success();

    sb.cmd()
        .args(["workout", "toggle", "saturday", "1"])
        .assert()
        .success()
        .stdout(contains("done"));

    sb.cmd()
        .args(["workout", "show", "saturday"])
        .assert()
        .success()
        .stdout(contains("Hike").and(contains("[x]")));

    sb.cmd()
        .args(["workout", "toggle", "saturday", "2"])
        .assert()
        .failure()
        .stderr(contains("Not found"));

    sb.cmd()
        .args(["workout", "clear", "saturday"])
        .assert()
        .success()
        .stdout(contains("rest day"));
}

#[test]
fn test_export_json_import_roundtrip_between_profiles() {
    let src = Sandbox::new();
    src.init().log("1", "2025-03-09").log("6", "2025-03-10");

    let out = src.path("export.json");
    src.cmd()
        .args(["export", "--format", "json", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("2 logged actions"));
    assert!(read(&out).contains("\"format_version\": 1"));

    let dst = Sandbox::new();
    dst.init();
    dst.cmd()
        .args(["import", "-y", "--file"])
        .arg(&out)
        .assert()
        .success();

    dst.cmd()
        .args(["list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("Workout").and(contains("Junk food")));
}

#[test]
fn test_import_rejects_invalid_documents() {
    let sb = Sandbox::new();
    sb.init();

    let bad = sb.path("bad.json");
    std::fs::write(&bad, r#"{"format_version": 1, "settings": {}}"#).unwrap();

    sb.cmd()
        .args(["import", "-y", "--file"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(contains("Import rejected").and(contains("action_types")));
}

#[test]
fn test_export_csv_range_and_overwrite_guard() {
    let sb = Sandbox::new();
    sb.init()
        .log("1", "2025-02-28")
        .log("1", "2025-03-01")
        .log("2", "2025-03-02");

    let out = sb.path("march.csv");
    sb.cmd()
        .args(["export", "--format", "csv", "--range", "2025-03", "--file"])
        .arg(&out)
        .assert()
        .success();

    let csv = read(&out);
    assert!(csv.starts_with("id,date,action,category,points,note,created_at"));
    assert!(csv.contains("2025-03-01"));
    assert!(!csv.contains("2025-02-28"));

    // existing file, no --force, non-interactive stdin
    sb.cmd()
        .args(["export", "--format", "csv", "--file"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("--force"));
}

#[test]
fn test_backup_compressed() {
    let sb = Sandbox::new();
    sb.init().log("1", "2025-03-01");

    let dest = sb.path("backup.json");
    sb.cmd()
        .args(["backup", "--compress", "--file"])
        .arg(&dest)
        .assert()
        .success()
        .stdout(contains("backup.zip"));

    assert!(sb.path("backup.zip").exists());
}

#[test]
fn test_sqlite_backend_end_to_end() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["--backend", "sqlite", "--test", "init"])
        .assert()
        .success()
        .stdout(contains("rhabitlog.sqlite"));

    sb.cmd()
        .args(["--backend", "sqlite", "log", "Meditated", "--date", "2025-04-01"])
        .assert()
        .success();

    sb.cmd()
        .args(["--backend", "sqlite", "list", "--period", "2025-04"])
        .assert()
        .success()
        .stdout(contains("Meditated"));

    sb.cmd()
        .args(["--backend", "sqlite", "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Logged actions").and(contains("Integrity check passed")));
}

#[test]
fn test_config_check_and_migrate() {
    let sb = Sandbox::new();
    std::fs::write(sb.path("rhabitlog.conf"), "user_id: tester\n").unwrap();

    sb.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("backend").and(contains("recent_limit")));

    sb.cmd()
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added field(s)"));

    let conf = read(&sb.path("rhabitlog.conf"));
    assert!(conf.contains("user_id: tester"));
    assert!(conf.contains("log_level: warn"));
}
