mod common;
use common::{eld, init_db_with_data, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    eld()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_trip_and_duty_roundtrip() {
    let db_path = setup_test_db("trip_and_duty_roundtrip");
    init_db_with_data(&db_path);

    eld()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-09-01"))
        .stdout(predicate::str::contains("Acme Freight"));

    eld()
        .args(["--db", &db_path, "list", "--entries", "--trip", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Driving"))
        .stdout(predicate::str::contains("06:00"))
        .stdout(predicate::str::contains("420.5"));
}

#[test]
fn test_unknown_duty_status_is_rejected() {
    let db_path = setup_test_db("unknown_duty_status");
    init_db_with_data(&db_path);

    eld()
        .args([
            "--db", &db_path, "duty", "zigzag", "--trip", "1", "--start", "08:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duty status"));
}

#[test]
fn test_backwards_entry_is_rejected() {
    let db_path = setup_test_db("backwards_entry");
    init_db_with_data(&db_path);

    // Day 1 already ends at 23:45; an earlier start must fail.
    eld()
        .args([
            "--db", &db_path, "duty", "d", "--trip", "1", "--start", "03:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid entry sequence"));
}

#[test]
fn test_open_entry_is_closed_by_the_next_status() {
    let db_path = setup_test_db("open_entry_autoclose");

    eld()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    eld()
        .args(["--db", &db_path, "trip", "2025-10-01", "--carrier", "Acme"])
        .assert()
        .success();

    // Open driving at 06:00, then switch to on-duty at 09:30.
    eld()
        .args([
            "--db", &db_path, "duty", "d", "--trip", "1", "--start", "06:00",
        ])
        .assert()
        .success();

    eld()
        .args([
            "--db", &db_path, "duty", "on", "--trip", "1", "--start", "09:30",
        ])
        .assert()
        .success();

    // The driving entry now shows a 09:30 end and 03:30 of duration.
    eld()
        .args(["--db", &db_path, "list", "--entries", "--trip", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:30"))
        .stdout(predicate::str::contains("03:30"));
}

#[test]
fn test_completed_trip_rejects_new_entries() {
    let db_path = setup_test_db("completed_trip_rejects");
    init_db_with_data(&db_path);

    eld()
        .args(["--db", &db_path, "trip", "--complete", "1"])
        .assert()
        .success();

    eld()
        .args([
            "--db", &db_path, "duty", "d", "--trip", "1", "--start", "23:50",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already completed"));
}

#[test]
fn test_del_entry_refreshes_the_day() {
    let db_path = setup_test_db("del_entry");
    init_db_with_data(&db_path);

    eld()
        .args(["--db", &db_path, "del", "--entry", "3"])
        .assert()
        .success();

    eld()
        .args(["--db", &db_path, "list", "--entries", "--trip", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Driving"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("internal_log");
    init_db_with_data(&db_path);

    eld()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trip_created"))
        .stdout(predicate::str::contains("entry_added"));
}

#[test]
fn test_db_maintenance_flags() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_data(&db_path);

    eld()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("integrity"))
        .stdout(predicate::str::contains("trips"));
}
