#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn eld() -> Command {
    cargo_bin_cmd!("eldlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests:
/// two trips, the first with a full day of duty entries.
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    eld()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    eld()
        .args([
            "--db",
            db_path,
            "trip",
            "2025-09-01",
            "--from",
            "Chicago, IL",
            "--to",
            "41.8781,-87.6298",
            "--carrier",
            "Acme Freight",
            "--truck",
            "101",
            "--trailer",
            "T-9",
            "--terminal",
            "4000 W Roosevelt Rd, Chicago",
        ])
        .assert()
        .success();

    for (status, start, end, miles) in [
        ("off", "00:00", Some("06:00"), None),
        ("d", "06:00", Some("14:00"), Some("420.5")),
        ("on", "14:00", Some("15:00"), None),
        ("sb", "15:00", Some("23:45"), None),
    ] {
        let mut args = vec![
            "--db".to_string(),
            db_path.to_string(),
            "duty".to_string(),
            status.to_string(),
            "--trip".to_string(),
            "1".to_string(),
            "--start".to_string(),
            start.to_string(),
        ];
        if let Some(end) = end {
            args.push("--end".to_string());
            args.push(end.to_string());
        }
        if let Some(miles) = miles {
            args.push("--miles".to_string());
            args.push(miles.to_string());
        }
        eld().args(&args).assert().success();
    }

    eld()
        .args([
            "--db",
            db_path,
            "trip",
            "2025-09-15",
            "--from",
            "St Louis, MO",
            "--to",
            "Memphis, TN",
            "--carrier",
            "Acme Freight",
        ])
        .assert()
        .success();

    eld()
        .args([
            "--db", db_path, "duty", "d", "--trip", "2", "--start", "07:30", "--end", "11:00",
        ])
        .assert()
        .success();
}
