mod common;
use common::{eld, init_db_with_data, setup_test_db, temp_out};
use std::fs;

#[test]
fn test_export_entries_csv_all() {
    let db_path = setup_test_db("export_entries_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_entries_csv_all", "csv");

    eld()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    assert!(content.contains("driving"));
}

#[test]
fn test_export_entries_json_range() {
    let db_path = setup_test_db("export_entries_json_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_entries_json_range", "json");

    eld()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-09",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
}

#[test]
fn test_export_range_filters_days() {
    let db_path = setup_test_db("export_range_filters");
    init_db_with_data(&db_path);

    let out = temp_out("export_range_filters", "csv");

    eld()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2025-09-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("2025-09-15"));
}

#[test]
fn test_export_xlsx_writes_a_workbook() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    eld()
        .args([
            "--db", &db_path, "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    // XLSX is a zip container.
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn test_export_pdf_table() {
    let db_path = setup_test_db("export_pdf_table");
    init_db_with_data(&db_path);

    let out = temp_out("export_pdf_table", "pdf");

    eld()
        .args([
            "--db", &db_path, "export", "--format", "pdf", "--file", &out, "--range", "2025",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert_eq!(&bytes[0..5], b"%PDF-");
}

#[test]
fn test_export_relative_path_is_rejected() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_data(&db_path);

    eld()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure();
}
