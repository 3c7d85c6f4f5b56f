mod common;
use common::{eld, init_db_with_data, setup_test_db, temp_out};
use std::fs;

#[test]
fn test_sheet_svg_contains_the_form_chrome() {
    let db_path = setup_test_db("sheet_svg");
    init_db_with_data(&db_path);

    let out = temp_out("sheet_svg", "svg");

    eld()
        .args([
            "--db", &db_path, "sheet", "--trip", "1", "--format", "svg", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read rendered svg");
    assert!(content.starts_with("<svg"));
    assert!(content.contains("Driver&apos;s Daily Log"));
    assert!(content.contains("stroke='red'"));
    assert!(content.contains("Recap: Complete at end of day"));
}

#[test]
fn test_sheet_pdf_single_page() {
    let db_path = setup_test_db("sheet_pdf");
    init_db_with_data(&db_path);

    let out = temp_out("sheet_pdf", "pdf");

    eld()
        .args([
            "--db", &db_path, "sheet", "--trip", "1", "--format", "pdf", "--file", &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read rendered pdf");
    assert_eq!(&bytes[0..5], b"%PDF-");
}

#[test]
fn test_sheet_png_rasterises() {
    let db_path = setup_test_db("sheet_png");
    init_db_with_data(&db_path);

    let out = temp_out("sheet_png", "png");

    eld()
        .args([
            "--db", &db_path, "sheet", "--trip", "1", "--format", "png", "--file", &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read rendered png");
    assert_eq!(&bytes[0..4], [0x89, b'P', b'N', b'G']);
}

#[test]
fn test_sheet_without_entries_fails_loudly() {
    let db_path = setup_test_db("sheet_no_entries");

    eld()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    eld()
        .args(["--db", &db_path, "trip", "2025-11-01", "--carrier", "Acme"])
        .assert()
        .success();

    let out = temp_out("sheet_no_entries", "svg");

    eld()
        .args([
            "--db", &db_path, "sheet", "--trip", "1", "--format", "svg", "--file", &out,
        ])
        .assert()
        .failure();
}

#[test]
fn test_sheet_date_outside_the_trip_fails() {
    let db_path = setup_test_db("sheet_wrong_date");
    init_db_with_data(&db_path);

    let out = temp_out("sheet_wrong_date", "svg");

    eld()
        .args([
            "--db", &db_path, "sheet", "--trip", "1", "--date", "2024-01-01", "--format", "svg",
            "--file", &out,
        ])
        .assert()
        .failure();
}

#[test]
fn test_sheet_force_overwrites() {
    let db_path = setup_test_db("sheet_force");
    init_db_with_data(&db_path);

    let out = temp_out("sheet_force", "svg");
    fs::write(&out, "stale").expect("seed stale file");

    eld()
        .args([
            "--db", &db_path, "sheet", "--trip", "1", "--format", "svg", "--file", &out, "-f",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read rendered svg");
    assert!(content.starts_with("<svg"));
}
