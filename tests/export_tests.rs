mod common;
use common::{fr, init_data_dir, setup_data_dir, submit_example, temp_out, today_sheet};
use calamine::{Data, Reader, Xlsx, open_workbook};
use std::fs;
use std::path::Path;

#[test]
fn test_export_day_sheet_csv() {
    let data_dir = setup_data_dir("export_csv");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let out = temp_out("export_csv", "csv");

    fr().args([
        "--data-dir",
        &data_dir,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--sheet",
        &today_sheet(),
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("no,area,vehicle_id,date,description,cost"));
    assert!(content.contains("Oil change"));
    assert!(content.contains("50000"));
    assert!(content.contains("Total Cost (ugx)"));
}

#[test]
fn test_export_day_sheet_json() {
    let data_dir = setup_data_dir("export_json");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let out = temp_out("export_json", "json");

    fr().args([
        "--data-dir",
        &data_dir,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--sheet",
        &today_sheet(),
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let rows = parsed.as_array().expect("array of rows");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["description"], "Oil change");
    assert_eq!(rows[0]["cost"], 50000);
    assert!(rows[1]["no"].is_null());
}

#[test]
fn test_export_day_sheet_xlsx() {
    let data_dir = setup_data_dir("export_xlsx");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let out = temp_out("export_xlsx", "xlsx");

    fr().args([
        "--data-dir",
        &data_dir,
        "export",
        "--format",
        "xlsx",
        "--file",
        &out,
        "--sheet",
        &today_sheet(),
    ])
    .assert()
    .success();

    let mut workbook: Xlsx<_> = open_workbook(&out).expect("open exported xlsx");
    let name = workbook.sheet_names()[0].clone();
    let range = workbook.worksheet_range(&name).expect("first sheet");

    // costs come back as real numbers
    let found = range
        .rows()
        .any(|row| row.iter().any(|c| matches!(c, Data::Float(f) if *f == 50000.0)));
    assert!(found, "exported cost 50000 not found as a number");
}

#[test]
fn test_export_requires_absolute_path() {
    let data_dir = setup_data_dir("export_relative");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    fr().args([
        "--data-dir",
        &data_dir,
        "export",
        "--format",
        "csv",
        "--file",
        "out.csv",
    ])
    .assert()
    .failure()
    .stderr(predicates::str::contains("absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let data_dir = setup_data_dir("export_force");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("seed existing file");

    fr().args([
        "--data-dir",
        &data_dir,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--sheet",
        &today_sheet(),
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Oil change"));
}

#[test]
fn test_export_unknown_sheet_writes_nothing() {
    let data_dir = setup_data_dir("export_unknown_sheet");
    init_data_dir(&data_dir);

    let out = temp_out("export_unknown_sheet", "csv");

    fr().args([
        "--data-dir",
        &data_dir,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--sheet",
        "09-09-2099",
    ])
    .assert()
    .success()
    .stdout(predicates::str::contains("No day sheet"));

    assert!(!Path::new(&out).exists());
}
