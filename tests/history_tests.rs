mod common;
use common::{fr, init_data_dir, setup_data_dir, submit_example, temp_out, today_sheet};
use predicates::str::contains;
use std::fs;
use std::path::Path;

fn load_history(data_dir: &str) -> Vec<fleetrepair::models::HistoryRow> {
    let path = Path::new(data_dir).join("repair_history.xlsx");
    fleetrepair::store::history::load(&path).expect("load history")
}

#[test]
fn test_history_aggregates_one_row_per_vehicle() {
    let data_dir = setup_data_dir("history_single");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    fr().args(["--data-dir", &data_dir, "history", "--sheet", &today_sheet()])
        .assert()
        .success();

    let rows = load_history(&data_dir);
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.area, "Hoima");
    assert_eq!(row.vehicle_id, "UVS123A");
    assert_eq!(row.date, "01-May-2024");
    assert_eq!(row.descriptions, "Oil change, Brake pads");
    assert_eq!(row.total_cost, 80_000);
}

#[test]
fn test_history_update_is_idempotent() {
    let data_dir = setup_data_dir("history_idempotent");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let sheet = today_sheet();
    fr().args(["--data-dir", &data_dir, "history", "--sheet", &sheet])
        .assert()
        .success();

    fr().args(["--data-dir", &data_dir, "history", "--sheet", &sheet])
        .assert()
        .success()
        .stdout(contains("1 duplicate(s) skipped"));

    assert_eq!(load_history(&data_dir).len(), 1);
}

#[test]
fn test_history_keeps_distinct_vehicles_apart() {
    let data_dir = setup_data_dir("history_two_vehicles");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    fr().args([
        "--data-dir",
        &data_dir,
        "submit",
        "--area",
        "Masindi",
        "--vehicle",
        "UEJ447X",
        "--date",
        "2024-05-03",
        "--item",
        "New tyre:120000",
    ])
    .assert()
    .success();

    fr().args(["--data-dir", &data_dir, "history", "--sheet", &today_sheet()])
        .assert()
        .success();

    let rows = load_history(&data_dir);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].vehicle_id, "UEJ447X");
    assert_eq!(rows[1].total_cost, 120_000);
}

#[test]
fn test_history_rejects_non_numeric_cost() {
    let data_dir = setup_data_dir("history_bad_cost");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let csv = temp_out("history_bad_cost", "csv");
    fs::write(
        &csv,
        "No.,Area,Vehicle ID,Date,Description,Cost (ugx)\n\
         1,Hoima,UVS123A,01-May-2024,Oil change,about 50k\n",
    )
    .expect("write csv");

    let sheet = today_sheet();
    fr().args(["--data-dir", &data_dir, "edit", "--sheet", &sheet, "--file", &csv])
        .assert()
        .success();

    fr().args(["--data-dir", &data_dir, "history", "--sheet", &sheet])
        .assert()
        .failure()
        .stderr(contains("Invalid cost"));

    // nothing appended
    assert!(!Path::new(&data_dir).join("repair_history.xlsx").exists());
}

#[test]
fn test_history_missing_sheet_changes_nothing() {
    let data_dir = setup_data_dir("history_missing_sheet");
    init_data_dir(&data_dir);

    fr().args(["--data-dir", &data_dir, "history", "--sheet", "09-09-2099"])
        .assert()
        .success()
        .stdout(contains("history unchanged"));

    assert!(!Path::new(&data_dir).join("repair_history.xlsx").exists());
}
