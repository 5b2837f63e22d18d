mod common;
use common::{fr, init_data_dir, read_sheet, setup_data_dir, submit_example, temp_out, today_sheet};
use fleetrepair::store::day_sheet::{COL_COST, COL_DESCRIPTION, COL_SEQ, COL_VEHICLE};
use fleetrepair::store::sheet::Cell;
use std::fs;

#[test]
fn test_edit_apply_csv_replaces_whole_sheet() {
    let data_dir = setup_data_dir("edit_apply_csv");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let csv = temp_out("edit_apply_csv", "csv");
    fs::write(
        &csv,
        "No.,Area,Vehicle ID,Date,Description,Cost (ugx)\n\
         1,Hoima,UVS123A,01-May-2024,Oil change and filter,60000\n\
         ,,,,Brake pads,30000\n\
         ,,,,Total Cost (ugx),90000\n",
    )
    .expect("write csv");

    let sheet = today_sheet();
    fr().args(["--data-dir", &data_dir, "edit", "--sheet", &sheet, "--file", &csv])
        .assert()
        .success();

    let body = read_sheet(&data_dir, &sheet);
    assert_eq!(body.len(), 3);
    assert_eq!(
        body[0][COL_DESCRIPTION],
        Cell::Text("Oil change and filter".to_string())
    );
    assert_eq!(body[0][COL_COST], Cell::Number(60000.0));

    // the hand-edited total is saved as-is, not recomputed
    assert_eq!(body[2][COL_COST], Cell::Number(90000.0));
}

#[test]
fn test_edit_apply_csv_keeps_other_sheets() {
    let data_dir = setup_data_dir("edit_keeps_sheets");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let csv = temp_out("edit_keeps_sheets", "csv");
    fs::write(
        &csv,
        "No.,Area,Vehicle ID,Date,Description,Cost (ugx)\n\
         1,Masindi,UEJ447X,02-May-2024,Chain set,45000\n",
    )
    .expect("write csv");

    fr().args([
        "--data-dir",
        &data_dir,
        "edit",
        "--sheet",
        "01-01-2030",
        "--file",
        &csv,
    ])
    .assert()
    .success();

    // the new sheet was created, today's sheet untouched
    let added = read_sheet(&data_dir, "01-01-2030");
    assert_eq!(added.len(), 1);
    assert_eq!(added[0][COL_VEHICLE], Cell::Text("UEJ447X".to_string()));

    let today = read_sheet(&data_dir, &today_sheet());
    assert_eq!(today.len(), 3);
}

#[test]
fn test_edit_save_does_not_renumber() {
    let data_dir = setup_data_dir("edit_no_renumber");
    init_data_dir(&data_dir);

    // a vehicle row with a blank No. must stay blank after saving
    let csv = temp_out("edit_no_renumber", "csv");
    fs::write(
        &csv,
        "No.,Area,Vehicle ID,Date,Description,Cost (ugx)\n\
         ,Hoima,UVS123A,01-May-2024,Oil change,50000\n",
    )
    .expect("write csv");

    let sheet = today_sheet();
    fr().args(["--data-dir", &data_dir, "edit", "--sheet", &sheet, "--file", &csv])
        .assert()
        .success();

    let body = read_sheet(&data_dir, &sheet);
    assert!(body[0][COL_SEQ].is_blank());
    assert_eq!(body[0][COL_VEHICLE], Cell::Text("UVS123A".to_string()));
}

#[cfg(unix)]
#[test]
fn test_edit_with_noop_editor_round_trips() {
    let data_dir = setup_data_dir("edit_noop_editor");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let sheet = today_sheet();
    let before = read_sheet(&data_dir, &sheet);

    // `true` exits cleanly without touching the temp CSV
    fr().args([
        "--data-dir",
        &data_dir,
        "edit",
        "--sheet",
        &sheet,
        "--editor",
        "true",
    ])
    .assert()
    .success();

    let after = read_sheet(&data_dir, &sheet);
    assert_eq!(before, after);
}

#[cfg(unix)]
#[test]
fn test_edit_failing_editor_leaves_sheet_unchanged() {
    let data_dir = setup_data_dir("edit_failing_editor");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let sheet = today_sheet();
    let before = read_sheet(&data_dir, &sheet);

    fr().args([
        "--data-dir",
        &data_dir,
        "edit",
        "--sheet",
        &sheet,
        "--editor",
        "false",
    ])
    .assert()
    .failure();

    let after = read_sheet(&data_dir, &sheet);
    assert_eq!(before, after);
}
