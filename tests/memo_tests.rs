mod common;
use common::{fr, init_data_dir, setup_data_dir, submit_example, temp_out, today_sheet};
use fleetrepair::core::memo::MemoLogic;
use fleetrepair::utils::date::{cell_date, today};
use predicates::str::contains;
use std::fs;
use std::path::Path;

fn memo_path(data_dir: &str) -> std::path::PathBuf {
    Path::new(data_dir)
        .join("memos")
        .join(format!("repair_request_{}.pdf", cell_date(today())))
}

#[test]
fn test_memo_subject_wording() {
    let subject = MemoLogic::build_subject(80_000, 1);

    assert!(subject.starts_with("RE: REQUEST FOR UGSHS 80,000"));
    assert!(subject.contains("(EIGHTY THOUSAND UGANDA SHILLINGS ONLY)"));
    assert!(subject.contains("NO. 1 (ONE) MOTORCYCLES"));
}

#[test]
fn test_memo_subject_larger_amounts() {
    let subject = MemoLogic::build_subject(1_250_000, 3);

    assert!(subject.contains("UGSHS 1,250,000"));
    assert!(subject.contains("(ONE MILLION TWO HUNDRED FIFTY THOUSAND UGANDA SHILLINGS ONLY)"));
    assert!(subject.contains("NO. 3 (THREE) MOTORCYCLES"));
}

#[test]
fn test_memo_writes_pdf_into_output_dir() {
    let data_dir = setup_data_dir("memo_pdf");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    fr().args(["--data-dir", &data_dir, "memo", "--sheet", &today_sheet()])
        .assert()
        .success();

    let out = memo_path(&data_dir);
    assert!(out.exists(), "memo not written at {}", out.display());

    let bytes = fs::read(&out).expect("read memo");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_memo_optional_copy() {
    let data_dir = setup_data_dir("memo_copy");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    let copy = temp_out("memo_copy", "pdf");
    fr().args([
        "--data-dir",
        &data_dir,
        "memo",
        "--sheet",
        &today_sheet(),
        "--file",
        &copy,
    ])
    .assert()
    .success();

    assert!(Path::new(&copy).exists());
    assert!(memo_path(&data_dir).exists());
}

#[test]
fn test_memo_rejects_relative_copy_path() {
    let data_dir = setup_data_dir("memo_relative_copy");
    init_data_dir(&data_dir);
    submit_example(&data_dir);

    fr().args([
        "--data-dir",
        &data_dir,
        "memo",
        "--sheet",
        &today_sheet(),
        "--file",
        "memo_copy.pdf",
    ])
    .assert()
    .failure()
    .stderr(contains("absolute"));
}

#[test]
fn test_memo_empty_sheet_is_fatal() {
    let data_dir = setup_data_dir("memo_empty_sheet");
    init_data_dir(&data_dir);

    // init created today's sheet with zero rows
    fr().args(["--data-dir", &data_dir, "memo", "--sheet", &today_sheet()])
        .assert()
        .failure()
        .stderr(contains("empty"));
}

#[test]
fn test_memo_non_numeric_cost_is_fatal() {
    let data_dir = setup_data_dir("memo_bad_cost");
    init_data_dir(&data_dir);

    let csv = temp_out("memo_bad_cost", "csv");
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

    fr().args(["--data-dir", &data_dir, "memo", "--sheet", &sheet])
        .assert()
        .failure()
        .stderr(contains("Invalid cost"));

    // no partial output
    assert!(!memo_path(&data_dir).exists());
}
