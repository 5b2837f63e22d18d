#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use fleetrepair::store::sheet::{Cell, Grid, write_workbook};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn fr() -> Command {
    cargo_bin_cmd!("fleetrepair")
}

/// Create a unique test data dir inside the system temp dir and remove any leftover
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fleetrepair", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a data dir and fill both registers with a small fleet
pub fn init_data_dir(data_dir: &str) {
    fr().args(["--data-dir", data_dir, "--test", "init"])
        .assert()
        .success();

    let dir = Path::new(data_dir);
    seed_register(
        &dir.join("areas.xlsx"),
        "Area",
        &["Hoima", "Masindi", "Kagadi"],
    );
    seed_register(
        &dir.join("vehicles.xlsx"),
        "Vehicle",
        &["UVS123A", "UEJ447X", "UDF921B"],
    );
}

fn seed_register(path: &Path, column: &str, values: &[&str]) {
    let mut grid: Grid = vec![vec![Cell::text(column)]];
    for v in values {
        grid.push(vec![Cell::text(v)]);
    }
    write_workbook(path, &[(column.to_string(), grid)]).expect("seed register");
}

/// Submit the worked example entry: two real items and one blank slot
pub fn submit_example(data_dir: &str) {
    fr().args([
        "--data-dir",
        data_dir,
        "submit",
        "--area",
        "Hoima",
        "--vehicle",
        "UVS123A",
        "--date",
        "2024-05-01",
        "--item",
        "Oil change:50000",
        "--item",
        "",
        "--item",
        "Brake pads:30000",
    ])
    .assert()
    .success();
}

/// Read one day sheet's body back through the library API
pub fn read_sheet(data_dir: &str, sheet: &str) -> Grid {
    let path = Path::new(data_dir).join("repairs.xlsx");
    fleetrepair::store::day_sheet::load_sheet(&path, sheet)
        .expect("load sheet")
        .expect("sheet exists")
}

/// Today's day sheet name (DD-MM-YYYY)
pub fn today_sheet() -> String {
    fleetrepair::utils::date::sheet_name_for(fleetrepair::utils::date::today())
}
