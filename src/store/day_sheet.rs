//! Day sheet access: one sheet per submission day inside the repairs
//! workbook, each row one repair line.

use crate::errors::AppResult;
use crate::store::sheet::{Cell, Grid, read_workbook, write_workbook};
use std::path::Path;

pub const DAY_HEADERS: [&str; 6] = ["No.", "Area", "Vehicle ID", "Date", "Description", "Cost (ugx)"];

/// Description used by the synthetic per-batch total row.
pub const TOTAL_LABEL: &str = "Total Cost (ugx)";

/// Column positions inside a day sheet row.
pub const COL_SEQ: usize = 0;
pub const COL_AREA: usize = 1;
pub const COL_VEHICLE: usize = 2;
pub const COL_DATE: usize = 3;
pub const COL_DESCRIPTION: usize = 4;
pub const COL_COST: usize = 5;

/// Load the body rows of one day sheet. `None` when the workbook or the
/// sheet does not exist yet.
pub fn load_sheet(path: &Path, name: &str) -> AppResult<Option<Grid>> {
    let sheets = read_workbook(path)?;

    for (sheet_name, grid) in sheets {
        if sheet_name == name {
            let mut body: Grid = grid.into_iter().skip(1).collect();
            for row in &mut body {
                row.resize(DAY_HEADERS.len(), Cell::Empty);
            }
            return Ok(Some(body));
        }
    }

    Ok(None)
}

/// Every sheet of the repairs workbook with its body row count.
pub fn sheet_overview(path: &Path) -> AppResult<Vec<(String, usize)>> {
    let sheets = read_workbook(path)?;
    Ok(sheets
        .into_iter()
        .map(|(name, grid)| (name, grid.len().saturating_sub(1)))
        .collect())
}

/// Replace one day sheet wholesale and rewrite the workbook. Creates the
/// workbook or the sheet when missing; all other sheets are carried over
/// untouched.
pub fn replace_sheet(path: &Path, name: &str, body: Grid) -> AppResult<()> {
    let mut sheets = read_workbook(path)?;
    let new_grid = with_headers(body);

    match sheets.iter_mut().find(|(n, _)| n == name) {
        Some((_, grid)) => *grid = new_grid,
        None => sheets.push((name.to_string(), new_grid)),
    }

    write_workbook(path, &sheets)
}

/// Recompute the sequence number column for a whole sheet: the counter
/// advances on every row carrying a vehicle id, and continuation or total
/// rows stay blank.
pub fn renumber(body: &mut Grid) {
    let mut counter = 0i64;

    for row in body.iter_mut() {
        if row.len() < DAY_HEADERS.len() {
            row.resize(DAY_HEADERS.len(), Cell::Empty);
        }

        if row[COL_VEHICLE].is_blank() {
            row[COL_SEQ] = Cell::Empty;
        } else {
            counter += 1;
            row[COL_SEQ] = Cell::number(counter);
        }
    }
}

fn with_headers(body: Grid) -> Grid {
    let header_row: Vec<Cell> = DAY_HEADERS.iter().map(|h| Cell::text(h)).collect();
    let mut grid = Vec::with_capacity(body.len() + 1);
    grid.push(header_row);
    grid.extend(body);
    grid
}
