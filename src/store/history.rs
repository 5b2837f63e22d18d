//! Cumulative repair history ledger: a single-sheet workbook where each row
//! is one aggregated (area, vehicle, date) group. Rows are only ever
//! appended, with tuple deduplication keeping the first occurrence.

use crate::errors::AppResult;
use crate::models::HistoryRow;
use crate::store::sheet::{Cell, Grid, read_workbook, write_workbook};
use std::collections::HashSet;
use std::path::Path;

pub const HISTORY_HEADERS: [&str; 5] =
    ["Area", "Vehicle ID", "Date", "Descriptions", "Total Cost (ugx)"];

const SHEET_NAME: &str = "History";

/// Load the ledger rows. A missing file is an empty ledger.
pub fn load(path: &Path) -> AppResult<Vec<HistoryRow>> {
    let sheets = read_workbook(path)?;

    let Some((_, grid)) = sheets.into_iter().next() else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for row in grid.iter().skip(1) {
        let cell = |i: usize| row.get(i).cloned().unwrap_or(Cell::Empty);

        rows.push(HistoryRow {
            area: cell(0).display(),
            vehicle_id: cell(1).display(),
            date: cell(2).display(),
            descriptions: cell(3).display(),
            total_cost: cell(4).as_cost()?,
        });
    }

    Ok(rows)
}

/// Append new rows, deduplicate on the full tuple keeping first occurrence,
/// and rewrite the ledger. Returns (appended, skipped as duplicate).
pub fn append(path: &Path, new_rows: &[HistoryRow]) -> AppResult<(usize, usize)> {
    let existing = load(path)?;

    let mut seen: HashSet<_> = HashSet::new();
    let mut kept: Vec<HistoryRow> = Vec::with_capacity(existing.len() + new_rows.len());

    for row in existing {
        if seen.insert(row.dedup_key()) {
            kept.push(row);
        }
    }

    let mut appended = 0;
    let mut skipped = 0;

    for row in new_rows {
        if seen.insert(row.dedup_key()) {
            kept.push(row.clone());
            appended += 1;
        } else {
            skipped += 1;
        }
    }

    let mut grid: Grid = Vec::with_capacity(kept.len() + 1);
    grid.push(HISTORY_HEADERS.iter().map(|h| Cell::text(h)).collect());

    for row in &kept {
        grid.push(vec![
            Cell::text(&row.area),
            Cell::text(&row.vehicle_id),
            Cell::text(&row.date),
            Cell::text(&row.descriptions),
            Cell::number(row.total_cost),
        ]);
    }

    write_workbook(path, &[(SHEET_NAME.to_string(), grid)])?;

    Ok((appended, skipped))
}
