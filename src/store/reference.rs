//! Reference list loading: areas and vehicles are plain one-column
//! workbooks maintained outside this tool.

use crate::errors::{AppError, AppResult};
use crate::store::sheet::{Cell, Grid, read_workbook, write_workbook};
use std::path::Path;

/// Read the named column from the first sheet: blank cells dropped,
/// duplicates dropped keeping first occurrence.
pub fn load_list(path: &Path, column: &str) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Err(AppError::MissingReference(path.display().to_string()));
    }

    let sheets = read_workbook(path)?;
    let Some((name, grid)) = sheets.into_iter().next() else {
        return Err(AppError::Workbook(format!(
            "{}: workbook has no sheets",
            path.display()
        )));
    };

    let Some(header_row) = grid.first() else {
        return Ok(Vec::new());
    };

    let col = header_row
        .iter()
        .position(|c| c.display().trim().eq_ignore_ascii_case(column))
        .ok_or_else(|| {
            AppError::Workbook(format!(
                "{}: column '{column}' not found in sheet '{name}'",
                path.display()
            ))
        })?;

    let mut values = Vec::new();
    for row in grid.iter().skip(1) {
        let value = row.get(col).map(|c| c.display()).unwrap_or_default();
        let value = value.trim();
        if !value.is_empty() && !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }

    Ok(values)
}

/// Create an empty reference workbook with just the header when missing.
pub fn seed_list(path: &Path, column: &str) -> AppResult<()> {
    if path.exists() {
        return Ok(());
    }

    let grid: Grid = vec![vec![Cell::text(column)]];
    write_workbook(path, &[(column.to_string(), grid)])
}
