//! Low-level workbook I/O.
//!
//! Workbooks are read with calamine and rewritten whole with rust_xlsxwriter:
//! the writer cannot edit files in place, so every mutation is a full
//! read-modify-rewrite cycle (last writer wins). All writes reapply the
//! uniform sheet formatting: thin borders, wrapped text, top alignment and
//! content-sized column widths.

use crate::errors::{AppError, AppResult};
use crate::utils::money::{format_thousands, parse_amount};
use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

/// One cell of a sheet. Costs and sequence numbers are numbers; everything
/// else is text. Formatting is applied only when writing.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

pub type Grid = Vec<Vec<Cell>>;

impl Cell {
    pub fn text(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }

    pub fn number(n: i64) -> Self {
        Cell::Number(n as f64)
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// The value as the user sees it: whole numbers with thousands
    /// separators, text verbatim, blanks empty.
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 {
                    format_thousands(*n as i64)
                } else {
                    n.to_string()
                }
            }
        }
    }

    /// Interpret the cell as an amount. Blank counts as zero; text must
    /// parse once thousands separators are stripped.
    pub fn as_cost(&self) -> AppResult<i64> {
        match self {
            Cell::Empty => Ok(0),
            Cell::Number(n) => Ok(n.round() as i64),
            Cell::Text(s) => Ok(parse_amount(s)?.unwrap_or(0)),
        }
    }

    fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::text(s),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Text(b.to_string()),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) => Cell::Text(s.clone()),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(format!("{e:?}")),
        }
    }
}

/// Read every sheet of a workbook, in file order. A missing file reads as
/// an empty workbook so first use can initialize it.
pub fn read_workbook(path: &Path) -> AppResult<Vec<(String, Grid)>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| AppError::Workbook(format!("{}: {e}", path.display())))?;

    let names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(names.len());

    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| AppError::Workbook(format!("sheet '{name}': {e}")))?;

        let grid: Grid = range
            .rows()
            .map(|row| row.iter().map(Cell::from_data).collect())
            .collect();

        sheets.push((name, grid));
    }

    Ok(sheets)
}

/// Rewrite a whole workbook, applying the uniform formatting pass to every
/// sheet. The first row of each grid is treated as the header row.
pub fn write_workbook(path: &Path, sheets: &[(String, Grid)]) -> AppResult<()> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_text_wrap()
        .set_align(FormatAlign::Top);

    let text_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_text_wrap()
        .set_align(FormatAlign::Top);

    let number_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_text_wrap()
        .set_align(FormatAlign::Top)
        .set_num_format("#,##0");

    for (name, grid) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name).map_err(to_wb_error)?;

        let col_count = grid.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut col_widths = vec![0usize; col_count];

        for (row_index, row) in grid.iter().enumerate() {
            let row_format = if row_index == 0 {
                &header_format
            } else {
                &text_format
            };

            for (col_index, cell) in row.iter().enumerate() {
                let row = row_index as u32;
                let col = col_index as u16;

                match cell {
                    Cell::Number(n) if row_index > 0 => {
                        worksheet
                            .write_with_format(row, col, *n, &number_format)
                            .map_err(to_wb_error)?;
                    }
                    Cell::Number(n) => {
                        worksheet
                            .write_with_format(row, col, *n, row_format)
                            .map_err(to_wb_error)?;
                    }
                    Cell::Text(s) => {
                        worksheet
                            .write_with_format(row, col, s.as_str(), row_format)
                            .map_err(to_wb_error)?;
                    }
                    // Blank cells still get their borders painted
                    Cell::Empty => {
                        worksheet
                            .write_with_format(row, col, "", row_format)
                            .map_err(to_wb_error)?;
                    }
                }

                col_widths[col_index] = col_widths[col_index].max(cell.display().len());
            }
        }

        for (col, max_len) in col_widths.iter().enumerate() {
            let width = (*max_len + 3).clamp(15, 60);
            worksheet
                .set_column_width(col as u16, width as f64)
                .map_err(to_wb_error)?;
        }
    }

    workbook.save(path).map_err(to_wb_error)?;
    Ok(())
}

fn to_wb_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Workbook(e.to_string())
}
