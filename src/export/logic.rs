// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::RepairExport;
use crate::store::audit;
use crate::store::day_sheet::{
    self, COL_AREA, COL_COST, COL_DATE, COL_DESCRIPTION, COL_SEQ, COL_VEHICLE,
};
use crate::store::sheet::Cell;
use crate::ui::messages::warning;
use crate::utils::date::{sheet_name_for, today};

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one day sheet.
    ///
    /// - `format`: "csv" | "json" | "xlsx"
    /// - `file`: absolute path of the output file
    /// - `sheet`: day-sheet name (`DD-MM-YYYY`), today's sheet when omitted
    pub fn export(
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        sheet: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let sheet_name = sheet.clone().unwrap_or_else(|| sheet_name_for(today()));

        let rows = match day_sheet::load_sheet(&cfg.repairs_file(), &sheet_name)? {
            Some(body) => body,
            None => {
                warning(format!("⚠️  No day sheet named '{sheet_name}' found."));
                return Ok(());
            }
        };

        let records = rows_to_exports(&rows)?;

        if records.is_empty() {
            warning(format!("⚠️  Day sheet '{sheet_name}' has no rows to export."));
            return Ok(());
        }

        let label = format.as_str();

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
            ExportFormat::Xlsx => export_xlsx(&records, path)?,
        }

        audit::record(
            cfg,
            "export",
            file,
            &format!("Day sheet {sheet_name} exported as {label}"),
        );

        Ok(())
    }
}

/// Mapping sheet row → RepairExport (reused for every format).
fn rows_to_exports(rows: &[Vec<Cell>]) -> AppResult<Vec<RepairExport>> {
    let mut records = Vec::new();

    for row in rows {
        let cell = |i: usize| row.get(i).cloned().unwrap_or(Cell::Empty);

        let no = match cell(COL_SEQ) {
            Cell::Empty => None,
            other => match other.as_cost()? {
                n if n > 0 => Some(n as u32),
                _ => None,
            },
        };

        let cost = match cell(COL_COST) {
            Cell::Empty => None,
            other => Some(other.as_cost()?),
        };

        records.push(RepairExport {
            no,
            area: cell(COL_AREA).display(),
            vehicle_id: cell(COL_VEHICLE).display(),
            date: cell(COL_DATE).display(),
            description: cell(COL_DESCRIPTION).display(),
            cost,
        });
    }

    Ok(records)
}
