//! Whole-sheet editing via a CSV round-trip.
//!
//! The sheet is dumped to CSV, edited externally, then read back and
//! persisted wholesale: the edited table replaces the day sheet, no merge
//! and no validation. Only the formatting pass is reapplied on save, so
//! later consumers see exactly what was edited.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::audit;
use crate::store::day_sheet::{DAY_HEADERS, load_sheet, replace_sheet};
use crate::store::sheet::{Cell, Grid};
use crate::ui::messages::{info, success};
use crate::utils::money::parse_amount;
use std::env;
use std::path::Path;
use std::process::Command;

pub struct EditorLogic;

impl EditorLogic {
    /// Dump the sheet to a temp CSV, open it in the editor, and persist the
    /// edited content on a clean editor exit.
    pub fn edit_with_editor(
        cfg: &Config,
        sheet: &str,
        requested_editor: Option<&str>,
    ) -> AppResult<()> {
        let body = load_sheet(&cfg.repairs_file(), sheet)?.unwrap_or_default();

        let tmp = env::temp_dir().join(format!("fleetrepair_edit_{sheet}.csv"));
        Self::dump_csv(&body, &tmp)?;

        let editor = resolve_editor(requested_editor, &cfg.editor);
        info(format!("Opening {} with '{}'", tmp.display(), editor));

        let status = Command::new(&editor)
            .arg(&tmp)
            .status()
            .map_err(|e| AppError::Config(format!("failed to launch editor '{editor}': {e}")))?;

        if !status.success() {
            return Err(AppError::Other(format!(
                "editor '{editor}' exited with failure; sheet left unchanged"
            )));
        }

        let edited = Self::read_csv(&tmp)?;
        Self::save(cfg, sheet, edited)
    }

    /// Replace the sheet with the contents of an already-edited CSV file.
    pub fn apply_file(cfg: &Config, sheet: &str, file: &str) -> AppResult<()> {
        let edited = Self::read_csv(Path::new(file))?;
        Self::save(cfg, sheet, edited)
    }

    fn save(cfg: &Config, sheet: &str, body: Grid) -> AppResult<()> {
        replace_sheet(&cfg.repairs_file(), sheet, body)?;

        audit::record(cfg, "edit", sheet, "Day sheet replaced with edited table");
        success(format!("Day sheet {} saved.", sheet));
        Ok(())
    }

    fn dump_csv(body: &Grid, path: &Path) -> AppResult<()> {
        let mut wtr = csv::Writer::from_path(path)
            .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

        wtr.write_record(DAY_HEADERS)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

        for row in body {
            let record: Vec<String> = row.iter().map(|c| c.display()).collect();
            wtr.write_record(&record)
                .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
        }

        wtr.flush()
            .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
        Ok(())
    }

    /// Read edited rows back. Cells that parse as amounts become numbers
    /// again; everything else stays text, exactly as typed.
    fn read_csv(path: &Path) -> AppResult<Grid> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| AppError::Export(format!("CSV read error: {e}")))?;

        let mut body: Grid = Vec::new();

        for record in rdr.records() {
            let record = record.map_err(|e| AppError::Export(format!("CSV read error: {e}")))?;
            let row: Vec<Cell> = record.iter().map(csv_cell).collect();
            body.push(row);
        }

        Ok(body)
    }
}

fn csv_cell(s: &str) -> Cell {
    if s.trim().is_empty() {
        return Cell::Empty;
    }
    match parse_amount(s) {
        Ok(Some(n)) => Cell::number(n),
        _ => Cell::Text(s.to_string()),
    }
}

/// Editor resolution order: explicit request, configured editor, $EDITOR,
/// $VISUAL, then the platform default.
pub fn resolve_editor(requested: Option<&str>, configured: &str) -> String {
    if let Some(ed) = requested {
        return ed.to_string();
    }
    if !configured.trim().is_empty() {
        return configured.to_string();
    }

    env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}
