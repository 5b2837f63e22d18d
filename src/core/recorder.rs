//! High-level business logic for the `submit` command.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::RepairItem;
use crate::store::day_sheet::{TOTAL_LABEL, load_sheet, renumber, replace_sheet};
use crate::store::sheet::{Cell, Grid};
use crate::store::{audit, reference};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use chrono::NaiveDate;

pub struct RecorderLogic;

impl RecorderLogic {
    /// Record one repair entry for the current day's sheet: one row per
    /// surviving description/cost pair plus a total row over the raw costs,
    /// then renumber and rewrite the sheet.
    ///
    /// Returns the number of repair lines written (total row excluded).
    pub fn submit(
        cfg: &Config,
        area: &str,
        vehicle: &str,
        repair_date: NaiveDate,
        items: &[RepairItem],
    ) -> AppResult<usize> {
        // ------------------------------------------------
        // 1️⃣ Validate against the reference lists
        // ------------------------------------------------
        let areas = reference::load_list(&cfg.areas_file(), "Area")?;
        if !areas.is_empty() && !areas.iter().any(|a| a == area) {
            return Err(AppError::UnknownArea(area.to_string()));
        }

        let vehicles = reference::load_list(&cfg.vehicles_file(), "Vehicle")?;
        if !vehicles.is_empty() && !vehicles.iter().any(|v| v == vehicle) {
            return Err(AppError::UnknownVehicle(vehicle.to_string()));
        }

        // ------------------------------------------------
        // 2️⃣ Filter blank pairs; the total stays a sum over the raw input
        // ------------------------------------------------
        let surviving: Vec<&RepairItem> = items.iter().filter(|i| !i.is_blank()).collect();
        let raw_total: i64 = items.iter().map(|i| i.raw_cost()).sum();

        if surviving.is_empty() {
            warning("Nothing to record: every repair line is blank.");
            return Ok(0);
        }

        // ------------------------------------------------
        // 3️⃣ Build the rows: lead row, continuation rows, total row
        // ------------------------------------------------
        let date_cell = date::cell_date(repair_date);
        let mut new_rows: Grid = Vec::with_capacity(surviving.len() + 1);

        for (i, item) in surviving.iter().enumerate() {
            let cost_cell = match item.cost {
                Some(c) => Cell::number(c),
                None => Cell::Empty,
            };

            if i == 0 {
                new_rows.push(vec![
                    Cell::Empty,
                    Cell::text(area),
                    Cell::text(vehicle),
                    Cell::text(&date_cell),
                    Cell::text(&item.description),
                    cost_cell,
                ]);
            } else {
                new_rows.push(vec![
                    Cell::Empty,
                    Cell::Empty,
                    Cell::Empty,
                    Cell::Empty,
                    Cell::text(&item.description),
                    cost_cell,
                ]);
            }
        }

        new_rows.push(vec![
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::text(TOTAL_LABEL),
            Cell::number(raw_total),
        ]);

        // ------------------------------------------------
        // 4️⃣ Append to the day sheet, renumber, rewrite
        // ------------------------------------------------
        let path = cfg.repairs_file();
        let sheet = date::sheet_name_for(date::today());

        let mut body = load_sheet(&path, &sheet)?.unwrap_or_default();
        body.extend(new_rows);
        renumber(&mut body);
        replace_sheet(&path, &sheet, body)?;

        let written = surviving.len();

        audit::record(
            cfg,
            "submit",
            &sheet,
            &format!("{written} repair line(s) for vehicle {vehicle}"),
        );

        success(format!(
            "Recorded {} repair line(s) for vehicle {} on sheet {}.",
            written, vehicle, sheet
        ));

        Ok(written)
    }
}
