//! Vehicle grouping over a day sheet.
//!
//! A sheet row either opens a new vehicle group (it carries a sequence
//! number or a vehicle id), continues the current one (description/cost
//! only), or closes a batch with a "Total Cost (ugx)" row. Blank lead
//! fields are forward-filled from the nearest group above, so groups can
//! be joined structurally instead of relying on row positions.

use crate::errors::AppResult;
use crate::models::{GroupItem, VehicleGroup};
use crate::store::day_sheet::{COL_AREA, COL_COST, COL_DATE, COL_DESCRIPTION, COL_SEQ, COL_VEHICLE, TOTAL_LABEL};
use crate::store::sheet::{Cell, Grid};

/// Scan the body rows top to bottom and build one group per sequence
/// number. Rows above the first group belong to nothing and are dropped.
pub fn build_groups(body: &Grid) -> AppResult<Vec<VehicleGroup>> {
    let mut groups: Vec<VehicleGroup> = Vec::new();
    let mut current: Option<VehicleGroup> = None;

    for row in body {
        let cell = |i: usize| row.get(i).cloned().unwrap_or(Cell::Empty);

        let seq_cell = cell(COL_SEQ);
        let vehicle_cell = cell(COL_VEHICLE);
        let description = cell(COL_DESCRIPTION).display();
        let cost_cell = cell(COL_COST);

        let opens_group = !seq_cell.is_blank() || !vehicle_cell.is_blank();

        if opens_group {
            if let Some(done) = current.take() {
                groups.push(done);
            }

            let seq = match seq_cell.as_cost() {
                Ok(n) if n > 0 => n as u32,
                _ => groups.len() as u32 + 1,
            };

            current = Some(VehicleGroup::new(
                seq,
                cell(COL_AREA).display().trim(),
                vehicle_cell.display().trim(),
                cell(COL_DATE).display().trim(),
            ));
        }

        let Some(group) = current.as_mut() else {
            continue;
        };

        if description.trim() == TOTAL_LABEL {
            let total = cost_cell.as_cost()?;
            group.total_row_cost = Some(group.total_row_cost.unwrap_or(0) + total);
            continue;
        }

        // Fully blank continuation lines contribute nothing
        if description.trim().is_empty() && cost_cell.is_blank() {
            continue;
        }

        group.items.push(GroupItem {
            description: description.trim().to_string(),
            cost: cost_cell.as_cost()?,
        });
    }

    if let Some(done) = current.take() {
        groups.push(done);
    }

    Ok(groups)
}
