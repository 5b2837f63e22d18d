// src/export/model.rs

use serde::Serialize;

/// Flat record for one day-sheet row.
#[derive(Serialize, Clone, Debug)]
pub struct RepairExport {
    pub no: Option<u32>,
    pub area: String,
    pub vehicle_id: String,
    pub date: String,
    pub description: String,
    pub cost: Option<i64>,
}

/// Headers for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["no", "area", "vehicle_id", "date", "description", "cost"]
}

/// Convert one record into a row of strings (for XLSX re-typing).
pub(crate) fn repair_to_row(r: &RepairExport) -> Vec<String> {
    vec![
        r.no.map(|n| n.to_string()).unwrap_or_default(),
        r.area.clone(),
        r.vehicle_id.clone(),
        r.date.clone(),
        r.description.clone(),
        r.cost.map(|c| c.to_string()).unwrap_or_default(),
    ]
}
