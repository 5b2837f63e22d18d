/// One repair line inside a vehicle group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupItem {
    pub description: String,
    pub cost: i64,
}

/// All rows describing one vehicle visit: the lead row fields, the
/// continuation lines, and the synthetic total row when present.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleGroup {
    pub seq: u32,
    pub area: String,
    pub vehicle_id: String,
    pub date: String,
    pub items: Vec<GroupItem>,
    /// Sum of the group's "Total Cost (ugx)" rows, when any exist.
    pub total_row_cost: Option<i64>,
}

impl VehicleGroup {
    pub fn new(seq: u32, area: &str, vehicle_id: &str, date: &str) -> Self {
        Self {
            seq,
            area: area.to_string(),
            vehicle_id: vehicle_id.to_string(),
            date: date.to_string(),
            items: Vec::new(),
            total_row_cost: None,
        }
    }

    /// Sum over the repair lines, total rows excluded.
    pub fn items_total(&self) -> i64 {
        self.items.iter().map(|i| i.cost).sum()
    }

    /// The figure the memo reports for this group: the recorded total row
    /// when one exists, otherwise the sum of the repair lines.
    pub fn reported_total(&self) -> i64 {
        self.total_row_cost.unwrap_or_else(|| self.items_total())
    }

    /// Non-blank descriptions joined with ", ".
    pub fn joined_descriptions(&self) -> String {
        self.items
            .iter()
            .map(|i| i.description.trim())
            .filter(|d| !d.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
