use crate::models::vehicle_group::VehicleGroup;

/// One aggregated (area, vehicle, date) summary in the cumulative ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub area: String,
    pub vehicle_id: String,
    pub date: String,
    pub descriptions: String,
    pub total_cost: i64,
}

impl HistoryRow {
    pub fn from_group(group: &VehicleGroup) -> Self {
        Self {
            area: group.area.clone(),
            vehicle_id: group.vehicle_id.clone(),
            date: group.date.clone(),
            descriptions: group.joined_descriptions(),
            total_cost: group.items_total(),
        }
    }

    /// Deduplication key: the full field tuple, with the cost as a number so
    /// that formatting drift cannot defeat the comparison.
    pub fn dedup_key(&self) -> (String, String, String, String, i64) {
        (
            self.area.clone(),
            self.vehicle_id.clone(),
            self.date.clone(),
            self.descriptions.clone(),
            self.total_cost,
        )
    }
}
