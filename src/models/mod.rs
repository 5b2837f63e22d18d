pub mod history_row;
pub mod log_entry;
pub mod repair_item;
pub mod vehicle_group;

pub use history_row::HistoryRow;
pub use log_entry::LogEntry;
pub use repair_item::RepairItem;
pub use vehicle_group::{GroupItem, VehicleGroup};
