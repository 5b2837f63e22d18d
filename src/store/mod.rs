pub mod audit;
pub mod day_sheet;
pub mod history;
pub mod reference;
pub mod sheet;
