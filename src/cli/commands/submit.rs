use crate::cli::parser::Commands;
use crate::core::recorder::RecorderLogic;
use crate::errors::{AppError, AppResult};
use crate::models::RepairItem;
use crate::utils::date;

/// Record a repair entry into today's day sheet.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Submit {
        area,
        vehicle,
        date: repair_date,
        item,
    } = cmd
    {
        //
        // 1. Parse repair date (default: first day of the previous month)
        //
        let d = match repair_date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::first_day_of_previous_month(date::today()),
        };

        //
        // 2. Parse items (DESCRIPTION[:COST])
        //
        let items: Vec<RepairItem> = item.iter().map(|s| RepairItem::parse(s)).collect();

        //
        // 3. Record
        //
        RecorderLogic::submit(cfg, area, vehicle, d, &items)?;
    }

    Ok(())
}
