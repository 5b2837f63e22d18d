//! History aggregation: reduce a day sheet to one row per vehicle group
//! and append the rows to the cumulative ledger.

use crate::config::Config;
use crate::core::groups::build_groups;
use crate::errors::AppResult;
use crate::models::HistoryRow;
use crate::store::sheet::Grid;
use crate::store::{audit, day_sheet, history};
use crate::ui::messages::{info, success};

pub struct HistoryLogic;

impl HistoryLogic {
    /// One ledger row per group: descriptions joined with ", ", cost summed
    /// over the repair lines (synthetic total rows excluded).
    pub fn rows_for(body: &Grid) -> AppResult<Vec<HistoryRow>> {
        let groups = build_groups(body)?;
        Ok(groups.iter().map(HistoryRow::from_group).collect())
    }

    /// Aggregate the sheet and append to the ledger. An absent or empty
    /// sheet contributes nothing and is not an error.
    pub fn update(cfg: &Config, sheet: &str) -> AppResult<(usize, usize)> {
        let Some(body) = day_sheet::load_sheet(&cfg.repairs_file(), sheet)? else {
            info(format!("No day sheet named {sheet}: history unchanged."));
            return Ok((0, 0));
        };

        let rows = Self::rows_for(&body)?;
        if rows.is_empty() {
            info(format!("Day sheet {sheet} holds no vehicle groups: history unchanged."));
            return Ok((0, 0));
        }

        let (appended, skipped) = history::append(&cfg.history_file(), &rows)?;

        audit::record(
            cfg,
            "history",
            sheet,
            &format!("{appended} row(s) appended, {skipped} duplicate(s) skipped"),
        );

        success(format!(
            "History updated from sheet {}: {} new row(s), {} duplicate(s) skipped.",
            sheet, appended, skipped
        ));

        Ok((appended, skipped))
    }
}
