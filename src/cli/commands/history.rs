use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;
use crate::utils::date::{sheet_name_for, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { sheet } = cmd {
        let name = sheet.clone().unwrap_or_else(|| sheet_name_for(today()));
        HistoryLogic::update(cfg, &name)?;
    }

    Ok(())
}
