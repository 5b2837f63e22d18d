use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::memo::MemoLogic;
use crate::errors::AppResult;
use crate::utils::date::{sheet_name_for, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Memo { sheet, file } = cmd {
        let name = sheet.clone().unwrap_or_else(|| sheet_name_for(today()));
        MemoLogic::generate(cfg, &name, file.as_deref())?;
    }

    Ok(())
}
