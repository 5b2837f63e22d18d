use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::EditorLogic;
use crate::errors::AppResult;
use crate::utils::date::{sheet_name_for, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        sheet,
        file,
        editor,
    } = cmd
    {
        let name = sheet.clone().unwrap_or_else(|| sheet_name_for(today()));

        match file {
            Some(csv) => EditorLogic::apply_file(cfg, &name, csv)?,
            None => EditorLogic::edit_with_editor(cfg, &name, editor.as_deref())?,
        }
    }

    Ok(())
}
