use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::core::editor::resolve_editor;
use crate::errors::AppResult;

use crate::cli::parser::Commands;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            ConfigLogic::print(&path.to_string_lossy())?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let editor_to_use = resolve_editor(editor.as_deref(), &cfg.editor);

            match ConfigLogic::edit(&path.to_string_lossy(), editor) {
                Ok(()) => {
                    println!(
                        "✅ Configuration file edited successfully using '{}'",
                        editor_to_use
                    );
                }
                Err(e) => {
                    eprintln!("❌ Failed to edit configuration file: {}", e);
                }
            }
        }
    }

    Ok(())
}
