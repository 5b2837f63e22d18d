use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::day_sheet::{self, DAY_HEADERS};
use crate::utils::date::{sheet_name_for, today};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { sheet, sheets } = cmd {
        if *sheets {
            print_overview(cfg)?;
            return Ok(());
        }

        let name = sheet.clone().unwrap_or_else(|| sheet_name_for(today()));

        let body = match day_sheet::load_sheet(&cfg.repairs_file(), &name)? {
            Some(body) => body,
            None => {
                println!("No day sheet named '{}'.", name);
                return Ok(());
            }
        };

        if body.is_empty() {
            println!("Day sheet '{}' is empty.", name);
            return Ok(());
        }

        let mut table = Table::new(DAY_HEADERS.iter().map(|h| h.to_string()).collect());
        for row in &body {
            table.add_row(row.iter().map(|c| c.display()).collect());
        }

        println!("📋 Day sheet {}:\n", name);
        println!("{}", table.render());
    }

    Ok(())
}

fn print_overview(cfg: &Config) -> AppResult<()> {
    let overview = day_sheet::sheet_overview(&cfg.repairs_file())?;

    if overview.is_empty() {
        println!("No day sheets recorded yet.");
        return Ok(());
    }

    let mut table = Table::new(vec!["Sheet".to_string(), "Rows".to_string()]);
    for (name, rows) in &overview {
        table.add_row(vec![name.clone(), rows.to_string()]);
    }

    println!("📋 Recorded day sheets:\n");
    println!("{}", table.render());
    Ok(())
}
