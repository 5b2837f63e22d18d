use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{audit, day_sheet, reference};
use crate::utils::date::{sheet_name_for, today};

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the data directory with the repairs workbook and both registers
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARE CONFIGURATION
    //
    // Config::init_all creates:
    //   ~/.fleetrepair/
    //   ~/.fleetrepair/fleetrepair.conf
    // and the configured data directory.
    //

    if let Some(custom) = &cli.data_dir {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom) = &cli.data_dir {
        cfg.data_dir = custom.clone();
    }

    println!("⚙️  Initializing fleetrepair…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Data dir    : {}", cfg.data_dir_path().display());

    //
    // 2️⃣ SEED THE REGISTERS
    //
    reference::seed_list(&cfg.areas_file(), "Area")?;
    reference::seed_list(&cfg.vehicles_file(), "Vehicle")?;

    //
    // 3️⃣ REPAIRS WORKBOOK (today's day sheet, empty)
    //
    if !cfg.repairs_file().exists() {
        day_sheet::replace_sheet(&cfg.repairs_file(), &sheet_name_for(today()), Vec::new())?;
    }

    println!("✅ Workbooks ready in {}", cfg.data_dir_path().display());

    //
    // 4️⃣ INTERNAL LOG (non-blocking)
    //
    audit::record(
        &cfg,
        "init",
        "Data directory initialized",
        &format!(
            "Data directory initialized at {}",
            cfg.data_dir_path().display()
        ),
    );

    println!("🎉 fleetrepair initialization completed!");
    Ok(())
}
