use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fleetrepair
/// CLI application to track vehicle repair expenses in xlsx workbooks
#[derive(Parser)]
#[command(
    name = "fleetrepair",
    version = env!("CARGO_PKG_VERSION"),
    about = "A vehicle repair expense tracker: day sheets, payment memos and repair history in xlsx",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or custom locations)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print entries from the internal log")]
        print: bool,
    },

    /// Record repair items for one vehicle into today's day sheet
    Submit {
        /// Operational area of the vehicle
        #[arg(long, help = "Operational area (checked against the area register)")]
        area: String,

        /// Vehicle registration
        #[arg(
            long = "vehicle",
            help = "Vehicle ID (checked against the vehicle register)"
        )]
        vehicle: String,

        /// Repair date (YYYY-MM-DD)
        #[arg(
            long,
            help = "Repair date (YYYY-MM-DD); defaults to the first day of last month"
        )]
        date: Option<String>,

        /// Repair items, repeatable
        #[arg(
            long = "item",
            value_name = "DESC[:COST]",
            help = "Repair item as DESCRIPTION or DESCRIPTION:COST (repeatable)"
        )]
        item: Vec<String>,
    },

    /// Show a day sheet, or list all day sheets
    List {
        #[arg(
            long,
            help = "Day sheet to show (DD-MM-YYYY); today's sheet when omitted"
        )]
        sheet: Option<String>,

        #[arg(long = "sheets", help = "List all day sheets with their row counts")]
        sheets: bool,
    },

    /// Edit a whole day sheet and save it back
    Edit {
        #[arg(
            long,
            help = "Day sheet to edit (DD-MM-YYYY); today's sheet when omitted"
        )]
        sheet: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Apply an edited CSV file instead of opening an editor"
        )]
        file: Option<String>,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Generate the payment request memo for a day sheet
    Memo {
        #[arg(
            long,
            help = "Day sheet to summarize (DD-MM-YYYY); today's sheet when omitted"
        )]
        sheet: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Write an additional copy of the memo to this absolute path"
        )]
        file: Option<String>,
    },

    /// Append a day sheet's vehicle groups to the history ledger
    History {
        #[arg(
            long,
            help = "Day sheet to record (DD-MM-YYYY); today's sheet when omitted"
        )]
        sheet: Option<String>,
    },

    /// Create a backup copy of the data files
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export one day sheet
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            help = "Day sheet to export (DD-MM-YYYY); today's sheet when omitted"
        )]
        sheet: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
