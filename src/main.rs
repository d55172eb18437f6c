use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error};

use expense_tracker::cli::{handle_expense_command, handle_history_command, ExpenseCommands, MenuShell};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::logging::{init_logger, level_for};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Record dated, categorized expenses, review and delete them, \
                  see totals per category, and export everything to CSV or Excel. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Directory holding expenses.json and exports/
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DIR")]
    data_dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Run the numbered text menu
    Menu,

    /// Launch the form window
    #[command(alias = "ui")]
    Tui,

    /// Show recent add/delete history
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings, with defaults filled in, to settings.json
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(level_for(cli.verbose));

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    debug!(base_dir = %paths.base_dir().display(), "resolved data directory");
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);

    // A corrupt file is reported and left alone rather than overwritten
    if let Err(e) = storage.load_all() {
        if e.is_parse() {
            error!(error = %e, "refusing to start with unreadable data file");
            eprintln!("Error: {}", e);
            eprintln!("Fix or move the file, then try again. It has not been modified.");
            std::process::exit(1);
        }
        return Err(e.into());
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&mut storage, &settings)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Config { save }) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!("Export directory: {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Export spreadsheet: {}", settings.export_spreadsheet);
            println!("  Audit log enabled:  {}", settings.audit_enabled);

            if save {
                settings.save(&paths)?;
                println!();
                println!("Saved settings to {}", paths.settings_file().display());
            }
        }
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            let mut menu = MenuShell::new(&mut storage, &settings, stdin.lock(), io::stdout());
            menu.run()?;
        }
    }

    Ok(())
}
