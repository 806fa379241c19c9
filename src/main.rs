use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_category_command, handle_clear, handle_export, handle_import, handle_settings_command,
    handle_transaction_command, CategoryCommands, SettingsCommands, TransactionCommands,
};
use budget_tracker::config::{AppConfig, BudgetPaths};
use budget_tracker::display::format_summary;
use budget_tracker::export::ExportFormat;
use budget_tracker::logging::init_tracing;
use budget_tracker::models::TransactionKind;
use budget_tracker::services::LedgerStore;
use budget_tracker::storage::{FileSlot, PersistenceSlot};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Record income, expenses and spending categories from the command line. \
                  Totals and the balance are kept up to date, and the ledger is saved \
                  locally after every change."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income entries
    #[command(subcommand, alias = "in")]
    Income(TransactionCommands),

    /// Expense entries
    #[command(subcommand, alias = "out")]
    Expense(TransactionCommands),

    /// Spending categories
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Show totals and balance
    Summary,

    /// Currency and theme
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export the ledger to a file
    Export {
        /// Output file (default: budget-data-YYYY-MM-DD.<format> in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Merge a JSON export into the ledger
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Delete all income, expenses and categories (keeps settings)
    Clear {
        /// Skip the confirmation step
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    paths.ensure_directories()?;
    let config = AppConfig::load_or_create(&paths)?;
    if !paths.config_file().exists() {
        config.save(&paths)?;
    }

    let slot = FileSlot::in_data_dir(&paths, &config.slot_name);
    let mut store = LedgerStore::open_with_rules(slot, config.validation.clone())?;
    store.on_theme_change(|theme| println!("Applied {} theme", theme));

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_transaction_command(&mut store, &config, TransactionKind::Income, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_transaction_command(&mut store, &config, TransactionKind::Expense, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut store, cmd)?;
        }
        Some(Commands::Summary) => {
            print!("{}", format_summary(&store.summary(), store.settings()));
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&mut store, cmd)?;
        }
        Some(Commands::Export {
            output,
            format,
            stdout,
        }) => {
            handle_export(&store, output, format, stdout)?;
        }
        Some(Commands::Import { file }) => {
            handle_import(&mut store, &file)?;
        }
        Some(Commands::Clear { force }) => {
            handle_clear(&mut store, force)?;
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Config file:     {}", paths.config_file().display());
            println!(
                "Ledger slot:     {} ({})",
                store.slot().name(),
                store.slot().path().display()
            );
            println!();
            println!("Validation:");
            println!("  Minimum amount:         {}", config.validation.min_amount);
            println!("  Maximum amount:         {}", config.validation.max_amount);
            println!(
                "  Max description length: {}",
                config.validation.max_description_length
            );
            println!("Display:");
            println!("  Show dates: {}", config.display.show_dates);
        }
        None => {
            println!("Budget tracker - personal income and expense ledger");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget summary' to see your current balance.");
        }
    }

    Ok(())
}
