use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_budget_command, handle_report_command, handle_transaction_command, BudgetCommands,
    ReportCommands, TransactionCommands,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::models::{suggested_categories, Month, TransactionKind};
use expense_tracker::reports::Dashboard;
use expense_tracker::services::{seed_demo_data, Ledger};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track income and expenses with category budgets",
    long_about = "Expense Tracker records income and expense transactions, keeps \
                  per-category monthly budget limits, and reports spending, \
                  budget overruns and profit/loss from the command line."
)]
struct Cli {
    /// Ledger file to use instead of the one in the data directory
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Totals, budget alerts and recent transactions at a glance
    Dashboard,

    /// List the months that have transactions, newest first
    Months,

    /// Show the suggested categories
    Categories {
        /// Only this kind (income or expense)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Replace the ledger with demo data
    Demo,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = TrackerPaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_ledger_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;

    let level = if cli.verbose {
        "debug"
    } else {
        settings.log_level.as_str()
    };
    expense_tracker::logging::init(level);

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            let mut ledger = Ledger::open_file(paths.ledger_file())?;
            handle_transaction_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let mut ledger = Ledger::open_file(paths.ledger_file())?;
            handle_budget_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let ledger = Ledger::open_file(paths.ledger_file())?;
            handle_report_command(&ledger, &settings, cmd)?;
        }
        Some(Commands::Dashboard) => {
            let ledger = Ledger::open_file(paths.ledger_file())?;
            let dashboard = Dashboard::generate(&ledger, settings.recent_count);
            print!("{}", dashboard.format_terminal(&settings.currency_symbol));
        }
        Some(Commands::Months) => {
            let ledger = Ledger::open_file(paths.ledger_file())?;
            let months = ledger.available_months();
            if months.is_empty() {
                println!("No transactions recorded yet.");
            }
            let current = Month::current();
            for month in months {
                let marker = if month == current { " (current)" } else { "" };
                println!("{}  {}{}", month, month.display_long(), marker);
            }
        }
        Some(Commands::Categories { kind }) => {
            let kinds = match kind {
                Some(kind) => vec![expense_tracker::cli::parse_kind(&kind)?],
                None => vec![TransactionKind::Income, TransactionKind::Expense],
            };
            for kind in kinds {
                println!("{} categories:", kind);
                for category in suggested_categories(kind) {
                    println!("  {}", category);
                }
            }
        }
        Some(Commands::Demo) => {
            let mut ledger = Ledger::open_file(paths.ledger_file())?;
            seed_demo_data(&mut ledger)?;
            println!(
                "Loaded demo data: {} transactions, {} budget limits",
                ledger.len(),
                ledger.budget_limits().len()
            );
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Recent count:    {}", settings.recent_count);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("Expense Tracker - income, expenses and budgets");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense demo' to load example data.");
        }
    }

    Ok(())
}
