use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::cli::{
    handle_add, handle_balance, handle_budget_command, handle_category_command, handle_history,
    handle_stats, handle_summary, AddArgs, BudgetCommands, CategoryCommands,
};
use pocket_ledger::config::{LedgerPaths, Settings};
use pocket_ledger::logging::init_tracing;
use pocket_ledger::models::{MonthPeriod, TransactionKind};
use pocket_ledger::services::LedgerService;
use pocket_ledger::storage::JsonStore;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal income and expense ledger",
    long_about = "Records income and expenses in a local JSON file, shows the running \
                  balance, per-category statistics by month, and spending against a \
                  monthly budget."
)]
struct Cli {
    /// Ledger data file (overrides settings and the default location)
    #[arg(long, global = true, env = "POCKET_LEDGER_FILE")]
    file: Option<PathBuf>,

    /// Log storage activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income or expense
    Add(AddArgs),

    /// Show the current balance
    Balance,

    /// List transactions, most recent first
    #[command(alias = "list")]
    History {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<MonthPeriod>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Per-category totals for a month
    Stats {
        /// Month (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<MonthPeriod>,
        /// Only "income" or "expense"
        #[arg(short, long)]
        kind: Option<TransactionKind>,
    },

    /// Income, expenses and budget for a month
    Summary {
        /// Month (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<MonthPeriod>,
    },

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Custom category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = LedgerPaths::new();
    let settings = Settings::load_or_create(&paths)?;
    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.data_file(&paths));

    let mut service = LedgerService::open(JsonStore::new(&data_file))?
        .with_low_budget_percent(settings.low_budget_threshold_percent);

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut service, &settings, args)?,
        Some(Commands::Balance) => handle_balance(&service, &settings)?,
        Some(Commands::History { month, limit }) => {
            handle_history(&service, &settings, month, limit)?
        }
        Some(Commands::Stats { month, kind }) => handle_stats(&service, &settings, month, kind)?,
        Some(Commands::Summary { month }) => handle_summary(&service, &settings, month)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut service, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut service, cmd)?,
        Some(Commands::Config) => {
            println!("pocket-ledger configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", data_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  History limit:        {}", settings.history_limit);
            println!(
                "  Low budget threshold: {}%",
                settings.low_budget_threshold_percent
            );
        }
        None => {
            println!("pocket-ledger - personal income and expense ledger");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
