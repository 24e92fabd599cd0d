use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add_command, handle_budget_command, handle_category_command, handle_currency_command,
    handle_list_command, handle_report_command, AddArgs, BudgetCommands, CategoryCommands,
    CurrencyCommands, ListArgs,
};
use expense_ledger::config::LedgerPaths;
use expense_ledger::logging::init_tracing;
use expense_ledger::storage::{LedgerFile, LedgerStore};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Track personal income, expenses and monthly budgets",
    long_about = "A personal income and expense ledger. Record transactions against \
                  categories, set monthly budgets for expense categories and see where \
                  the month's money went. Everything is kept in one JSON file."
)]
struct Cli {
    /// Ledger file (defaults to $EXPENSE_LEDGER_FILE, then expense_data.json beside the executable)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income or expense
    Add(AddArgs),

    /// List transactions, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Currency commands
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Show the monthly dashboard
    #[command(alias = "dashboard")]
    Report {
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Replace an unreadable ledger file with a fresh one
    Recover {
        /// Confirm moving the current file aside
        #[arg(long)]
        yes: bool,
    },

    /// Show where the ledger file is
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = LedgerPaths::resolve(cli.file)?;
    let path = paths.ledger_file();

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut open_store(path)?, args)?,
        Some(Commands::List(args)) => handle_list_command(&open_store(path)?, args)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut open_store(path)?, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut open_store(path)?, cmd)?,
        Some(Commands::Currency(cmd)) => handle_currency_command(&mut open_store(path)?, cmd)?,
        Some(Commands::Report { month }) => {
            handle_report_command(&open_store(path)?, month.as_deref())?
        }
        Some(Commands::Recover { yes }) => recover(path, yes)?,
        Some(Commands::Config) => {
            let store = open_store(path)?;
            println!("Ledger file: {}", path.display());
            println!("Exists:      {}", store.file().exists());
            println!("Currency:    {}", store.currency().label());
        }
        None => {
            println!("ledger - personal income and expense tracking");
            println!();
            println!("Run 'ledger --help' for usage information.");
            println!("Run 'ledger report' to see this month's dashboard.");
        }
    }

    Ok(())
}

fn open_store(path: &Path) -> Result<LedgerStore> {
    LedgerStore::open(path).map_err(|e| {
        if e.is_corrupt() {
            anyhow::Error::new(e).context(
                "refusing to overwrite the ledger; run 'ledger recover --yes' to move it aside and start fresh",
            )
        } else {
            anyhow::Error::new(e)
        }
    })
}

/// Move a corrupt ledger aside and start fresh
///
/// Only a file that loads as corrupt is touched; any other load failure is
/// reported as-is.
fn recover(path: &Path, confirmed: bool) -> Result<()> {
    let file = LedgerFile::new(path);

    match file.load() {
        Ok(_) => {
            println!("Ledger file {} is readable; nothing to recover.", file.path().display());
            return Ok(());
        }
        Err(e) if !e.is_corrupt() => {
            return Err(anyhow::Error::new(e).context("cannot check the ledger file"));
        }
        Err(_) => {}
    }

    if !confirmed {
        anyhow::bail!(
            "this moves {} aside and starts an empty ledger; re-run with --yes to confirm",
            file.path().display()
        );
    }

    let (store, moved) = LedgerStore::recover(file).context("failed to recover ledger")?;
    if let Some(moved) = moved {
        println!("Moved unreadable ledger to {}", moved.display());
    }
    println!("Started a fresh ledger at {}", store.file().path().display());
    Ok(())
}
