use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use spendtrack::api::HttpExpenseApi;
use spendtrack::cli::expense::format_category_list;
use spendtrack::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_report_command,
    BudgetCommands, ExpenseCommands, ExportArgs, ReportCommands,
};
use spendtrack::config::{Settings, SpendPaths};
use spendtrack::error::SpendResult;
use spendtrack::store::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendtrack",
    version,
    about = "Personal expense tracker",
    long_about = "spendtrack records expenses in a remote expense service and shows \
                  statistics, monthly trends and budget progress from the command line."
)]
struct Cli {
    /// Base URL of the expense API (overrides the settings file)
    #[arg(long, global = true, env = "SPENDTRACK_API_URL")]
    api_url: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Budget goal commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export all expenses to a file
    Export(ExportArgs),

    /// List expense categories with their labels and colors
    Categories,

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        println!("spendtrack - personal expense tracker");
        println!();
        println!("Run 'spendtrack --help' for usage information.");
        return Ok(());
    };

    let paths = SpendPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // The override applies to this run only and never reaches the settings file
    let api_url = match cli.api_url {
        Some(url) => {
            Settings::validate_api_url(&url)?;
            url
        }
        None => settings.api_url.clone(),
    };

    match command {
        Commands::Expense(cmd) => {
            let mut store = load_store(&settings, &api_url).await?;
            handle_expense_command(&mut store, &settings, cmd).await?;
        }
        Commands::Report(cmd) => {
            let store = load_store(&settings, &api_url).await?;
            handle_report_command(&store, &settings, cmd)?;
        }
        Commands::Budget(cmd) if cmd.needs_expenses() => {
            let store = load_store(&settings, &api_url).await?;
            handle_budget_command(&paths, &mut settings, Some(&store), cmd)?;
        }
        Commands::Budget(cmd) => {
            handle_budget_command::<HttpExpenseApi>(&paths, &mut settings, None, cmd)?;
        }
        Commands::Export(args) => {
            let store = load_store(&settings, &api_url).await?;
            handle_export_command(&store, args)?;
        }
        Commands::Categories => {
            print!("{}", format_category_list());
        }
        Commands::Config => {
            println!("spendtrack Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  API URL:         {}", api_url);
            println!("  Request timeout: {}s", settings.request_timeout_secs);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Budget goals:    {}", settings.budgets.len());
            for budget in settings.budgets.iter() {
                println!(
                    "    {:<16} {}",
                    budget.category().label(),
                    budget.limit().format_with_symbol(&settings.currency_symbol)
                );
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so command output stays clean
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the gateway and seed the store with one fetch
async fn load_store(
    settings: &Settings,
    api_url: &str,
) -> SpendResult<ExpenseStore<HttpExpenseApi>> {
    let api = HttpExpenseApi::new(api_url, settings.request_timeout())?;
    debug!(url = %api.collection_url(), "loading expenses");
    ExpenseStore::load(api).await
}
