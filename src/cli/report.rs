//! Report CLI commands
//!
//! Statistics over the filtered list and trends over the full list.

use clap::Subcommand;

use super::FilterArgs;
use crate::config::Settings;
use crate::error::SpendResult;
use crate::reports::{SummaryReport, TrendReport};
use crate::store::ExpenseStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total, average and per-category breakdown
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Month-by-month spending with the month-over-month insight
    Trends,
}

/// Handle a report command
pub fn handle_report_command<A>(
    store: &ExpenseStore<A>,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Stats { filter } => {
            let filter = filter.to_filter()?;
            let expenses = store.filtered(&filter);
            let report = SummaryReport::generate(&expenses, filter);
            print!("{}", report.format_terminal(symbol));
        }
        ReportCommands::Trends => {
            let report = TrendReport::generate(store.expenses());
            print!("{}", report.format_terminal(symbol));
        }
    }

    Ok(())
}
