//! Budget CLI commands
//!
//! Budget goals are local settings. Only `show` needs the expense list;
//! the other commands edit and save the settings file without any network call.

use clap::Subcommand;

use super::{parse_amount, parse_category};
use crate::config::{Settings, SpendPaths};
use crate::error::{SpendError, SpendResult};
use crate::reports::BudgetReport;
use crate::store::ExpenseStore;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show spending against each budget goal
    Show,

    /// Set the spending limit for a category
    Set {
        /// Category name
        category: String,
        /// Limit (e.g., "250" or "250.00"); must be positive
        limit: String,
    },

    /// Remove the budget goal for a category
    Remove {
        /// Category name
        category: String,
    },

    /// Restore the default budget goals
    Reset,
}

impl BudgetCommands {
    /// Whether the command reads expenses from the API
    pub fn needs_expenses(&self) -> bool {
        matches!(self, Self::Show)
    }
}

/// Handle a budget command
///
/// `store` must be loaded for commands where [`BudgetCommands::needs_expenses`]
/// is true.
pub fn handle_budget_command<A>(
    paths: &SpendPaths,
    settings: &mut Settings,
    store: Option<&ExpenseStore<A>>,
    cmd: BudgetCommands,
) -> SpendResult<()> {
    let symbol = settings.currency_symbol.clone();

    match cmd {
        BudgetCommands::Show => {
            let store = store.ok_or_else(|| {
                SpendError::Config("expense list is required to show budgets".into())
            })?;
            let report = BudgetReport::generate(&settings.budgets, store.expenses());
            print!("{}", report.format_terminal(&symbol));
        }

        BudgetCommands::Set { category, limit } => {
            let category = parse_category(&category)?;
            let limit = parse_amount(&limit)?;

            let budget = settings
                .budgets
                .set_limit(category, limit)
                .map_err(|e| SpendError::Validation(e.to_string()))?;
            println!(
                "Budget for {} set to {}",
                budget.category().label(),
                budget.limit().format_with_symbol(&symbol)
            );
            settings.save(paths)?;
        }

        BudgetCommands::Remove { category } => {
            let category = parse_category(&category)?;
            let removed = settings
                .budgets
                .remove(category)
                .ok_or_else(|| SpendError::budget_not_found(category.key()))?;
            settings.save(paths)?;
            println!("Removed budget for {}", removed.category().label());
        }

        BudgetCommands::Reset => {
            settings.budgets.reset();
            settings.save(paths)?;
            println!("Budget goals restored to defaults:");
            for budget in settings.budgets.iter() {
                println!(
                    "  {:<16} {}",
                    budget.category().label(),
                    budget.limit().format_with_symbol(&symbol)
                );
            }
        }
    }

    Ok(())
}
