//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and report layers.

pub mod budget;
pub mod expense;
pub mod export;
pub mod report;

use chrono::NaiveDate;
use clap::Args;

use crate::error::{SpendError, SpendResult};
use crate::models::{ExpenseCategory, Money};
use crate::services::{CategoryFilter, DateRange, ExpenseFilter};

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, ReportCommands};

/// Category and date filters shared by listing and statistics
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Category to show, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: String,
    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> SpendResult<ExpenseFilter> {
        let category: CategoryFilter = self
            .category
            .parse()
            .map_err(|e| SpendError::Validation(format!("{}", e)))?;
        let start = self.from.as_deref().map(parse_date).transpose()?;
        let end = self.to.as_deref().map(parse_date).transpose()?;

        Ok(ExpenseFilter::new(category, DateRange::new(start, end)))
    }
}

pub(crate) fn parse_amount(input: &str) -> SpendResult<Money> {
    Money::parse(input)
        .map_err(|e| SpendError::Validation(format!("Invalid amount '{}': {}", input, e)))
}

pub(crate) fn parse_category(input: &str) -> SpendResult<ExpenseCategory> {
    input
        .parse()
        .map_err(|e| SpendError::Validation(format!("{}", e)))
}

pub(crate) fn parse_date(input: &str) -> SpendResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        SpendError::Validation(format!(
            "Invalid date '{}'. Use the YYYY-MM-DD format.",
            input
        ))
    })
}
