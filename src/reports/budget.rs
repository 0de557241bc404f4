//! Budget Goals Report
//!
//! Progress of each budget goal against the full, unfiltered expense list.

use crate::display::{double_separator, format_bar, format_percentage, separator};
use crate::models::{BudgetGoals, Expense, Money};
use crate::services::{evaluate_all, BudgetStatus};

const BAR_WIDTH: usize = 20;

/// Budget Goals Report
#[derive(Debug, Clone)]
pub struct BudgetReport {
    pub statuses: Vec<BudgetStatus>,
}

impl BudgetReport {
    pub fn generate(goals: &BudgetGoals, expenses: &[Expense]) -> Self {
        Self {
            statuses: evaluate_all(goals, expenses),
        }
    }

    /// Goals whose spend exceeds the limit
    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetStatus> {
        self.statuses.iter().filter(|s| s.over_budget)
    }

    pub fn total_limit(&self) -> Money {
        self.statuses.iter().map(|s| s.limit).sum()
    }

    pub fn total_spent(&self) -> Money {
        self.statuses.iter().map(|s| s.spent).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Budget Goals\n");
        output.push_str(&double_separator(72));
        output.push('\n');

        if self.statuses.is_empty() {
            output.push_str("No budget goals set. Use 'spendtrack budget set' to add one.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<16} {:>23} {:>6}  {:<20}\n",
            "Category", "Spent / Limit", "%", "Progress"
        ));
        output.push_str(&separator(72));
        output.push('\n');

        for status in &self.statuses {
            let marker = if status.over_budget { " OVER" } else { "" };
            output.push_str(&format!(
                "{:<16} {:>23} {:>6}  {}{}\n",
                status.category.label(),
                format!(
                    "{} / {}",
                    status.spent.format_with_symbol(symbol),
                    status.limit.format_with_symbol(symbol)
                ),
                format_percentage(status.percentage),
                format_bar(status.progress(), 100.0, BAR_WIDTH),
                marker
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>23}\n",
            "TOTAL",
            format!(
                "{} / {}",
                self.total_spent().format_with_symbol(symbol),
                self.total_limit().format_with_symbol(symbol)
            )
        ));

        let over = self.over_budget().count();
        if over > 0 {
            output.push_str(&format!("\n⚠ {} budget(s) exceeded\n", over));
        }

        output
    }
}
