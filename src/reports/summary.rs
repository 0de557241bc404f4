//! Spending Summary
//!
//! Statistics over the currently filtered expense list: the total, average
//! and category-count cards plus the per-category breakdown.

use crate::display::{double_separator, format_bar, format_percentage, separator};
use crate::models::{Expense, ExpenseCategory, Money};
use crate::services::{average, by_category, total, ExpenseFilter};

const BAR_WIDTH: usize = 20;

/// Spending breakdown for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLine {
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of the total spend
    pub percentage: f64,
}

/// Spending Summary
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Filter the report was computed under
    pub filter: ExpenseFilter,
    pub total: Money,
    pub average: Money,
    pub expense_count: usize,
    /// Categories with spending, largest first
    pub categories: Vec<CategoryLine>,
}

impl SummaryReport {
    /// Generate a summary over an already filtered list
    pub fn generate(expenses: &[Expense], filter: ExpenseFilter) -> Self {
        let total_spend = total(expenses);

        let mut categories: Vec<CategoryLine> = by_category(expenses)
            .into_iter()
            .map(|(category, amount)| CategoryLine {
                category,
                amount,
                count: expenses.iter().filter(|e| e.category == category).count(),
                percentage: amount.percent_of(total_spend).unwrap_or(0.0),
            })
            .collect();

        // Largest first; ties keep category order
        categories.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self {
            filter,
            total: total_spend,
            average: average(expenses),
            expense_count: expenses.len(),
            categories,
        }
    }

    /// Number of distinct categories with spending
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending Summary\n");
        output.push_str(&double_separator(72));
        output.push('\n');
        if !self.filter.is_identity() {
            output.push_str(&format!("Filter: {}\n", describe_filter(&self.filter)));
        }
        output.push_str(&format!(
            "Total Expenses:   {}\n",
            self.total.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Average Expense:  {}\n",
            self.average.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Total Categories: {}\n", self.category_count()));
        output.push_str(&format!("Expense Count:    {}\n\n", self.expense_count));

        if self.categories.is_empty() {
            output.push_str("No expenses to summarize.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<16} {:>12} {:>6} {:>6}  {}\n",
            "Category", "Amount", "Count", "%", "Share"
        ));
        output.push_str(&separator(72));
        output.push('\n');

        for line in &self.categories {
            output.push_str(&format!(
                "{:<16} {:>12} {:>6} {:>6}  {}\n",
                line.category.label(),
                line.amount.format_with_symbol(symbol),
                line.count,
                format_percentage(line.percentage),
                format_bar(line.percentage, 100.0, BAR_WIDTH)
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>12} {:>6}\n",
            "TOTAL",
            self.total.format_with_symbol(symbol),
            self.expense_count
        ));

        output
    }
}

fn describe_filter(filter: &ExpenseFilter) -> String {
    let mut parts = vec![format!("category {}", filter.category)];
    if let Some(start) = filter.range.start {
        parts.push(format!("from {}", start));
    }
    if let Some(end) = filter.range.end {
        parts.push(format!("to {}", end));
    }
    parts.join(", ")
}
