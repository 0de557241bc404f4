//! Expense display formatting
//!
//! Renders the expense list as a table and single expenses as a detail block.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::Expense;

const TITLE_WIDTH: usize = 32;
const NOTE_WIDTH: usize = 24;

/// One row of the expense table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, symbol: &str) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            title: truncate(&expense.title, TITLE_WIDTH),
            category: expense.category.label().to_string(),
            amount: expense.amount.format_with_symbol(symbol),
            note: expense
                .note
                .as_deref()
                .map(|n| truncate(n, NOTE_WIDTH))
                .unwrap_or_default(),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow::new(e, symbol));
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format a single expense with all its fields
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.title));
    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!("  Date:     {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("  Category: {}\n", expense.category.label()));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    if let Some(note) = &expense.note {
        output.push_str(&format!("  Note:     {}\n", note));
    }

    output
}
