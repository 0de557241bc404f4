//! CSV Export functionality
//!
//! Exports expenses to a spreadsheet-compatible CSV file.

use std::io::Write;

use serde::Serialize;

use crate::error::{SpendError, SpendResult};
use crate::models::Expense;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    date: String,
    title: &'a str,
    category: &'static str,
    amount: String,
    note: &'a str,
}

impl<'a> From<&'a Expense> for CsvRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_str(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            title: &expense.title,
            category: expense.category.key(),
            amount: format!("{:.2}", expense.amount.as_decimal()),
            note: expense.note.as_deref().unwrap_or(""),
        }
    }
}

/// Export expenses to CSV with header `id,date,title,category,amount,note`
pub fn export_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if expenses.is_empty() {
        csv_writer
            .write_record(["id", "date", "title", "category", "amount", "note"])
            .map_err(|e| SpendError::Export(e.to_string()))?;
    }

    for expense in expenses {
        csv_writer
            .serialize(CsvRow::from(expense))
            .map_err(|e| SpendError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendError::Export(e.to_string()))
}
