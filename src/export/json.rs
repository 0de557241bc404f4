//! JSON Export functionality
//!
//! Writes the full expense list as a pretty-printed JSON array of expense
//! records, the same shape the persistence API serves.

use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::models::Expense;

/// Default file name for the JSON export
pub const DEFAULT_EXPORT_FILE: &str = "expenses.json";

/// Export expenses as a pretty JSON array
pub fn export_json<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendResult<()> {
    serde_json::to_writer_pretty(&mut *writer, expenses)
        .map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendError::Export(e.to_string()))?;
    Ok(())
}
