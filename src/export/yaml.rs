//! YAML Export functionality
//!
//! Exports the expense list to YAML for a human-readable copy.

use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::models::Expense;

/// Export expenses to YAML, preceded by a short comment header
pub fn export_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendResult<()> {
    writeln!(writer, "# spendtrack expense export").map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer, "# {} expense(s)", expenses.len())
        .map_err(|e| SpendError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, expenses).map_err(|e| SpendError::Export(e.to_string()))
}
