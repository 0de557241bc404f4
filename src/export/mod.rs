//! Export module for spendtrack
//!
//! Writes the full, unfiltered expense list in one of three formats:
//! - JSON: the default `expenses.json` download
//! - CSV: spreadsheet-compatible
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::path::Path;

use clap::ValueEnum;

use crate::error::SpendResult;
use crate::file_io::write_atomic;
use crate::models::Expense;

pub use self::csv::export_csv;
pub use json::{export_json, DEFAULT_EXPORT_FILE};
pub use yaml::export_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// CSV with one row per expense
    Csv,
    /// YAML sequence
    Yaml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Write expenses to `path` atomically in the given format
///
/// An existing file is replaced only once the new content is fully written.
pub fn export_to_file(expenses: &[Expense], path: &Path, format: ExportFormat) -> SpendResult<()> {
    write_atomic(path, |writer| match format {
        ExportFormat::Json => export_json(expenses, writer),
        ExportFormat::Csv => export_csv(expenses, writer),
        ExportFormat::Yaml => export_yaml(expenses, writer),
    })
}
