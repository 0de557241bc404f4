//! CLI command for data export
//!
//! Writes the full, unfiltered expense list to a file.

use clap::Args;
use std::path::PathBuf;

use crate::error::SpendResult;
use crate::export::{export_to_file, ExportFormat, DEFAULT_EXPORT_FILE};
use crate::store::ExpenseStore;

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,
}

/// Handle the export command
pub fn handle_export_command<A>(store: &ExpenseStore<A>, args: ExportArgs) -> SpendResult<()> {
    export_to_file(store.expenses(), &args.output, args.format)?;

    println!(
        "Exported {} expense(s) as {} to: {}",
        store.len(),
        args.format,
        args.output.display()
    );

    Ok(())
}
