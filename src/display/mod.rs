//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and report elements for
//! terminal display.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table};
pub use report::{double_separator, format_bar, format_percentage, separator, truncate};
