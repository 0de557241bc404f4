//! Reports module for spendtrack
//!
//! Terminal reports built from the derived-data layer:
//! - Spending summary with per-category breakdown
//! - Monthly trends with the month-over-month insight
//! - Budget goal progress

pub mod budget;
pub mod summary;
pub mod trends;

pub use budget::BudgetReport;
pub use summary::{CategoryLine, SummaryReport};
pub use trends::TrendReport;
