//! Derived-data layer for spendtrack
//!
//! Pure functions recomputed from the current store contents and filter
//! state: filtering, aggregation and budget evaluation.

pub mod aggregate;
pub mod budget;
pub mod filter;

pub use aggregate::{
    average, by_category, category_count, monthly_trend, total, trend_insight, TrendInsight,
    TrendPoint,
};
pub use budget::{evaluate, evaluate_all, spent_in, BudgetStatus};
pub use filter::{filter_expenses, CategoryFilter, DateRange, ExpenseFilter};
