//! Core data models for spendtrack
//!
//! This module contains the data structures of the expense domain: expenses,
//! their categories, money amounts and budget goals.

pub mod budget;
pub mod category;
pub mod expense;
pub mod money;

pub use budget::{Budget, BudgetGoals, BudgetValidationError};
pub use category::{CategoryInfo, CategoryParseError, ExpenseCategory};
pub use expense::{Expense, ExpenseDraft, ExpenseId, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
