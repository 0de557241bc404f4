//! Expense filtering
//!
//! Narrows the displayed expense list by category and by an inclusive date
//! range without touching the underlying data.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::models::{CategoryParseError, Expense, ExpenseCategory};

/// Category selector: one category or all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ExpenseCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: ExpenseCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{}", category.key()),
        }
    }
}

/// Inclusive date range; either end may be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Combined category and date filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpenseFilter {
    pub category: CategoryFilter,
    pub range: DateRange,
}

impl ExpenseFilter {
    pub fn new(category: CategoryFilter, range: DateRange) -> Self {
        Self { category, range }
    }

    /// Check whether an expense passes both the category and the date test
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category.matches(expense.category) && self.range.contains(expense.date)
    }

    /// Check whether the filter lets everything through
    pub fn is_identity(&self) -> bool {
        self.category == CategoryFilter::All && self.range.is_open()
    }
}

/// Apply a filter, preserving the original relative order
pub fn filter_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}
