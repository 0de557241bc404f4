//! Aggregations over expense lists
//!
//! Pure functions behind the statistics cards and the trend chart: totals,
//! averages, per-category sums and the month-bucketed trend series.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Expense, ExpenseCategory, Money};

/// Total spend for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Year-month key, `YYYY-MM`
    pub month: String,
    pub amount: Money,
}

/// Sum of all amounts; zero for an empty list
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Mean amount; zero for an empty list
pub fn average(expenses: &[Expense]) -> Money {
    total(expenses).split_evenly(expenses.len())
}

/// Sum of amounts per category
///
/// Categories without expenses are absent rather than zero.
pub fn by_category(expenses: &[Expense]) -> BTreeMap<ExpenseCategory, Money> {
    let mut sums = BTreeMap::new();
    for expense in expenses {
        *sums.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
    }
    sums
}

/// Number of distinct categories present
pub fn category_count(expenses: &[Expense]) -> usize {
    by_category(expenses).len()
}

/// Month-bucketed spend, ascending by month
///
/// The series is sparse: months without expenses have no point.
pub fn monthly_trend(expenses: &[Expense]) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *buckets
            .entry(expense.month_key())
            .or_insert_with(Money::zero) += expense.amount;
    }

    buckets
        .into_iter()
        .map(|(month, amount)| TrendPoint { month, amount })
        .collect()
}

/// Month-over-month comparison of the last two trend buckets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendInsight {
    /// Fewer than two months of data
    NotEnoughData,
    /// Last month is higher; percentage is positive
    Increased(f64),
    /// Last month is lower; percentage is the positive magnitude
    Decreased(f64),
    /// Both months are equal
    Unchanged,
    /// Previous month totalled zero, so no percentage exists
    NewSpending,
}

impl fmt::Display for TrendInsight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughData => write!(f, "Start tracking your expenses to see insights!"),
            Self::Increased(pct) => write!(
                f,
                "Spending increased by {:.1}% compared to last month",
                pct
            ),
            Self::Decreased(pct) => write!(
                f,
                "Spending decreased by {:.1}% compared to last month",
                pct
            ),
            Self::Unchanged => write!(f, "Spending is unchanged compared to last month"),
            Self::NewSpending => write!(
                f,
                "Spending increased from nothing compared to last month"
            ),
        }
    }
}

/// Compare the last trend bucket with the one before it
pub fn trend_insight(series: &[TrendPoint]) -> TrendInsight {
    let [.., previous, last] = series else {
        return TrendInsight::NotEnoughData;
    };

    if last.amount == previous.amount {
        return TrendInsight::Unchanged;
    }

    match (last.amount - previous.amount).percent_of(previous.amount) {
        None => TrendInsight::NewSpending,
        Some(pct) if pct > 0.0 => TrendInsight::Increased(pct),
        Some(pct) => TrendInsight::Decreased(pct.abs()),
    }
}
