//! Budget goal model
//!
//! A budget is a per-category spending ceiling. Limits are strictly positive;
//! that is enforced on construction and on deserialization so evaluation never
//! divides by zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::money::Money;

/// A spending ceiling for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BudgetRepr")]
pub struct Budget {
    category: ExpenseCategory,
    limit: Money,
}

#[derive(Deserialize)]
struct BudgetRepr {
    category: ExpenseCategory,
    limit: Money,
}

impl TryFrom<BudgetRepr> for Budget {
    type Error = BudgetValidationError;

    fn try_from(repr: BudgetRepr) -> Result<Self, Self::Error> {
        Budget::new(repr.category, repr.limit)
    }
}

impl Budget {
    /// Create a budget, rejecting zero or negative limits
    pub fn new(category: ExpenseCategory, limit: Money) -> Result<Self, BudgetValidationError> {
        if !limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(limit));
        }
        Ok(Self { category, limit })
    }

    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    pub fn limit(&self) -> Money {
        self.limit
    }
}

/// The set of budget goals, at most one per category, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetGoals(Vec<Budget>);

impl Default for BudgetGoals {
    fn default() -> Self {
        Self(vec![
            Budget {
                category: ExpenseCategory::Food,
                limit: Money::from_dollars_cents(500, 0),
            },
            Budget {
                category: ExpenseCategory::Entertainment,
                limit: Money::from_dollars_cents(200, 0),
            },
            Budget {
                category: ExpenseCategory::Transportation,
                limit: Money::from_dollars_cents(300, 0),
            },
        ])
    }
}

impl BudgetGoals {
    /// An empty set of goals
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Budget> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the goal for a category
    pub fn get(&self, category: ExpenseCategory) -> Option<&Budget> {
        self.0.iter().find(|b| b.category == category)
    }

    /// Set the limit for a category, adding the goal if it does not exist
    pub fn set_limit(
        &mut self,
        category: ExpenseCategory,
        limit: Money,
    ) -> Result<&Budget, BudgetValidationError> {
        let budget = Budget::new(category, limit)?;

        let index = match self.0.iter().position(|b| b.category == category) {
            Some(index) => {
                self.0[index] = budget;
                index
            }
            None => {
                self.0.push(budget);
                self.0.len() - 1
            }
        };

        Ok(&self.0[index])
    }

    /// Remove the goal for a category, returning it if present
    pub fn remove(&mut self, category: ExpenseCategory) -> Option<Budget> {
        let index = self.0.iter().position(|b| b.category == category)?;
        Some(self.0.remove(index))
    }

    /// Restore the default goals
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate the whole set
    ///
    /// Deserialization already rejects bad limits; this catches duplicates.
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        for (i, budget) in self.0.iter().enumerate() {
            if self.0[..i].iter().any(|b| b.category == budget.category) {
                return Err(BudgetValidationError::DuplicateCategory(budget.category));
            }
        }
        Ok(())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveLimit(Money),
    DuplicateCategory(ExpenseCategory),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be greater than zero (got {})", limit)
            }
            Self::DuplicateCategory(category) => {
                write!(f, "More than one budget for category '{}'", category.key())
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
